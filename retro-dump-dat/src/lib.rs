//! DiscImageCreator datfiles and file hashing.

pub mod dat;
pub mod error;
pub mod hasher;

pub use dat::{
    DatRom, Datfile, extract_sha1, parse_datfile, parse_datfile_path, parse_rom_line, rom_lines,
};
pub use error::DatError;
pub use hasher::{FileHashes, hash_file, hash_reader, universal_hash};
