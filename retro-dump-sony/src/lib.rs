//! Sony PlayStation disc readers.
//!
//! DiscImageCreator does not report PlayStation build information, so it is
//! recovered from the image itself:
//!
//! - the ISO 9660 filesystem ([`iso`]), read from 2048-byte or raw
//!   2352-byte images
//! - `SYSTEM.CNF` ([`system_cnf`]) for the boot executable, serial and
//!   PS2 disc version
//! - the boot executable's directory record for the EXE build date

mod error;
#[cfg(test)]
#[path = "tests/image.rs"]
mod test_image;
pub mod iso;
pub mod playstation;
pub mod system_cnf;

pub use error::IsoError;
pub use playstation::{PlayStationInfo, read_playstation_info, read_playstation_info_path};
