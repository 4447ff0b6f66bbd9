//! Xbox family disc metadata.
//!
//! The `xbox` command leaves the disc manufacturing information (`DMI.bin`),
//! the physical format information (`PFI.bin`) and the security sector
//! (`SS.bin`) next to the image. This crate reads the catalog code and media
//! ID out of the DMI and hashes all three files.

mod error;
pub mod xbox;

pub use error::XboxError;
pub use xbox::{
    AUX_FILES, DMI_SIZE, XboxAuxHashes, XboxCatalog, XboxDiscInfo, XgdGeneration, aux_hashes,
    parse_catalog, parse_media_id, read_dmi, read_xbox_disc_info,
};
