//! Sega disc header readers.
//!
//! Saturn, Dreamcast and Mega-CD discs carry their product number, version
//! and build date in the first data sector. DiscImageCreator prints that
//! sector as a hex dump in `_mainInfo.txt`; the functions here recover the
//! fields from it.

pub mod date;
pub mod dreamcast;
pub mod header;
pub mod saturn;
pub mod sega_cd;

#[cfg(test)]
#[path = "tests/main_info.rs"]
mod test_main_info;

pub use dreamcast::dreamcast_build_info;
pub use saturn::saturn_build_info;
pub use sega_cd::sega_cd_build_info;

/// Build information recovered from a Sega disc header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegaBuildInfo {
    pub serial: Option<String>,
    pub version: Option<String>,
    /// `YYYY-MM-DD`, or `YYYY-MM` when the header carries no day.
    pub date: Option<String>,
}
