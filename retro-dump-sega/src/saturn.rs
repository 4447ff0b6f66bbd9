//! Sega Saturn system area (IP.BIN).
//!
//! | Line | Content                                |
//! |------|----------------------------------------|
//! | 0    | `SEGA SEGASATURN `                     |
//! | 2    | product number (10), version (6)       |
//! | 3    | release date `YYYYMMDD`, device info   |

use crate::SegaBuildInfo;
use crate::date;
use crate::header::{field, header_sector, line};

const HARDWARE_ID: &str = "SEGA SEGASATURN";

/// Read build information from a Saturn header sector.
pub fn parse_saturn_header(sector: &[u8]) -> Option<SegaBuildInfo> {
    if !line(sector, 0)?.starts_with(HARDWARE_ID) {
        return None;
    }
    let id_line = line(sector, 2)?;
    let date_line = line(sector, 3)?;

    Some(SegaBuildInfo {
        serial: field(&id_line, 0..10),
        version: field(&id_line, 10..16).map(|v| v.trim_start_matches(['V', 'v']).to_string()),
        date: field(&date_line, 0..8).and_then(|d| date::from_yyyymmdd(&d)),
    })
}

/// Build information from a Saturn dump's `_mainInfo.txt`.
pub fn saturn_build_info(main_info: &str) -> Option<SegaBuildInfo> {
    let info = parse_saturn_header(&header_sector(main_info)?);
    if info.is_none() {
        log::debug!("LBA 0 of _mainInfo.txt is not a Saturn header");
    }
    info
}

#[cfg(test)]
#[path = "tests/saturn_tests.rs"]
mod tests;
