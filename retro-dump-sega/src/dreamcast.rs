//! Dreamcast IP.BIN. Same field layout as the Saturn header, two lines
//! further down: product number and version on line 4, date on line 5.

use crate::SegaBuildInfo;
use crate::date;
use crate::header::{field, header_sector, line};

const HARDWARE_ID: &str = "SEGA SEGAKATANA";

pub fn parse_dreamcast_header(sector: &[u8]) -> Option<SegaBuildInfo> {
    if !line(sector, 0)?.starts_with(HARDWARE_ID) {
        return None;
    }
    let id_line = line(sector, 4)?;
    let date_line = line(sector, 5)?;

    Some(SegaBuildInfo {
        serial: field(&id_line, 0..10),
        version: field(&id_line, 10..16).map(|v| v.trim_start_matches(['V', 'v']).to_string()),
        date: field(&date_line, 0..8).and_then(|d| date::from_yyyymmdd(&d)),
    })
}

pub fn dreamcast_build_info(main_info: &str) -> Option<SegaBuildInfo> {
    parse_dreamcast_header(&header_sector(main_info)?)
}
