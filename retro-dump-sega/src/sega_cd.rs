//! Mega-CD / Sega CD system area.
//!
//! The disc starts with `SEGADISCSYSTEM`; the cartridge-style header that
//! follows at 0x100 carries the copyright line (0x110) and the product
//! line (0x180), e.g. `(C)SEGA 1993.SEP` and `GM MK-4407 -00`.

use crate::SegaBuildInfo;
use crate::date;
use crate::header::{header_sector, line};

const HARDWARE_IDS: &[&str] = &["SEGADISCSYSTEM", "SEGABOOTDISC"];

const COPYRIGHT_LINE: usize = 0x110 / 16;
const PRODUCT_LINE: usize = 0x180 / 16;

pub fn parse_sega_cd_header(sector: &[u8]) -> Option<SegaBuildInfo> {
    let id = line(sector, 0)?;
    if !HARDWARE_IDS.iter().any(|h| id.starts_with(h)) {
        return None;
    }

    let date = line(sector, COPYRIGHT_LINE).and_then(|l| {
        l.split_whitespace()
            .rev()
            .find_map(date::normalize)
    });
    let (serial, version) = line(sector, PRODUCT_LINE)
        .map(|l| split_product_code(&l))
        .unwrap_or_default();

    Some(SegaBuildInfo {
        serial,
        version,
        date,
    })
}

/// Split `GM MK-4407 -00` into `MK-4407` and `00`. The leading software
/// type (`GM`, `AI`, ...) is dropped.
fn split_product_code(line: &str) -> (Option<String>, Option<String>) {
    let mut words = line.split_whitespace();
    let first = words.next();
    let code = match first {
        Some(t) if t.len() == 2 && t.bytes().all(|b| b.is_ascii_uppercase()) => words.next(),
        other => other,
    };
    let Some(code) = code else {
        return (None, None);
    };

    if let Some(version) = words.next() {
        let version = version.trim_start_matches('-');
        return (
            Some(code.to_string()),
            (!version.is_empty()).then(|| version.to_string()),
        );
    }

    match code.rsplit_once('-') {
        Some((serial, version))
            if serial.contains('-') && version.len() == 2 && version.bytes().all(|b| b.is_ascii_digit()) =>
        {
            (Some(serial.to_string()), Some(version.to_string()))
        }
        _ => (Some(code.to_string()), None),
    }
}

pub fn sega_cd_build_info(main_info: &str) -> Option<SegaBuildInfo> {
    parse_sega_cd_header(&header_sector(main_info)?)
}

#[cfg(test)]
#[path = "tests/sega_cd_tests.rs"]
mod tests;
