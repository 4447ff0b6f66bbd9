//! Reading the sector hex dumps DiscImageCreator writes to `_mainInfo.txt`.
//!
//! A dump section starts with a banner such as
//! `========== LBA[000016, 0x00010]: Main Channel ==========`, followed by a
//! column header and rows like
//! `0000 : 00 FF FF FF FF FF FF FF  FF FF FF 00 00 02 00 01   ................`.

/// One parsed row: its offset and up to 16 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexRow {
    pub offset: u32,
    pub bytes: Vec<u8>,
}

/// Banner text identifying the main-channel dump of `lba`.
pub fn section_banner(lba: u32) -> String {
    format!("LBA[{:06}, 0x{:05X}]: Main Channel", lba, lba)
}

/// Parse a dump row. Returns `None` for anything that is not one.
pub fn parse_row(line: &str) -> Option<HexRow> {
    let (offset, rest) = line.trim_start().split_once(" : ")?;
    let offset = u32::from_str_radix(offset.trim(), 16).ok()?;

    let bytes: Vec<u8> = rest
        .split_whitespace()
        .take(16)
        .map_while(|t| {
            if t.len() == 2 {
                u8::from_str_radix(t, 16).ok()
            } else {
                None
            }
        })
        .collect();

    if bytes.is_empty() {
        return None;
    }
    Some(HexRow { offset, bytes })
}

/// Raw rows of the first main-channel dump of `lba`, in file order.
pub fn section_rows<'a>(text: &'a str, lba: u32) -> Vec<&'a str> {
    let banner = section_banner(lba);
    let banner_lower = banner.to_ascii_lowercase();
    let mut lines = text
        .lines()
        .skip_while(|l| !l.to_ascii_lowercase().contains(&banner_lower))
        .skip(1);

    let mut rows = Vec::new();
    for line in lines.by_ref() {
        if parse_row(line).is_some() {
            rows.push(line);
            break;
        }
        if line.contains("==========") {
            return rows;
        }
    }
    rows.extend(lines.take_while(|l| parse_row(l).is_some()));
    rows
}

/// Bytes of the first main-channel dump of `lba`.
pub fn section_bytes(text: &str, lba: u32) -> Option<Vec<u8>> {
    let rows = section_rows(text, lba);
    if rows.is_empty() {
        return None;
    }
    let mut bytes = Vec::with_capacity(rows.len() * 16);
    for row in rows.iter().filter_map(|l| parse_row(l)) {
        bytes.extend(row.bytes);
    }
    Some(bytes)
}
