//! Recovering the header sector from `_mainInfo.txt`.

use retro_dump_core::hexdump;

const CD_SYNC_PATTERN: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Width of one header line.
pub const LINE_WIDTH: usize = 16;

/// User data of LBA 0 as dumped in `_mainInfo.txt`.
///
/// DiscImageCreator dumps CD sectors raw; the sync pattern, header and (for
/// mode 2) subheader are stripped so that offset 0 is the first user byte.
pub fn header_sector(main_info: &str) -> Option<Vec<u8>> {
    let bytes = hexdump::section_bytes(main_info, 0)?;
    if !bytes.starts_with(&CD_SYNC_PATTERN) {
        return Some(bytes);
    }
    let offset = match bytes.get(15)? {
        1 => 16,
        _ => 24,
    };
    bytes.get(offset..).map(<[u8]>::to_vec)
}

/// The 16-byte line at `index`, non-printable bytes shown as spaces.
///
/// Fields are addressed by column, so nothing is trimmed.
pub fn line(sector: &[u8], index: usize) -> Option<String> {
    let start = index.checked_mul(LINE_WIDTH)?;
    let bytes = sector.get(start..start + LINE_WIDTH)?;
    Some(
        bytes
            .iter()
            .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { ' ' })
            .collect(),
    )
}

/// Trimmed text of `line[range]`, `None` when blank.
pub(crate) fn field(line: &str, range: std::ops::Range<usize>) -> Option<String> {
    let text = line.get(range)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}
