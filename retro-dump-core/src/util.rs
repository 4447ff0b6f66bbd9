/// Read a fixed-length ASCII string from a byte slice.
///
/// Non-printable bytes are replaced with spaces, then the result is trimmed.
/// Does NOT stop at null bytes. Useful for disc headers padded with 0x00
/// or 0x20.
pub fn read_ascii_fixed(buf: &[u8]) -> String {
    let s: String = buf
        .iter()
        .map(|&b| {
            if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                ' '
            }
        })
        .collect();
    s.trim().to_string()
}

/// Lowercase hex encoding of `bytes`.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Big-endian u32 at `offset`, or `None` if the slice is too short.
pub fn read_u32_be(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Parse a number that may be written in decimal or as `0x`-prefixed hex,
/// optionally wrapped in parentheses and followed by a list comma:
/// `1234`, `0x4D2`, `(0x4D2)`, `(0x4D2),`.
pub fn parse_decimal_or_hex(s: &str) -> Option<u64> {
    let s = s
        .trim()
        .trim_end_matches(',')
        .trim_start_matches('(')
        .trim_end_matches(')');
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}
