//! Builds `_mainInfo.txt` fragments for tests.

/// Render `bytes` as the LBA 0 main-channel dump.
pub fn main_info(bytes: &[u8]) -> String {
    let mut out = String::from("========== LBA[000000, 0x00000]: Main Channel ==========\n");
    out.push_str("       +0 +1 +2 +3 +4 +5 +6 +7  +8 +9 +A +B +C +D +E +F\n");
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
        let (left, right) = hex.split_at(hex.len().min(8));
        let ascii: String = chunk
            .iter()
            .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
            .collect();
        out.push_str(&format!(
            "{:04X} : {}  {}   {}\n",
            i * 16,
            left.join(" "),
            right.join(" "),
            ascii
        ));
    }
    out.push('\n');
    out
}

fn raw(user: &[u8], mode: u8, subheader: usize) -> Vec<u8> {
    let mut sector = vec![0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
    sector.extend_from_slice(&[0x00, 0x02, 0x00, mode]);
    sector.extend(std::iter::repeat_n(0u8, subheader));
    sector.extend_from_slice(user);
    sector
}

pub fn raw_mode1(user: &[u8]) -> Vec<u8> {
    raw(user, 1, 0)
}

pub fn raw_mode2(user: &[u8]) -> Vec<u8> {
    raw(user, 2, 8)
}

/// A sector whose 16-byte lines are the given texts, space padded.
pub fn sector_from_lines(lines: &[&str]) -> Vec<u8> {
    let mut sector = Vec::with_capacity(256);
    for line in lines {
        let mut bytes = line.as_bytes().to_vec();
        bytes.resize(16, b' ');
        sector.extend_from_slice(&bytes[..16]);
    }
    sector.resize(sector.len().max(512), 0);
    sector
}
