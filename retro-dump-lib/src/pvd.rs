//! Primary volume descriptor excerpt from `_mainInfo.txt`.

use retro_dump_core::hexdump::{parse_row, section_rows};

const PVD_LBA: u32 = 16;
const FIRST_ROW: u32 = 0x320;
const LAST_ROW: u32 = 0x370;

/// Rows 0x320 through 0x370 of the LBA 16 dump, verbatim and trimmed.
/// These hold the volume dates.
pub fn parse_pvd_rows(main_info: &str) -> Option<String> {
    let rows: Vec<&str> = section_rows(main_info, PVD_LBA)
        .into_iter()
        .filter(|line| {
            parse_row(line).is_some_and(|r| (FIRST_ROW..=LAST_ROW).contains(&r.offset))
        })
        .map(str::trim)
        .collect();
    (!rows.is_empty()).then(|| rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvd_dump() -> String {
        let mut text =
            String::from("========== LBA[000016, 0x00010]: Main Channel ==========\n");
        text.push_str("       +0 +1 +2 +3 +4 +5 +6 +7  +8 +9 +A +B +C +D +E +F\n");
        for offset in (0..0x800).step_by(16) {
            text.push_str(&format!(
                "{:04X} : 30 30 30 30 30 30 30 30  30 30 30 30 30 30 30 30   0000000000000000\n",
                offset
            ));
        }
        text
    }

    #[test]
    fn test_parse_pvd_rows() {
        let rows = parse_pvd_rows(&pvd_dump()).unwrap();
        let lines: Vec<&str> = rows.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("0320 : "));
        assert!(lines[5].starts_with("0370 : "));
    }

    #[test]
    fn test_parse_pvd_rows_missing() {
        assert!(parse_pvd_rows("").is_none());
    }
}
