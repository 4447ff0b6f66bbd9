use super::*;
use crate::test_main_info::{main_info, raw_mode1, sector_from_lines};

fn saturn_sector() -> Vec<u8> {
    sector_from_lines(&[
        "SEGA SEGASATURN ",
        "SEGA ENTERPRISES",
        "MK-81086  V1.000",
        "19941122CD-1/1  ",
        "JTUBKAEL        ",
    ])
}

#[test]
fn test_parse_saturn_header() {
    let info = parse_saturn_header(&saturn_sector()).unwrap();
    assert_eq!(info.serial.as_deref(), Some("MK-81086"));
    assert_eq!(info.version.as_deref(), Some("1.000"));
    assert_eq!(info.date.as_deref(), Some("1994-11-22"));
}

#[test]
fn test_parse_saturn_header_rejects_other_discs() {
    let sector = sector_from_lines(&["SEGA SEGAKATANA ", "SEGA ENTERPRISES"]);
    assert!(parse_saturn_header(&sector).is_none());
}

#[test]
fn test_parse_saturn_header_bad_date() {
    let sector = sector_from_lines(&[
        "SEGA SEGASATURN ",
        "SEGA ENTERPRISES",
        "T-1234G   V1.002",
        "1995XXXXCD-1/1  ",
    ]);
    let info = parse_saturn_header(&sector).unwrap();
    assert_eq!(info.serial.as_deref(), Some("T-1234G"));
    assert_eq!(info.version.as_deref(), Some("1.002"));
    assert_eq!(info.date, None);
}

#[test]
fn test_saturn_build_info_from_raw_dump() {
    let text = main_info(&raw_mode1(&saturn_sector()));
    let info = saturn_build_info(&text).unwrap();
    assert_eq!(info.serial.as_deref(), Some("MK-81086"));
    assert_eq!(info.date.as_deref(), Some("1994-11-22"));
}

#[test]
fn test_saturn_build_info_without_dump() {
    assert!(saturn_build_info("").is_none());
}
