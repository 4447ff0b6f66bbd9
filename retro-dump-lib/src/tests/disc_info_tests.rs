use super::*;

const DVD_DL: &str = "\
========== DiscStructure ==========
\t       BookType: DVD-ROM
\t NumberOfLayers: Double Layer
\tLayerZeroSector: 2084960 (0x1fd060)
\t CopyrightProtectionType: CSS/CPPM
\t RegionManagementInformation: 1 2 3 4 5 6 7 8
";

const DVD_SL: &str = "\
\t NumberOfLayers: Single Layer
\tLayerZeroSector: 2295103 (0x23053f)
\t CopyrightProtectionType: No
";

const CSS_KEYS: &str = "\
DecryptedDiscKey[020]: 69 5e 3b 9d 4e
LBA:   3364, Filename: /VIDEO_TS/VTS_01_1.VOB, TitleKey: f8 c4 ce 0d 1e
LBA:   9210, Filename: /VIDEO_TS/VTS_02_1.VOB, TitleKey: 00 00 00 00 00
";

// -- Layerbreaks --

#[test]
fn test_dual_layer_layerbreak() {
    assert_eq!(parse_layerbreak(DVD_DL), Some(0x1fd060));
}

#[test]
fn test_single_layer_has_no_layerbreak() {
    assert_eq!(parse_layerbreak(DVD_SL), None);
}

#[test]
fn test_layerbreak_decimal_third_field() {
    let text = "LayerZeroSector: 0 1913775\n";
    assert_eq!(parse_layerbreak(text), Some(1913775));
}

#[test]
fn test_layerbreak_with_trailing_comma() {
    let text = "LayerZeroSector: 2084960 (0x1fd060), L0 size\n";
    assert_eq!(parse_layerbreak(text), Some(0x1fd060));
    let text = "LayerBreak: 1913776, L1 Video\n";
    assert_eq!(parse_xbox_layerbreak(text), Some(1913776));
}

#[test]
fn test_xbox_layerbreak() {
    let text = "\tL0 Video: 0 (0x0)\n\tLayerBreak: 1913776\n";
    assert_eq!(parse_xbox_layerbreak(text), Some(1913776));
    assert_eq!(parse_xbox_layerbreak(DVD_DL), None);
}

// -- Protection --

#[test]
fn test_dvd_protection_with_keys() {
    let p = parse_dvd_protection(DVD_DL, Some(CSS_KEYS));
    assert_eq!(p.copyright_type.as_deref(), Some("CSS/CPPM"));
    assert_eq!(p.region_management.as_deref(), Some("1 2 3 4 5 6 7 8"));
    assert_eq!(p.disc_key.as_deref(), Some("69 5e 3b 9d 4e"));
    assert_eq!(p.title_keys.len(), 2);
    assert_eq!(p.title_keys[0].0, "/VIDEO_TS/VTS_01_1.VOB");
    assert_eq!(p.title_keys[0].1, "f8 c4 ce 0d 1e");

    let summary = p.summary();
    assert!(summary.starts_with("Region: 1 2 3 4 5 6 7 8\n"));
    assert!(summary.contains("Title Keys\n/VIDEO_TS/VTS_01_1.VOB: f8 c4 ce 0d 1e"));
}

#[test]
fn test_dvd_protection_without_key_file() {
    let p = parse_dvd_protection(DVD_SL, None);
    assert_eq!(p.copyright_type.as_deref(), Some("No"));
    assert!(p.disc_key.is_none());
    assert!(p.title_keys.is_empty());
    assert!(!p.is_empty());
    assert!(parse_dvd_protection("", None).is_empty());
}

// -- Drive and dump details --

#[test]
fn test_drive_info() {
    let text = "\
\t         VendorId: PLEXTOR 
\t        ProductId: DVDR   PX-760A 
\tProductRevisionLevel: 1.07
";
    let info = parse_drive_info(text);
    assert_eq!(info.manufacturer.as_deref(), Some("PLEXTOR"));
    assert_eq!(info.model.as_deref(), Some("DVDR PX-760A"));
    assert_eq!(info.firmware.as_deref(), Some("1.07"));
    assert_eq!(parse_drive_info(""), DriveInfo::default());
}

#[test]
fn test_write_offset() {
    let text = "========== Offset ==========\n\tCombined Offset(Byte)   1176, (Samples)   294\n";
    assert_eq!(parse_write_offset(text).as_deref(), Some("+294"));
    let text = "\tCombined Offset(Byte)  -48, (Samples)  -12\n";
    assert_eq!(parse_write_offset(text).as_deref(), Some("-12"));
    assert_eq!(parse_write_offset("nothing"), None);
}

#[test]
fn test_antimod() {
    assert_eq!(parse_antimod("Detected anti-mod string"), Some(true));
    assert_eq!(parse_antimod("No anti-mod string"), Some(false));
    assert_eq!(parse_antimod(""), None);
}

#[test]
fn test_disc_type_and_version() {
    assert_eq!(parse_disc_type(DVD_DL).as_deref(), Some("DVD-ROM"));
    assert_eq!(
        parse_dic_version("DiscImageCreator.exe 20230606T000000 ...").as_deref(),
        Some("20230606T000000")
    );
    assert_eq!(parse_dic_version("no version"), None);
}

#[test]
fn test_field_value_uses_first_colon() {
    assert_eq!(field_value("  Key: a:b \n", "Key"), Some("a:b"));
    assert_eq!(field_value("Other: x", "Key"), None);
}
