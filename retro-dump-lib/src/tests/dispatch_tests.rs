use std::path::Path;

use super::*;

fn outputs_in(dir: &Path) -> DumpOutputs {
    DumpOutputs::new(&dir.join("game.bin"))
}

/// `_mainInfo.txt` dump of a sector made of the given 16-byte lines.
fn main_info(lines: &[&str]) -> String {
    let mut text = String::from("========== LBA[000000, 0x00000]: Main Channel ==========\n");
    text.push_str("       +0 +1 +2 +3 +4 +5 +6 +7  +8 +9 +A +B +C +D +E +F\n");
    for (i, line) in lines.iter().enumerate() {
        let mut bytes = line.as_bytes().to_vec();
        bytes.resize(16, b' ');
        let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        text.push_str(&format!(
            "{:04X} : {}  {}   {}\n",
            i * 16,
            hex[..8].join(" "),
            hex[8..].join(" "),
            String::from_utf8_lossy(&bytes)
        ));
    }
    text
}

#[test]
fn test_extractor_table() {
    assert!(extractor_for(System::Ps1).is_some());
    assert!(extractor_for(System::Saturn).is_some());
    assert!(extractor_for(System::Xbox).unwrap().layerbreaks.is_some());
    assert!(extractor_for(System::Ps2).unwrap().layerbreaks.is_none());
    assert!(extractor_for(System::AudioCd).is_none());
    assert!(extractor_for(System::IbmPcCompatible).is_none());
}

#[test]
fn test_image_path() {
    let outputs = DumpOutputs::new(Path::new("/d/game.bin"));
    assert_eq!(image_path(&outputs, MediaType::CdRom), Path::new("/d/game.img"));
    assert_eq!(image_path(&outputs, MediaType::Dvd), Path::new("/d/game.iso"));
}

#[test]
fn test_saturn_identify() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("game_mainInfo.txt"),
        main_info(&[
            "SEGA SEGASATURN ",
            "SEGA ENTERPRISES",
            "MK-81086  V1.000",
            "19941122CD-1/1  ",
        ]),
    )
    .unwrap();

    let mut info = SubmissionInfo::new(System::Saturn, MediaType::CdRom);
    let extractor = extractor_for(System::Saturn).unwrap();
    (extractor.identify)(&outputs_in(dir.path()), MediaType::CdRom, &mut info);

    assert_eq!(info.common.serial, "MK-81086");
    assert_eq!(info.versions.version, "1.000");
    assert_eq!(info.common.exe_date, "1994-11-22");
}

#[test]
fn test_sega_identify_without_header_keeps_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("game_mainInfo.txt"), main_info(&["NOT A SEGA DISC"])).unwrap();

    let mut info = SubmissionInfo::new(System::SegaCd, MediaType::CdRom);
    (extractor_for(System::SegaCd).unwrap().identify)(
        &outputs_in(dir.path()),
        MediaType::CdRom,
        &mut info,
    );
    assert_eq!(info.common.serial, retro_dump_core::REQUIRED_IF_EXISTS);
}

#[test]
fn test_ps1_antimod_without_image() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("game_disc.txt"), "Detected anti-mod string\n").unwrap();

    let mut info = SubmissionInfo::new(System::Ps1, MediaType::CdRom);
    (extractor_for(System::Ps1).unwrap().identify)(
        &outputs_in(dir.path()),
        MediaType::CdRom,
        &mut info,
    );
    assert_eq!(info.copy_protection.antimodchip, Some(true));
    assert_eq!(info.common.serial, retro_dump_core::REQUIRED_IF_EXISTS);
}

#[test]
fn test_xbox_identify_and_layerbreak() {
    let dir = tempfile::tempdir().unwrap();
    let mut dmi = vec![0u8; 2048];
    dmi[8..16].copy_from_slice(b"MS00401A");
    std::fs::write(dir.path().join("DMI.bin"), &dmi).unwrap();
    std::fs::write(dir.path().join("PFI.bin"), b"abc").unwrap();
    std::fs::write(dir.path().join("SS.bin"), b"abc").unwrap();
    std::fs::write(dir.path().join("game_disc.txt"), "\tLayerBreak: 1913776\n").unwrap();

    let outputs = outputs_in(dir.path());
    let mut info = SubmissionInfo::new(System::Xbox, MediaType::Dvd);
    let extractor = extractor_for(System::Xbox).unwrap();
    (extractor.identify)(&outputs, MediaType::Dvd, &mut info);
    (extractor.layerbreaks.unwrap())(&outputs, MediaType::Dvd, &mut info);

    assert_eq!(info.common.serial, "MS-004");
    assert_eq!(info.common.internal_serial, "MS00401A");
    assert_eq!(info.versions.version, "1.01");
    assert_eq!(info.common.region, Some(retro_dump_core::Region::Usa));
    assert_eq!(info.extras.pfi_crc32, "352441c2");
    assert_eq!(info.sizes.layerbreak, Some(1913776));
}
