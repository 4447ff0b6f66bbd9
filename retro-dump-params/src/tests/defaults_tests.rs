use super::*;

fn line(system: System, media: MediaType, filename: &str, options: &DumpOptions) -> String {
    Parameters::with_defaults(system, media, "D", filename, 8, options)
        .unwrap()
        .to_command_line()
        .unwrap()
}

#[test]
fn test_dump_options_default() {
    let options = DumpOptions::default();
    assert_eq!(options.reread_count, 20);
    assert_eq!(options.dvd_reread_count, 10);
    assert!(!options.quiet_mode);
    assert!(!options.multi_sector_read);
}

#[test]
fn test_playstation_presets() {
    assert_eq!(
        line(System::Ps1, MediaType::CdRom, "game.bin", &DumpOptions::default()),
        r#"cd D "game.bin" 8 /c2 20 /nl /am"#
    );
}

#[test]
fn test_plain_cd() {
    assert_eq!(
        line(System::Saturn, MediaType::CdRom, "game.bin", &DumpOptions::default()),
        r#"cd D "game.bin" 8 /c2 20"#
    );
}

#[test]
fn test_reread_sentinels() {
    let mut options = DumpOptions {
        reread_count: -1,
        ..Default::default()
    };
    assert_eq!(
        line(System::Saturn, MediaType::CdRom, "g.bin", &options),
        r#"cd D "g.bin" 8"#
    );

    options.reread_count = 0;
    assert_eq!(
        line(System::Saturn, MediaType::CdRom, "g.bin", &options),
        r#"cd D "g.bin" 8 /c2 20"#
    );

    options.reread_count = 5;
    assert_eq!(
        line(System::Saturn, MediaType::CdRom, "g.bin", &options),
        r#"cd D "g.bin" 8 /c2 5"#
    );

    options.dvd_reread_count = 0;
    assert_eq!(
        line(System::Ps2, MediaType::Dvd, "g.iso", &options),
        r#"dvd D "g.iso" 8 /rr 10"#
    );

    options.dvd_reread_count = -1;
    assert_eq!(
        line(System::Ps2, MediaType::Dvd, "g.iso", &options),
        r#"dvd D "g.iso" 8"#
    );
}

#[test]
fn test_dvd_options() {
    let options = DumpOptions {
        quiet_mode: true,
        use_cmi_flag: true,
        ..Default::default()
    };
    assert_eq!(
        line(System::Ps2, MediaType::Dvd, "g.iso", &options),
        r#"dvd D "g.iso" 8 /c /q /rr 10"#
    );
}

#[test]
fn test_cmi_only_for_dvd() {
    let options = DumpOptions {
        use_cmi_flag: true,
        ..Default::default()
    };
    assert_eq!(
        line(System::Saturn, MediaType::CdRom, "g.bin", &options),
        r#"cd D "g.bin" 8 /c2 20"#
    );
}

#[test]
fn test_xbox_uses_xbox_command() {
    let options = DumpOptions {
        quiet_mode: true,
        ..Default::default()
    };
    assert_eq!(
        line(System::Xbox, MediaType::Dvd, "x.iso", &options),
        r#"xbox D "x.iso" 8 /q"#
    );
}

#[test]
fn test_nintendo_raw() {
    assert_eq!(
        line(
            System::GameCube,
            MediaType::NintendoGameCubeGameDisc,
            "g.iso",
            &DumpOptions::default()
        ),
        r#"dvd D "g.iso" 8 /rr 10 /raw"#
    );
}

#[test]
fn test_pc_cd_protection_scans() {
    assert_eq!(
        line(
            System::IbmPcCompatible,
            MediaType::CdRom,
            "pc.bin",
            &DumpOptions::default()
        ),
        r#"cd D "pc.bin" 8 /c2 20 /ns /sf /ss"#
    );
    assert_eq!(
        line(
            System::IbmPcCompatible,
            MediaType::Dvd,
            "pc.iso",
            &DumpOptions::default()
        ),
        r#"dvd D "pc.iso" 8 /rr 10"#
    );
}

#[test]
fn test_paranoid_mode_cd_only() {
    let options = DumpOptions {
        paranoid_mode: true,
        ..Default::default()
    };
    assert_eq!(
        line(System::Saturn, MediaType::CdRom, "g.bin", &options),
        r#"cd D "g.bin" 8 /c2 20 /ss /s 2"#
    );
    assert_eq!(
        line(System::Ps2, MediaType::Dvd, "g.iso", &options),
        r#"dvd D "g.iso" 8 /rr 10"#
    );
}

#[test]
fn test_multi_sector_read() {
    let options = DumpOptions {
        multi_sector_read: true,
        multi_sector_read_value: 16,
        ..Default::default()
    };
    assert_eq!(
        line(System::Saturn, MediaType::CdRom, "g.bin", &options),
        r#"cd D "g.bin" 8 /c2 20 /mr 16"#
    );
}

#[test]
fn test_system_specific_flags() {
    let options = DumpOptions::default();
    assert_eq!(
        line(System::AtariJaguarCd, MediaType::CdRom, "j.bin", &options),
        r#"cd D "j.bin" 8 /c2 20 /aj"#
    );
    assert_eq!(
        line(System::HasbroVideoNowJr, MediaType::CdRom, "v.bin", &options),
        r#"cd D "v.bin" 8 /c2 20 /vn"#
    );
    assert_eq!(
        line(System::HasbroVideoNowColor, MediaType::CdRom, "v.bin", &options),
        r#"cd D "v.bin" 8 /c2 20 /vnc"#
    );
    assert_eq!(
        line(System::HasbroVideoNowXp, MediaType::CdRom, "v.bin", &options),
        r#"cd D "v.bin" 8 /c2 20 /vnx"#
    );
}

#[test]
fn test_bluray_has_no_speed() {
    let params = Parameters::with_defaults(
        System::Ps3,
        MediaType::BluRay,
        "D",
        "disc.iso",
        8,
        &DumpOptions::default(),
    )
    .unwrap();
    assert_eq!(params.speed, None);
    assert_eq!(params.to_command_line().unwrap(), r#"bd D "disc.iso""#);
}

#[test]
fn test_unsupported_media() {
    assert_eq!(
        Parameters::with_defaults(
            System::WiiU,
            MediaType::NintendoWiiUOpticalDisc,
            "D",
            "x.wud",
            8,
            &DumpOptions::default()
        ),
        Err(ParamError::UnsupportedMedia {
            system: System::WiiU,
            media: MediaType::NintendoWiiUOpticalDisc,
        })
    );
}

#[test]
fn test_defaults_survive_round_trip() {
    let options = DumpOptions {
        quiet_mode: true,
        paranoid_mode: true,
        ..Default::default()
    };
    let params =
        Parameters::with_defaults(System::Ps1, MediaType::CdRom, "D", "ps1.bin", 8, &options)
            .unwrap();
    let reparsed = Parameters::parse(&params.to_command_line().unwrap()).unwrap();
    assert_eq!(reparsed, params);
}
