use super::*;

#[test]
fn canonical_names_round_trip() {
    for &system in System::all() {
        let parsed: System = system.short_name().parse().unwrap();
        assert_eq!(parsed, system, "round-trip failed for {:?}", system);
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("psx", System::Ps1),
        ("x360", System::Xbox360),
        ("ogxbox", System::Xbox),
        ("mega cd", System::SegaCd),
        ("dc", System::Dreamcast),
        ("gc", System::GameCube),
        ("ajcd", System::AtariJaguarCd),
        ("hvnxp", System::HasbroVideoNowXp),
        ("cdda", System::AudioCd),
    ];
    for (input, expected) in cases {
        let parsed: System = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
    }
}

#[test]
fn case_insensitive_parsing() {
    assert_eq!("PS2".parse::<System>().unwrap(), System::Ps2);
    assert_eq!("Saturn".parse::<System>().unwrap(), System::Saturn);
}

#[test]
fn unknown_string_returns_err() {
    let result: Result<System, _> = "commodore64".parse();
    assert!(result.is_err());
}

#[test]
fn short_name_is_first_alias() {
    for &system in System::all() {
        assert_eq!(
            system.short_name(),
            system.aliases()[0],
            "short_name should be first alias for {:?}",
            system,
        );
    }
}

#[test]
fn aliases_are_unique_across_systems() {
    let mut seen = std::collections::HashSet::new();
    for &system in System::all() {
        for alias in system.aliases() {
            assert!(seen.insert(*alias), "alias '{}' is used twice", alias);
        }
    }
}

#[test]
fn every_system_has_media() {
    for &system in System::all() {
        assert!(!system.media_types().is_empty(), "{:?} has no media", system);
    }
    assert!(System::Xbox.supports_media(MediaType::Dvd));
    assert!(!System::Xbox.supports_media(MediaType::CdRom));
    assert!(System::Dreamcast.supports_media(MediaType::GdRom));
}

#[test]
fn display_returns_display_name() {
    assert_eq!(System::Ps1.to_string(), "Sony PlayStation");
    assert_eq!(System::SegaCd.to_string(), "Sega Mega CD & Sega CD");
}
