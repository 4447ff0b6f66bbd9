use super::*;
use crate::Parameters;

fn position(flag: Flag) -> usize {
    Flag::ALL
        .iter()
        .position(|f| *f == flag)
        .expect("flag listed in Flag::ALL")
}

/// A minimal, otherwise valid command line for `command` carrying `flag`.
fn sample_line(command: Command, flag: Flag) -> String {
    let signature = command.signature();
    let mut parts = vec![command.token().to_string()];
    if signature.drive {
        parts.push("D".into());
    }
    if signature.filename {
        parts.push("\"out.bin\"".into());
    }
    if signature.speed.is_some() {
        parts.push("8".into());
    }
    if signature.lba_range {
        parts.push("0".into());
        parts.push("100".into());
    }
    parts.push(flag.token().into());
    let mandatory = flag.value_specs().iter().filter(|s| s.is_mandatory()).count();
    parts.extend(std::iter::repeat_n("0".to_string(), mandatory));
    parts.join(" ")
}

#[test]
fn test_emission_order_is_explicit() {
    let tokens: Vec<&str> = Flag::ALL.iter().map(|f| f.token()).collect();
    assert_eq!(
        tokens,
        vec![
            "/d8", "/c2", "/be", "/a", "/p", "/aj", "/c", "/d", "/q", "/rr", "/mscf", "/fix",
            "/f", "/mr", "/ms", "/np", "/nq", "/nl", "/ns", "/nr", "/nss", "/ps", "/ra",
            "/raw", "/re", "/r", "/am", "/sf", "/ss", "/74", "/sk", "/s", "/t", "/avdp",
            "/vn", "/vnc", "/vnx",
        ]
    );
}

#[test]
fn test_flag_tokens_are_unique_and_resolvable() {
    for flag in Flag::ALL {
        assert_eq!(Flag::from_token(flag.token()), Some(*flag));
    }
    let mut tokens: Vec<&str> = Flag::ALL.iter().map(|f| f.token()).collect();
    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), Flag::ALL.len());
}

#[test]
fn test_command_tokens_round_trip() {
    for command in Command::all() {
        assert_eq!(Command::from_token(command.token()), Some(*command));
    }
    assert_eq!(Command::from_token("CD"), None);
    assert_eq!(Command::from_token("/v"), Some(Command::Version));
}

#[test]
fn test_support_tables_follow_emission_order() {
    for command in Command::all() {
        let positions: Vec<usize> = command
            .supported_flags()
            .iter()
            .map(|f| position(*f))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "{} table is out of order or has duplicates",
            command
        );
    }
}

#[test]
fn test_signatures() {
    let cd = Command::CompactDisc.signature();
    assert_eq!(cd.speed, Some(0..=72));
    assert_eq!(cd.arity(), 3);

    assert_eq!(Command::Dvd.signature().speed, Some(0..=24));
    assert_eq!(Command::Sacd.signature().speed, Some(0..=16));
    assert_eq!(Command::Audio.signature().arity(), 5);
    assert!(Command::Data.signature().lba_range);
    assert_eq!(Command::BluRay.signature().speed, None);
    assert_eq!(Command::Sub.signature().arity(), 1);
    assert_eq!(Command::Eject.signature().arity(), 1);
    assert_eq!(Command::Version.signature().arity(), 0);
}

#[test]
fn test_for_media() {
    use retro_dump_core::{MediaType, System};

    assert_eq!(
        Command::for_media(System::Ps1, MediaType::CdRom),
        Some(Command::CompactDisc)
    );
    assert_eq!(
        Command::for_media(System::SuperAudioCd, MediaType::CdRom),
        Some(Command::Sacd)
    );
    assert_eq!(
        Command::for_media(System::Ps2, MediaType::Dvd),
        Some(Command::Dvd)
    );
    assert_eq!(
        Command::for_media(System::Xbox360, MediaType::Dvd),
        Some(Command::Xbox)
    );
    assert_eq!(
        Command::for_media(System::Dreamcast, MediaType::GdRom),
        Some(Command::GdRom)
    );
    assert_eq!(
        Command::for_media(System::Ps3, MediaType::BluRay),
        Some(Command::BluRay)
    );
    assert_eq!(
        Command::for_media(System::Wii, MediaType::NintendoWiiOpticalDisc),
        Some(Command::Dvd)
    );
    assert_eq!(
        Command::for_media(System::IbmPcCompatible, MediaType::FloppyDisk),
        Some(Command::Floppy)
    );
    assert_eq!(
        Command::for_media(System::WiiU, MediaType::NintendoWiiUOpticalDisc),
        None
    );
    assert_eq!(Command::for_media(System::Psp, MediaType::Umd), None);
}

#[test]
fn test_parser_and_builder_agree_with_support_table() {
    for command in Command::all() {
        for flag in Flag::ALL {
            let supported = command.supports(*flag);
            let line = sample_line(*command, *flag);

            match Parameters::parse(&line) {
                Ok(params) => assert_eq!(
                    params.is_enabled(*flag),
                    supported,
                    "support mismatch for '{}'",
                    line
                ),
                Err(e) => panic!("unexpected error for '{}': {}", line, e),
            }

            let mut params = Parameters::new(*command);
            let zeros: Vec<i32> = flag
                .value_specs()
                .iter()
                .filter(|s| s.is_mandatory())
                .map(|_| 0)
                .collect();
            assert_eq!(params.enable_with(*flag, &zeros).is_ok(), supported);
        }
    }
}

#[test]
fn test_cd_family() {
    assert!(Command::CompactDisc.is_cd_family());
    assert!(Command::GdRom.is_cd_family());
    assert!(!Command::Dvd.is_cd_family());
    assert!(!Command::Xbox.is_cd_family());
}

#[test]
fn test_value_specs_follow_flag_table() {
    let c2 = Flag::C2Opcode.value_specs();
    assert_eq!(c2.len(), 4);
    assert!(c2.iter().all(|s| !s.is_mandatory()));
    assert_eq!(
        Flag::Range.value_specs().iter().filter(|s| s.is_mandatory()).count(),
        2
    );
    assert_eq!(Flag::BeOpcode.value_specs().len(), 1);
    assert!(Flag::DisableBeep.value_specs().is_empty());
}
