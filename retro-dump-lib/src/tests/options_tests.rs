use super::*;

#[test]
fn test_defaults() {
    let o = Options::default();
    assert_eq!(o.dump.reread_count, 20);
    assert_eq!(o.speed_for(MediaType::CdRom), 24);
    assert_eq!(o.speed_for(MediaType::BluRay), 16);
    assert_eq!(o.speed_for(MediaType::NintendoGameCubeGameDisc), 16);
    assert!(o.output.zip_logs);
}

#[test]
fn test_keys_are_unique_and_readable() {
    let o = Options::default();
    for (i, entry) in OPTION_KEYS.iter().enumerate() {
        assert!(
            OPTION_KEYS[i + 1..].iter().all(|e| e.key != entry.key),
            "duplicate key {}",
            entry.key
        );
        assert!(o.get(entry.key).is_some());
    }
}

#[test]
fn test_set_round_trips_through_get() {
    let mut o = Options::default();
    o.set("speed.dvd", "8").unwrap();
    o.set("dump.reread", "-1").unwrap();
    o.set("output.json", "yes").unwrap();
    o.set("dic.path", "/opt/dic/DiscImageCreator").unwrap();

    assert_eq!(o.get("speed.dvd").as_deref(), Some("8"));
    assert_eq!(o.dump.reread_count, -1);
    assert!(o.output.json);
    assert_eq!(o.dic_path, PathBuf::from("/opt/dic/DiscImageCreator"));
}

#[test]
fn test_set_rejects_bad_input() {
    let mut o = Options::default();
    assert!(matches!(
        o.set("speed.cd", "99"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        o.set("output.json", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        o.set("dump.multi_sector_read_value", "-4"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        o.set("no.such.key", "1"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert_eq!(o, Options::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("options.toml");

    let mut o = Options::default();
    o.set("speed.bd", "4").unwrap();
    o.set("dump.paranoid", "true").unwrap();
    o.save_to(&path).unwrap();

    let loaded = Options::load_from(&path).unwrap();
    assert_eq!(loaded, o);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Options::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Options::default());
}

#[test]
fn test_load_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.toml");
    std::fs::write(&path, "[speeds]\ncd = 8\n").unwrap();
    let loaded = Options::load_from(&path).unwrap();
    assert_eq!(loaded.speeds.cd, 8);
    assert_eq!(loaded.speeds.dvd, 16);
    assert_eq!(loaded.dump, DumpOptions::default());
}

#[test]
fn test_load_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.toml");
    std::fs::write(&path, "speeds = [").unwrap();
    assert!(matches!(Options::load_from(&path), Err(ConfigError::Parse(_))));
}
