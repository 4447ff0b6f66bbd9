use super::*;

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"").unwrap();
}

#[test]
fn test_dump_outputs_paths() {
    let outputs = DumpOutputs::new(Path::new("/dumps/game.bin"));
    assert_eq!(outputs.stem(), "game");
    assert_eq!(outputs.path("_disc.txt"), PathBuf::from("/dumps/game_disc.txt"));
    assert_eq!(outputs.sibling("PIC.bin"), PathBuf::from("/dumps/PIC.bin"));
}

#[test]
fn test_dump_outputs_bare_filename() {
    let outputs = DumpOutputs::new(Path::new("game.iso"));
    assert_eq!(outputs.path(".dat"), Path::new("").join("game.dat"));
}

#[test]
fn test_read_text_missing() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = DumpOutputs::new(&dir.path().join("x.bin"));
    assert!(outputs.read_text("_disc.txt").is_none());
}

#[test]
fn test_read_text_lossy() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("x_disc.txt"), b"ok \xFF\n").unwrap();
    let outputs = DumpOutputs::new(&dir.path().join("x.bin"));
    assert!(outputs.read_text("_disc.txt").unwrap().starts_with("ok "));
}

#[test]
fn test_expected_tables() {
    assert!(expected_suffixes(MediaType::CdRom).contains(&".cue"));
    assert!(!expected_suffixes(MediaType::Dvd).contains(&".cue"));
    assert_eq!(expected_files(System::Xbox, MediaType::Dvd), &["DMI.bin", "PFI.bin", "SS.bin"]);
    assert!(expected_files(System::Ps2, MediaType::Dvd).is_empty());
    assert_eq!(expected_files(System::Ps3, MediaType::BluRay), &["PIC.bin"]);
}

#[test]
fn test_check_outputs_reports_everything_missing() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = DumpOutputs::new(&dir.path().join("game.iso"));
    touch(dir.path(), "game.dat");
    touch(dir.path(), "game_disc.txt");
    touch(dir.path(), "game_drive.txt");
    touch(dir.path(), "game_mainError.txt");

    match check_outputs(&outputs, System::Xbox, MediaType::Dvd) {
        Err(ExtractError::MissingOutputs(missing)) => {
            let names: Vec<_> = missing
                .iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                .collect();
            assert_eq!(names, ["game_mainInfo.txt", "DMI.bin", "PFI.bin", "SS.bin"]);
        }
        other => panic!("expected MissingOutputs, got {:?}", other),
    }
}

#[test]
fn test_check_outputs_complete() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = DumpOutputs::new(&dir.path().join("game.iso"));
    for suffix in expected_suffixes(MediaType::Dvd) {
        touch(dir.path(), &format!("game{}", suffix));
    }
    assert!(check_outputs(&outputs, System::Ps2, MediaType::Dvd).is_ok());
}
