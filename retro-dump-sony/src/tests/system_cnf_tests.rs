use super::*;

// -- SYSTEM.CNF parsing --

#[test]
fn test_parse_system_cnf_ps1() {
    let cnf = "BOOT = cdrom:\\SLUS_012.34;1\r\nTCB = 4\r\nEVENT = 10\r\nSTACK = 801FFFF0\r\n";
    let result = parse_system_cnf(cnf).unwrap();
    assert_eq!(result.boot_path, "cdrom:\\SLUS_012.34;1");
    assert_eq!(result.version, None);
    assert!(!result.is_ps2());
}

#[test]
fn test_parse_system_cnf_ps2() {
    let cnf = "BOOT2 = cdrom0:\\SLPM_650.01;1\r\nVER = 1.02\r\nVMODE = NTSC\r\n";
    let result = parse_system_cnf(cnf).unwrap();
    assert_eq!(result.boot_path, "cdrom0:\\SLPM_650.01;1");
    assert_eq!(result.version.as_deref(), Some("1.02"));
    assert_eq!(result.vmode.as_deref(), Some("NTSC"));
    assert!(result.is_ps2());
}

#[test]
fn test_parse_system_cnf_missing_boot() {
    assert!(parse_system_cnf("VMODE = PAL\r\n").is_err());
}

// -- Boot path --

#[test]
fn test_boot_file_path() {
    assert_eq!(boot_file_path("cdrom:\\SLUS_012.34;1"), "SLUS_012.34");
    assert_eq!(boot_file_path("cdrom:\\\\SLUS_012.34;1"), "SLUS_012.34");
    assert_eq!(boot_file_path("cdrom:SLUS_006.91;1"), "SLUS_006.91");
    assert_eq!(boot_file_path("cdrom:\\EXE\\MAIN.EXE;1"), "EXE\\MAIN.EXE");
}

// -- Serial extraction --

#[test]
fn test_extract_serial() {
    assert_eq!(
        extract_serial("cdrom:\\SLUS_012.34;1").as_deref(),
        Some("SLUS-01234")
    );
    assert_eq!(
        extract_serial("cdrom:\\\\SLES_567.89;1").as_deref(),
        Some("SLES-56789")
    );
    assert_eq!(
        extract_serial("cdrom:SLUS_006.91;1").as_deref(),
        Some("SLUS-00691")
    );
    assert_eq!(
        extract_serial("cdrom0:\\SCAJ_200.01;1").as_deref(),
        Some("SCAJ-20001")
    );
    assert_eq!(
        extract_serial("cdrom:\\slps_000.01").as_deref(),
        Some("SLPS-00001")
    );
}

#[test]
fn test_extract_serial_invalid() {
    assert_eq!(extract_serial("cdrom:\\BOOT.EXE;1"), None);
    assert_eq!(extract_serial("cdrom:\\EXE\\MAIN.EXE;1"), None);
    assert_eq!(extract_serial("cdrom:\\SLUS_1.2;1"), None);
}

// -- Region mapping --

#[test]
fn test_serial_to_region() {
    assert_eq!(serial_to_region("SLUS-01234"), Some(Region::Usa));
    assert_eq!(serial_to_region("SCES-01234"), Some(Region::Europe));
    assert_eq!(serial_to_region("SLPM-65001"), Some(Region::Japan));
    assert_eq!(serial_to_region("SLKA-01234"), Some(Region::Korea));
    assert_eq!(serial_to_region("SCAJ-20001"), Some(Region::Asia));
    assert_eq!(serial_to_region("SCCS-40001"), Some(Region::China));
    assert_eq!(serial_to_region("XXXX-01234"), None);
    assert_eq!(serial_to_region("SL"), None);
}
