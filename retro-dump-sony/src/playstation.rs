//! Build information for PlayStation and PlayStation 2 discs.

use std::io::{Read, Seek};
use std::path::Path;

use retro_dump_core::Region;

use crate::error::IsoError;
use crate::iso::{detect_disc_format, find_path, read_file, read_pvd};
use crate::system_cnf::{boot_file_path, extract_serial, parse_system_cnf, serial_to_region};

/// Executable booted by PS1 discs that carry no SYSTEM.CNF.
const DEFAULT_BOOT_FILE: &str = "PSX.EXE";

/// What the filesystem of a PlayStation disc tells us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayStationInfo {
    pub volume_identifier: String,
    /// Normalized serial, e.g. `SLUS-01234`.
    pub serial: Option<String>,
    pub region: Option<Region>,
    /// PS2 disc version from SYSTEM.CNF.
    pub version: Option<String>,
    /// Recording date of the boot executable, `YYYY-MM-DD`.
    pub exe_date: Option<String>,
}

/// Read build information from a PlayStation image (2048 or 2352 bytes
/// per sector).
pub fn read_playstation_info<R: Read + Seek>(reader: &mut R) -> Result<PlayStationInfo, IsoError> {
    let format = detect_disc_format(reader)?;
    let pvd = read_pvd(reader, format)?;

    if !pvd.system_identifier.starts_with("PLAYSTATION") {
        return Err(IsoError::invalid_format(format!(
            "Not a PlayStation disc (system ID: '{}')",
            pvd.system_identifier
        )));
    }

    let mut info = PlayStationInfo {
        volume_identifier: pvd.volume_identifier.clone(),
        ..Default::default()
    };

    let boot_file = match find_path(reader, format, &pvd, "SYSTEM.CNF") {
        Ok(record) => {
            let content = read_file(reader, format, &record)?;
            let cnf = parse_system_cnf(&String::from_utf8_lossy(&content))?;
            info.serial = extract_serial(&cnf.boot_path);
            info.region = info.serial.as_deref().and_then(serial_to_region);
            info.version = cnf.version;
            boot_file_path(&cnf.boot_path)
        }
        Err(IsoError::NotFound(_)) => {
            log::debug!("No SYSTEM.CNF, falling back to {}", DEFAULT_BOOT_FILE);
            DEFAULT_BOOT_FILE.to_string()
        }
        Err(e) => return Err(e),
    };

    match find_path(reader, format, &pvd, &boot_file) {
        Ok(exe) => info.exe_date = exe.recorded.to_iso_date(),
        Err(IsoError::NotFound(_)) => {
            log::warn!("Boot executable '{}' not found on disc", boot_file);
        }
        Err(e) => return Err(e),
    }

    Ok(info)
}

/// Open an image file and read its PlayStation build information.
pub fn read_playstation_info_path(path: &Path) -> Result<PlayStationInfo, IsoError> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    read_playstation_info(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_image::{Entry, build_iso, to_raw};
    use std::io::Cursor;

    #[test]
    fn test_ps1_info_from_raw_image() {
        let image = build_iso(
            "PLAYSTATION",
            &[
                Entry::File("SYSTEM.CNF;1", b"BOOT = cdrom:\\SLES_015.14;1\r\nTCB = 4\r\n"),
                Entry::File("SLES_015.14;1", &[0u8; 4096]),
            ],
        );
        let mut cursor = Cursor::new(to_raw(&image, 2));
        let info = read_playstation_info(&mut cursor).unwrap();

        assert_eq!(info.serial.as_deref(), Some("SLES-01514"));
        assert_eq!(info.region, Some(Region::Europe));
        assert_eq!(info.version, None);
        assert_eq!(info.exe_date.as_deref(), Some("1999-03-15"));
        assert_eq!(info.volume_identifier, "TEST_VOLUME");
    }

    #[test]
    fn test_ps2_info_with_version() {
        let image = build_iso(
            "PLAYSTATION",
            &[
                Entry::File(
                    "SYSTEM.CNF;1",
                    b"BOOT2 = cdrom0:\\SLUS_203.12;1\r\nVER = 1.01\r\nVMODE = NTSC\r\n",
                ),
                Entry::File("SLUS_203.12;1", &[0u8; 100]),
            ],
        );
        let mut cursor = Cursor::new(image);
        let info = read_playstation_info(&mut cursor).unwrap();

        assert_eq!(info.serial.as_deref(), Some("SLUS-20312"));
        assert_eq!(info.region, Some(Region::Usa));
        assert_eq!(info.version.as_deref(), Some("1.01"));
        assert_eq!(info.exe_date.as_deref(), Some("1999-03-15"));
    }

    #[test]
    fn test_psx_exe_fallback() {
        let image = build_iso("PLAYSTATION", &[Entry::File("PSX.EXE;1", &[0u8; 10])]);
        let mut cursor = Cursor::new(image);
        let info = read_playstation_info(&mut cursor).unwrap();

        assert_eq!(info.serial, None);
        assert_eq!(info.exe_date.as_deref(), Some("1999-03-15"));
    }

    #[test]
    fn test_missing_boot_executable() {
        let image = build_iso(
            "PLAYSTATION",
            &[Entry::File("SYSTEM.CNF;1", b"BOOT = cdrom:\\SLUS_000.01;1\r\n")],
        );
        let mut cursor = Cursor::new(image);
        let info = read_playstation_info(&mut cursor).unwrap();

        assert_eq!(info.serial.as_deref(), Some("SLUS-00001"));
        assert_eq!(info.exe_date, None);
    }

    #[test]
    fn test_not_a_playstation_disc() {
        let image = build_iso("SEGA SEGASATURN", &[]);
        let mut cursor = Cursor::new(image);
        assert!(matches!(
            read_playstation_info(&mut cursor),
            Err(IsoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_read_from_path() {
        let image = build_iso(
            "PLAYSTATION",
            &[
                Entry::File("SYSTEM.CNF;1", b"BOOT = cdrom:\\SCUS_944.55;1\r\n"),
                Entry::File("SCUS_944.55;1", &[1u8; 8]),
            ],
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.iso");
        std::fs::write(&path, image).unwrap();

        let info = read_playstation_info_path(&path).unwrap();
        assert_eq!(info.serial.as_deref(), Some("SCUS-94455"));
    }
}
