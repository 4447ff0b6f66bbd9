//! `SYSTEM.CNF` parsing and PlayStation serial/region mapping.

use retro_dump_core::Region;

use crate::error::IsoError;

/// Parsed SYSTEM.CNF contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCnf {
    /// Boot executable path, e.g. "cdrom:\SLUS_012.34;1"
    pub boot_path: String,
    /// Disc version from the `VER` key (PS2 only).
    pub version: Option<String>,
    /// Video mode from the `VMODE` key, if present.
    pub vmode: Option<String>,
}

impl SystemCnf {
    /// Whether the boot path targets `cdrom0:`, which only PS2 discs use.
    pub fn is_ps2(&self) -> bool {
        self.boot_path.to_ascii_lowercase().starts_with("cdrom0:")
    }
}

/// Parse the contents of a SYSTEM.CNF file.
pub fn parse_system_cnf(content: &str) -> Result<SystemCnf, IsoError> {
    let mut boot_path = None;
    let mut version = None;
    let mut vmode = None;

    for line in content.lines() {
        let Some((key, value)) = line.trim().split_once('=') else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_uppercase().as_str() {
            "BOOT" | "BOOT2" => {
                if boot_path.is_none() {
                    boot_path = Some(value.to_string());
                }
            }
            "VER" => version = Some(value.to_string()),
            "VMODE" => vmode = Some(value.to_string()),
            _ => {}
        }
    }

    match boot_path {
        Some(boot_path) => Ok(SystemCnf {
            boot_path,
            version,
            vmode,
        }),
        None => Err(IsoError::invalid_format("SYSTEM.CNF missing BOOT= line")),
    }
}

/// Path of the boot executable inside the filesystem.
///
/// `"cdrom:\\EXE\\MAIN.EXE;1"` becomes `"EXE\\MAIN.EXE"`.
pub fn boot_file_path(boot_path: &str) -> String {
    let path = boot_path
        .split_once(':')
        .map_or(boot_path, |(_, rest)| rest);
    let path = path.split(';').next().unwrap_or(path);
    path.trim().trim_start_matches(['\\', '/']).to_string()
}

/// Extract a normalized serial from a SYSTEM.CNF boot path.
///
/// Input: `"cdrom:\SLUS_012.34;1"` or `"cdrom0:\SLPM_650.01;1"`
/// Output: `"SLUS-01234"`
pub fn extract_serial(boot_path: &str) -> Option<String> {
    // The executable name is after the last separator; some discs use
    // "cdrom:SLUS_006.91;1" with no backslash at all.
    let filename = boot_path.rsplit(['\\', '/', ':']).next()?;
    let filename = filename.split(';').next().unwrap_or(filename).trim();

    if filename.len() < 8 || !filename.is_char_boundary(4) {
        return None;
    }

    let prefix = filename[..4].to_uppercase();
    if !is_serial_prefix(&prefix) {
        return None;
    }

    let digits: String = filename[4..].chars().filter(|c| c.is_ascii_digit()).collect();
    (digits.len() >= 5).then(|| format!("{}-{}", prefix, digits))
}

const SERIAL_PREFIXES: &[(&str, Region)] = &[
    ("SLUS", Region::Usa),
    ("SCUS", Region::Usa),
    ("SLPS", Region::Japan),
    ("SCPS", Region::Japan),
    ("SLPM", Region::Japan),
    ("SCPM", Region::Japan),
    ("SIPS", Region::Japan),
    ("PAPX", Region::Japan),
    ("PCPX", Region::Japan),
    ("PBPX", Region::Japan),
    ("TCPS", Region::Japan),
    ("SLES", Region::Europe),
    ("SCES", Region::Europe),
    ("SCED", Region::Europe),
    ("SLED", Region::Europe),
    ("TLES", Region::Europe),
    ("SLKA", Region::Korea),
    ("SCKA", Region::Korea),
    ("SLAJ", Region::Asia),
    ("SCAJ", Region::Asia),
    ("SCCS", Region::China),
];

fn is_serial_prefix(prefix: &str) -> bool {
    SERIAL_PREFIXES.iter().any(|(p, _)| *p == prefix)
}

/// Map a PlayStation serial prefix to a region.
pub fn serial_to_region(serial: &str) -> Option<Region> {
    let prefix = serial.get(..4)?.to_uppercase();
    SERIAL_PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, region)| *region)
}

#[cfg(test)]
#[path = "tests/system_cnf_tests.rs"]
mod tests;
