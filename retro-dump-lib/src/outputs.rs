//! Where a dump's outputs live and which of them must exist.
//!
//! DiscImageCreator names its outputs after the image: `game.bin` produces
//! `game.dat`, `game_disc.txt`, `game_mainInfo.txt` and so on. A few media
//! also leave fixed-name binaries (`PIC.bin`, `DMI.bin`) in the same
//! directory.

use std::path::{Path, PathBuf};

use retro_dump_core::{MediaType, System};

use crate::error::ExtractError;

/// Outputs of one dump, addressed by suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOutputs {
    dir: PathBuf,
    stem: String,
}

impl DumpOutputs {
    /// Locate the outputs of a dump written to `image` (e.g. `out/game.bin`).
    pub fn new(image: &Path) -> Self {
        let dir = image
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let stem = image
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { dir, stem }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// `<dir>/<stem><suffix>`.
    pub fn path(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}{}", self.stem, suffix))
    }

    /// `<dir>/<name>` for the fixed-name binaries.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Text of the output with `suffix`, or `None` if it cannot be read.
    /// Logs are mostly ASCII; anything else is replaced rather than failing.
    pub fn read_text(&self, suffix: &str) -> Option<String> {
        let path = self.path(suffix);
        match std::fs::read(&path) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                log::debug!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Expected outputs
// ---------------------------------------------------------------------------

const CD_OUTPUTS: &[&str] = &[
    ".cue",
    ".ccd",
    ".dat",
    ".sub",
    "_disc.txt",
    "_drive.txt",
    "_mainError.txt",
    "_mainInfo.txt",
    "_subError.txt",
    "_subInfo.txt",
];

const GD_OUTPUTS: &[&str] = &[
    ".dat",
    ".sub",
    "_disc.txt",
    "_drive.txt",
    "_mainError.txt",
    "_mainInfo.txt",
    "_subError.txt",
    "_subInfo.txt",
];

const DVD_OUTPUTS: &[&str] = &[
    ".dat",
    "_disc.txt",
    "_drive.txt",
    "_mainError.txt",
    "_mainInfo.txt",
];

const DISK_OUTPUTS: &[&str] = &[".dat", "_disc.txt"];

const NO_OUTPUTS: &[&str] = &[];

const BD_FILES: &[&str] = &["PIC.bin"];
const XGD_FILES: &[&str] = retro_dump_microsoft::AUX_FILES;
const NO_FILES: &[&str] = &[];

/// Suffixed outputs a successful dump of `media` leaves behind.
pub fn expected_suffixes(media: MediaType) -> &'static [&'static str] {
    match media {
        MediaType::CdRom => CD_OUTPUTS,
        MediaType::GdRom => GD_OUTPUTS,
        MediaType::Dvd
        | MediaType::HdDvd
        | MediaType::BluRay
        | MediaType::NintendoGameCubeGameDisc
        | MediaType::NintendoWiiOpticalDisc => DVD_OUTPUTS,
        MediaType::FloppyDisk | MediaType::HardDisk | MediaType::DataCartridge => DISK_OUTPUTS,
        MediaType::NintendoWiiUOpticalDisc | MediaType::Umd => NO_OUTPUTS,
    }
}

/// Fixed-name binaries expected for `system` on `media`.
pub fn expected_files(system: System, media: MediaType) -> &'static [&'static str] {
    match media {
        MediaType::Dvd if system.is_xgd() => XGD_FILES,
        MediaType::BluRay => BD_FILES,
        _ => NO_FILES,
    }
}

/// Every expected output path that does not exist.
pub fn missing_outputs(outputs: &DumpOutputs, system: System, media: MediaType) -> Vec<PathBuf> {
    let suffixed = expected_suffixes(media).iter().map(|s| outputs.path(s));
    let fixed = expected_files(system, media)
        .iter()
        .map(|f| outputs.sibling(f));
    suffixed.chain(fixed).filter(|p| !p.exists()).collect()
}

/// Fail with the full list of missing outputs, if any.
pub fn check_outputs(
    outputs: &DumpOutputs,
    system: System,
    media: MediaType,
) -> Result<(), ExtractError> {
    let missing = missing_outputs(outputs, system, media);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ExtractError::MissingOutputs(missing))
    }
}

/// Text logs worth archiving, in a stable order.
pub const LOG_SUFFIXES: &[&str] = &[
    ".dat",
    ".cue",
    ".ccd",
    "_disc.txt",
    "_drive.txt",
    "_mainError.txt",
    "_mainInfo.txt",
    "_subError.txt",
    "_subInfo.txt",
    "_subReadable.txt",
    "_volDesc.txt",
    "_CSSKey.txt",
    ".img_EdcEcc.txt",
];

#[cfg(test)]
#[path = "tests/outputs_tests.rs"]
mod tests;
