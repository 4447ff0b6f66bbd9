//! DMI parsing and auxiliary file hashing.
//!
//! Original Xbox (XGD1) discs store an 8-character catalog code at DMI
//! offset 0x08: publisher (2), game number (3), version (2), region (1),
//! e.g. `MS00401A`. Xbox 360 discs (XGD2/XGD3) carry a longer master ID at
//! 0x40 that starts with the same publisher/game/version/region layout plus
//! a two-character SKU after the game number, and a 16-byte media ID at
//! 0x460.

use std::path::Path;

use retro_dump_core::util::{read_ascii_fixed, to_hex};
use retro_dump_core::{Region, System};
use retro_dump_dat::hash_file;

use crate::error::XboxError;

/// Size of a DMI dump.
pub const DMI_SIZE: usize = 2048;

/// Binaries written next to an Xbox family image.
pub const AUX_FILES: &[&str] = &["DMI.bin", "PFI.bin", "SS.bin"];

const XGD1_CATALOG_OFFSET: usize = 0x08;
const XGD23_CATALOG_OFFSET: usize = 0x40;
const MEDIA_ID_OFFSET: usize = 0x460;
const MEDIA_ID_LEN: usize = 16;

/// Xbox game disc format generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XgdGeneration {
    /// Original Xbox.
    Xgd1,
    /// Xbox 360 (XGD2 and XGD3 share the DMI layout used here).
    Xgd23,
}

impl XgdGeneration {
    pub fn for_system(system: System) -> Option<Self> {
        match system {
            System::Xbox => Some(Self::Xgd1),
            System::Xbox360 => Some(Self::Xgd23),
            _ => None,
        }
    }
}

/// Catalog code decoded from the DMI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XboxCatalog {
    pub publisher: String,
    pub game_id: String,
    pub version: String,
    pub region_code: char,
    /// Xbox 360 only.
    pub sku: Option<String>,
}

impl XboxCatalog {
    /// Printed serial, e.g. `MS-004`.
    pub fn serial(&self) -> String {
        format!("{}-{}", self.publisher, self.game_id)
    }

    /// Release version, e.g. `1.01`.
    pub fn version_string(&self) -> String {
        format!("1.{}", self.version)
    }

    pub fn region(&self) -> Option<Region> {
        match self.region_code {
            'A' => Some(Region::Usa),
            'E' => Some(Region::Europe),
            'J' => Some(Region::Japan),
            'K' => Some(Region::Korea),
            'W' => Some(Region::World),
            _ => None,
        }
    }

    /// The raw code as stored on the disc.
    pub fn raw(&self) -> String {
        let sku = self.sku.as_deref().unwrap_or("");
        format!(
            "{}{}{}{}{}",
            self.publisher, self.game_id, sku, self.version, self.region_code
        )
    }
}

/// Decode the catalog code of a DMI. Returns `None` if the field does not
/// have the expected shape.
pub fn parse_catalog(dmi: &[u8], generation: XgdGeneration) -> Option<XboxCatalog> {
    let (offset, len) = match generation {
        XgdGeneration::Xgd1 => (XGD1_CATALOG_OFFSET, 8),
        XgdGeneration::Xgd23 => (XGD23_CATALOG_OFFSET, 10),
    };
    let code = read_ascii_fixed(dmi.get(offset..offset + len)?);
    if code.len() != len || !code.is_ascii() {
        return None;
    }

    let publisher = &code[0..2];
    let game_id = &code[2..5];
    let (sku, rest) = match generation {
        XgdGeneration::Xgd1 => (None, &code[5..]),
        XgdGeneration::Xgd23 => (Some(&code[5..7]), &code[7..]),
    };
    let version = &rest[0..2];
    let region_code = rest[2..].chars().next()?;

    let numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !publisher.bytes().all(|b| b.is_ascii_alphanumeric())
        || !numeric(game_id)
        || !numeric(version)
        || !region_code.is_ascii_uppercase()
    {
        return None;
    }

    Some(XboxCatalog {
        publisher: publisher.to_string(),
        game_id: game_id.to_string(),
        version: version.to_string(),
        region_code,
        sku: sku.map(str::to_string),
    })
}

/// Media ID of an Xbox 360 DMI as `XXXXXXXXXXXXXXXX-XXXXXXXXXXXXXXXX`.
/// Returns `None` when the field is absent or zeroed.
pub fn parse_media_id(dmi: &[u8]) -> Option<String> {
    let bytes = dmi.get(MEDIA_ID_OFFSET..MEDIA_ID_OFFSET + MEDIA_ID_LEN)?;
    if bytes.iter().all(|&b| b == 0) {
        return None;
    }
    let hex = to_hex(bytes).to_ascii_uppercase();
    Some(format!("{}-{}", &hex[..16], &hex[16..]))
}

/// Read and size-check `DMI.bin`.
pub fn read_dmi(path: &Path) -> Result<Vec<u8>, XboxError> {
    let dmi = std::fs::read(path)?;
    if dmi.len() < DMI_SIZE {
        return Err(XboxError::TooSmall {
            file: "DMI.bin",
            expected: DMI_SIZE,
            actual: dmi.len(),
        });
    }
    Ok(dmi)
}

/// CRC32 of each auxiliary binary, `None` where the file is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XboxAuxHashes {
    pub dmi_crc32: Option<String>,
    pub pfi_crc32: Option<String>,
    pub ss_crc32: Option<String>,
}

/// Hash the auxiliary binaries in `dir`.
pub fn aux_hashes(dir: &Path) -> Result<XboxAuxHashes, XboxError> {
    let crc = |name: &str| -> Result<Option<String>, XboxError> {
        let path = dir.join(name);
        if !path.is_file() {
            log::debug!("{} not found in {}", name, dir.display());
            return Ok(None);
        }
        Ok(Some(hash_file(&path)?.crc32))
    };

    Ok(XboxAuxHashes {
        dmi_crc32: crc("DMI.bin")?,
        pfi_crc32: crc("PFI.bin")?,
        ss_crc32: crc("SS.bin")?,
    })
}

/// Everything this crate recovers for one Xbox family dump.
#[derive(Debug, Clone, Default)]
pub struct XboxDiscInfo {
    pub catalog: Option<XboxCatalog>,
    pub media_id: Option<String>,
    pub hashes: XboxAuxHashes,
}

/// Read the DMI and hash the auxiliary binaries found in `dir`.
pub fn read_xbox_disc_info(dir: &Path, system: System) -> Result<XboxDiscInfo, XboxError> {
    let Some(generation) = XgdGeneration::for_system(system) else {
        return Ok(XboxDiscInfo::default());
    };
    let dmi = read_dmi(&dir.join("DMI.bin"))?;

    let catalog = parse_catalog(&dmi, generation);
    if catalog.is_none() {
        log::warn!("DMI.bin carries no readable catalog code");
    }
    let media_id = match generation {
        XgdGeneration::Xgd1 => None,
        XgdGeneration::Xgd23 => parse_media_id(&dmi),
    };

    Ok(XboxDiscInfo {
        catalog,
        media_id,
        hashes: aux_hashes(dir)?,
    })
}

#[cfg(test)]
#[path = "tests/xbox_tests.rs"]
mod tests;
