//! Parsers for DiscImageCreator's text logs: `_disc.txt`, `_drive.txt`
//! and `_CSSKey.txt`.
//!
//! Every parser takes the file's text and returns `Option`; the caller
//! decides what a miss means.

use std::sync::LazyLock;

use regex::Regex;
use retro_dump_core::util::parse_decimal_or_hex;

static COMBINED_OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Combined Offset\(Byte\)\s*(-?\d+),\s*\(Samples\)\s*(-?\d+)")
        .expect("static pattern")
});
static DIC_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)DiscImageCreator\S*\s+(?:version\s+)?(\d{8}T\d{6})").expect("static pattern")
});

/// Value of the first `key: value` line whose key matches, trimmed.
/// DiscImageCreator indents and right-aligns keys, so lines are trimmed
/// before matching.
pub fn field_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines().find_map(|line| {
        let (k, v) = line.trim().split_once(':')?;
        (k.trim() == key).then(|| v.trim())
    })
}

// ---------------------------------------------------------------------------
// Layerbreaks
// ---------------------------------------------------------------------------

/// Layerbreak of a DVD-like disc. Single-layer discs have none.
pub fn parse_layerbreak(disc_txt: &str) -> Option<u64> {
    if field_value(disc_txt, "NumberOfLayers") == Some("Single Layer") {
        return None;
    }
    disc_txt
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with("LayerZeroSector"))
        .and_then(|l| l.split_whitespace().nth(2))
        .and_then(parse_decimal_or_hex)
}

/// Layerbreak of an Xbox family disc, from the `LayerBreak` line.
pub fn parse_xbox_layerbreak(disc_txt: &str) -> Option<u64> {
    disc_txt
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with("LayerBreak"))
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(parse_decimal_or_hex)
}

// ---------------------------------------------------------------------------
// DVD protection
// ---------------------------------------------------------------------------

/// Copy protection details of a DVD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DvdProtection {
    pub copyright_type: Option<String>,
    pub region_management: Option<String>,
    pub disc_key: Option<String>,
    /// `(file, key)` pairs in file order.
    pub title_keys: Vec<(String, String)>,
}

impl DvdProtection {
    pub fn is_empty(&self) -> bool {
        self.copyright_type.is_none()
            && self.region_management.is_none()
            && self.disc_key.is_none()
            && self.title_keys.is_empty()
    }

    /// Multi-line summary for the submission's protection field.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if let Some(region) = &self.region_management {
            lines.push(format!("Region: {}", region));
        }
        if let Some(kind) = &self.copyright_type {
            lines.push(format!("Copyright Protection System Type: {}", kind));
        }
        if let Some(key) = &self.disc_key {
            lines.push(format!("Disc Key: {}", key));
        }
        if !self.title_keys.is_empty() {
            lines.push("Title Keys".to_string());
            for (file, key) in &self.title_keys {
                lines.push(format!("{}: {}", file, key));
            }
        }
        lines.join("\n")
    }
}

/// Protection fields from `_disc.txt`, plus keys from `_CSSKey.txt` when
/// that file exists. A missing key file is not an error.
pub fn parse_dvd_protection(disc_txt: &str, css_key_txt: Option<&str>) -> DvdProtection {
    let mut protection = DvdProtection {
        copyright_type: field_value(disc_txt, "CopyrightProtectionType")
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        region_management: field_value(disc_txt, "RegionManagementInformation")
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        ..Default::default()
    };

    if let Some(keys) = css_key_txt {
        for line in keys.lines().map(str::trim) {
            if line.starts_with("DecryptedDiscKey") {
                protection.disc_key = line.split_once(':').map(|(_, k)| k.trim().to_string());
            } else if let Some((_, rest)) = line.split_once("Filename:") {
                if let Some((file, key)) = rest.split_once(", TitleKey:") {
                    protection
                        .title_keys
                        .push((file.trim().to_string(), key.trim().to_string()));
                }
            }
        }
    }

    protection
}

// ---------------------------------------------------------------------------
// Drive and dump details
// ---------------------------------------------------------------------------

/// Drive identification from `_drive.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveInfo {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub firmware: Option<String>,
}

pub fn parse_drive_info(drive_txt: &str) -> DriveInfo {
    let value = |key: &str| {
        field_value(drive_txt, key)
            .filter(|v| !v.is_empty())
            .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
    };
    DriveInfo {
        manufacturer: value("VendorId"),
        model: value("ProductId"),
        firmware: value("ProductRevisionLevel"),
    }
}

/// Write offset in samples, signed (`+294`, `-12`, `+0`).
pub fn parse_write_offset(disc_txt: &str) -> Option<String> {
    let caps = COMBINED_OFFSET_RE.captures(disc_txt)?;
    let samples: i64 = caps.get(2)?.as_str().parse().ok()?;
    Some(format!("{:+}", samples))
}

/// Whether the PlayStation anti-modchip check found its string.
pub fn parse_antimod(disc_txt: &str) -> Option<bool> {
    if disc_txt.contains("Detected anti-mod string") {
        Some(true)
    } else if disc_txt.contains("No anti-mod string") {
        Some(false)
    } else {
        None
    }
}

/// Disc type as reported by the drive.
pub fn parse_disc_type(disc_txt: &str) -> Option<String> {
    ["DiscType", "BookType"]
        .iter()
        .find_map(|k| field_value(disc_txt, k).filter(|v| !v.is_empty()))
        .map(str::to_string)
}

/// DiscImageCreator build (`20230606T000000`) named in a log.
pub fn parse_dic_version(text: &str) -> Option<String> {
    DIC_VERSION_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "tests/disc_info_tests.rs"]
mod tests;
