//! The disc submission record.
//!
//! A [`SubmissionInfo`] starts out filled with placeholder markers so that
//! anything the extractor or the catalog lookup could not fill in stays
//! visibly flagged in the written report. Extraction overwrites fields as
//! it recovers them, catalog reconciliation overwrites them again from a
//! matching disc page, and a user seed file can override both.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DiscCategory, Language, MediaType, Region, System};

/// Marker for a field every submission must carry.
pub const REQUIRED: &str = "(REQUIRED)";
/// Marker for a field that must be filled when the disc has it.
pub const REQUIRED_IF_EXISTS: &str = "(REQUIRED, IF EXISTS)";
/// Marker for a field that may be left out.
pub const OPTIONAL: &str = "(OPTIONAL)";

/// Most layers any supported media can carry.
pub const MAX_LAYERS: usize = 4;

/// Returns true if `value` is one of the placeholder markers.
pub fn is_placeholder(value: &str) -> bool {
    matches!(value.trim(), REQUIRED | REQUIRED_IF_EXISTS | OPTIONAL)
}

/// Mastering information printed on one layer of the disc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerInfo {
    pub mastering_ring: String,
    pub mastering_sid: String,
    pub toolstamp: String,
    pub mould_sid: String,
}

impl LayerInfo {
    fn placeholder() -> Self {
        Self {
            mastering_ring: REQUIRED_IF_EXISTS.to_string(),
            mastering_sid: REQUIRED_IF_EXISTS.to_string(),
            toolstamp: REQUIRED_IF_EXISTS.to_string(),
            mould_sid: OPTIONAL.to_string(),
        }
    }

    fn strings_mut(&mut self) -> [&mut String; 4] {
        [
            &mut self.mastering_ring,
            &mut self.mastering_sid,
            &mut self.toolstamp,
            &mut self.mould_sid,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonDiscInfo {
    pub system: Option<System>,
    pub media: Option<MediaType>,
    pub category: Option<DiscCategory>,
    pub region: Option<Region>,
    pub languages: Vec<Language>,
    pub title: String,
    pub foreign_title: String,
    pub disc_number: String,
    pub disc_title: String,
    pub serial: String,
    /// Serial as stored on the disc itself, when it differs from the
    /// printed one (e.g. the raw Xbox catalog code).
    pub internal_serial: String,
    pub barcode: String,
    pub exe_date: String,
    pub volume_label: String,
    pub layers: Vec<LayerInfo>,
    /// Read errors reported by the dumping program. `None` means the
    /// report was missing or unreadable, which is not the same as zero.
    pub error_count: Option<u64>,
    pub comments: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionAndEditions {
    pub version: String,
    pub edition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extras {
    pub primary_volume_descriptor: String,
    pub disc_key: String,
    pub disc_id: String,
    pub pic_identifier: String,
    pub header: String,
    pub bca: String,
    pub security_sector_ranges: String,
    /// Xbox 360 media ID from the DMI.
    pub media_id: String,
    pub dmi_crc32: String,
    pub pfi_crc32: String,
    pub ss_crc32: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyProtection {
    /// Human-readable protection summary.
    pub protection: String,
    pub antimodchip: Option<bool>,
    pub libcrypt: Option<bool>,
    /// Protection labels reported per file by the scanner.
    pub full_protections: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpingInfo {
    pub dumping_program: String,
    pub dump_date: String,
    pub manufacturer: String,
    pub model: String,
    pub firmware: String,
    pub reported_disc_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracksAndWriteOffsets {
    /// One datfile `<rom .../>` line per track, joined with `\n`.
    pub clrmamepro_data: String,
    pub cuesheet: String,
    pub offset: String,
}

impl TracksAndWriteOffsets {
    /// Non-blank datfile lines, in track order.
    pub fn track_lines(&self) -> impl Iterator<Item = &str> {
        self.clrmamepro_data
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeAndChecksums {
    pub size: u64,
    pub crc32: String,
    pub md5: String,
    pub sha1: String,
    pub layerbreak: Option<u64>,
    pub layerbreak2: Option<u64>,
    pub layerbreak3: Option<u64>,
    /// Whole-image hash used when per-track matching is inconclusive.
    pub universal_hash: Option<String>,
}

impl SizeAndChecksums {
    /// Populated layerbreaks in layer order.
    pub fn layerbreaks(&self) -> Vec<u64> {
        [self.layerbreak, self.layerbreak2, self.layerbreak3]
            .into_iter()
            .map_while(|lb| lb)
            .collect()
    }

    /// Store up to three layerbreaks, clearing any that are not given.
    pub fn set_layerbreaks(&mut self, breaks: &[u64]) {
        self.layerbreak = breaks.first().copied();
        self.layerbreak2 = breaks.get(1).copied();
        self.layerbreak3 = breaks.get(2).copied();
    }
}

/// Everything known about one dumped disc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionInfo {
    pub common: CommonDiscInfo,
    pub versions: VersionAndEditions,
    pub extras: Extras,
    pub copy_protection: CopyProtection,
    pub dumping: DumpingInfo,
    pub tracks: TracksAndWriteOffsets,
    pub sizes: SizeAndChecksums,
    partially_matched_ids: Vec<u32>,
    fully_matched_id: Option<u32>,
}

impl SubmissionInfo {
    /// A blank record for `system` on `media`, with placeholders in every
    /// field the submitter is expected to review.
    pub fn new(system: System, media: MediaType) -> Self {
        let mut info = Self::default();
        info.common.system = Some(system);
        info.common.media = Some(media);
        info.common.title = REQUIRED.to_string();
        info.common.foreign_title = OPTIONAL.to_string();
        info.common.disc_number = OPTIONAL.to_string();
        info.common.disc_title = OPTIONAL.to_string();
        info.common.serial = REQUIRED_IF_EXISTS.to_string();
        info.common.barcode = OPTIONAL.to_string();
        info.common.comments = OPTIONAL.to_string();
        info.common.contents = OPTIONAL.to_string();
        info.common.layers = vec![LayerInfo::placeholder()];
        info.versions.version = REQUIRED_IF_EXISTS.to_string();
        info.versions.edition = OPTIONAL.to_string();
        info
    }

    /// Grow the layer list to `count` layers (capped at [`MAX_LAYERS`]).
    /// Existing layers are kept.
    pub fn ensure_layers(&mut self, count: usize) {
        let count = count.clamp(1, MAX_LAYERS);
        while self.common.layers.len() < count {
            self.common.layers.push(LayerInfo::placeholder());
        }
    }

    pub fn layer_count(&self) -> usize {
        self.common.layers.len()
    }

    /// Catalog IDs that matched some but not necessarily all tracks.
    pub fn partially_matched_ids(&self) -> &[u32] {
        &self.partially_matched_ids
    }

    /// Catalog ID that matched every track, if one was found.
    pub fn fully_matched_id(&self) -> Option<u32> {
        self.fully_matched_id
    }

    /// Record candidate IDs from a lookup. Duplicates and the fully matched
    /// ID are skipped; the list stays sorted.
    pub fn add_partial_matches(&mut self, ids: impl IntoIterator<Item = u32>) {
        for id in ids {
            if Some(id) != self.fully_matched_id && !self.partially_matched_ids.contains(&id) {
                self.partially_matched_ids.push(id);
            }
        }
        self.partially_matched_ids.sort_unstable();
    }

    /// Mark `id` as the full match and drop it from the partial list.
    pub fn set_fully_matched(&mut self, id: u32) {
        self.fully_matched_id = Some(id);
        self.partially_matched_ids.retain(|&p| p != id);
    }

    /// Blank out every field still holding a placeholder marker.
    pub fn clear_placeholders(&mut self) {
        for field in self.strings_mut() {
            if is_placeholder(field) {
                field.clear();
            }
        }
    }

    /// Overlay user-supplied values from `seed`. Only fields the seed
    /// actually sets (non-empty, non-placeholder, `Some`) replace ours.
    pub fn inject_seed(&mut self, seed: &SubmissionInfo) {
        let common = &seed.common;
        seed_opt(&mut self.common.category, common.category);
        seed_opt(&mut self.common.region, common.region);
        if !common.languages.is_empty() {
            self.common.languages = common.languages.clone();
        }
        seed_str(&mut self.common.title, &common.title);
        seed_str(&mut self.common.foreign_title, &common.foreign_title);
        seed_str(&mut self.common.disc_number, &common.disc_number);
        seed_str(&mut self.common.disc_title, &common.disc_title);
        seed_str(&mut self.common.serial, &common.serial);
        seed_str(&mut self.common.barcode, &common.barcode);
        seed_str(&mut self.common.comments, &common.comments);
        seed_str(&mut self.common.contents, &common.contents);

        if !common.layers.is_empty() {
            self.ensure_layers(common.layers.len());
            for (ours, theirs) in self.common.layers.iter_mut().zip(&common.layers) {
                seed_str(&mut ours.mastering_ring, &theirs.mastering_ring);
                seed_str(&mut ours.mastering_sid, &theirs.mastering_sid);
                seed_str(&mut ours.toolstamp, &theirs.toolstamp);
                seed_str(&mut ours.mould_sid, &theirs.mould_sid);
            }
        }

        seed_str(&mut self.versions.version, &seed.versions.version);
        seed_str(&mut self.versions.edition, &seed.versions.edition);
        seed_str(&mut self.copy_protection.protection, &seed.copy_protection.protection);
        seed_opt(&mut self.copy_protection.antimodchip, seed.copy_protection.antimodchip);
        seed_opt(&mut self.copy_protection.libcrypt, seed.copy_protection.libcrypt);
        seed_str(&mut self.extras.disc_key, &seed.extras.disc_key);
        seed_str(&mut self.extras.disc_id, &seed.extras.disc_id);
        seed_str(&mut self.extras.bca, &seed.extras.bca);
    }

    fn strings_mut(&mut self) -> Vec<&mut String> {
        let mut fields: Vec<&mut String> = vec![
            &mut self.common.title,
            &mut self.common.foreign_title,
            &mut self.common.disc_number,
            &mut self.common.disc_title,
            &mut self.common.serial,
            &mut self.common.internal_serial,
            &mut self.common.barcode,
            &mut self.common.exe_date,
            &mut self.common.volume_label,
            &mut self.common.comments,
            &mut self.common.contents,
            &mut self.versions.version,
            &mut self.versions.edition,
            &mut self.copy_protection.protection,
        ];
        for layer in &mut self.common.layers {
            fields.extend(layer.strings_mut());
        }
        fields
    }
}

fn seed_str(dst: &mut String, src: &str) {
    if !src.trim().is_empty() && !is_placeholder(src) {
        *dst = src.to_string();
    }
}

fn seed_opt<T: Copy>(dst: &mut Option<T>, src: Option<T>) {
    if src.is_some() {
        *dst = src;
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
