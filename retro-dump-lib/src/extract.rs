//! Fill a submission from a finished dump.
//!
//! Only the output check is fatal. Every other step logs what went wrong
//! and leaves its fields at their placeholders.

use std::path::Path;

use chrono::{DateTime, Local};
use retro_dump_core::{MediaType, SubmissionInfo, System};
use retro_dump_dat::{extract_sha1, parse_datfile_path, parse_rom_line, rom_lines, universal_hash};

use crate::disc_info::{
    parse_dic_version, parse_disc_type, parse_drive_info, parse_dvd_protection, parse_layerbreak,
    parse_write_offset,
};
use crate::dispatch::{extractor_for, image_path};
use crate::edc::parse_error_count;
use crate::error::ExtractError;
use crate::outputs::{DumpOutputs, check_outputs};
use crate::pic::{BD_SECTOR_SIZE, parse_pic_layerbreaks};
use crate::protection::{ProtectionScanner, summarize};
use crate::pvd::parse_pvd_rows;

/// Read the outputs of a dump written to `image` into a new submission.
///
/// Fails with [`ExtractError::MissingOutputs`] if any expected output is
/// absent; nothing is extracted in that case.
pub fn extract_submission(
    image: &Path,
    system: System,
    media: MediaType,
    scanner: Option<&dyn ProtectionScanner>,
) -> Result<SubmissionInfo, ExtractError> {
    let outputs = DumpOutputs::new(image);
    check_outputs(&outputs, system, media)?;

    let mut info = SubmissionInfo::new(system, media);
    fill_hashes(&outputs, media, &mut info);
    fill_layerbreaks(&outputs, system, media, &mut info);
    fill_dumping_info(&outputs, &mut info);
    fill_media_details(&outputs, system, media, &mut info);

    if let Some(extractor) = extractor_for(system) {
        (extractor.identify)(&outputs, media, &mut info);
    }
    if let Some(scanner) = scanner {
        scan_protection(scanner, &outputs, media, &mut info);
    }

    Ok(info)
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

fn fill_hashes(outputs: &DumpOutputs, media: MediaType, info: &mut SubmissionInfo) {
    let Some(dat_text) = outputs.read_text(".dat") else {
        log::warn!("Datfile could not be read");
        return;
    };
    info.tracks.clrmamepro_data = rom_lines(&dat_text);

    if media.is_single_image() {
        match info.tracks.track_lines().next().and_then(parse_rom_line) {
            Some(rom) => {
                info.sizes.size = rom.size;
                info.sizes.crc32 = rom.crc;
                info.sizes.md5 = rom.md5.unwrap_or_default();
                info.sizes.sha1 = rom.sha1.unwrap_or_default();
            }
            None => log::warn!("Datfile has no usable <rom> line"),
        }
    }

    let sha1s: Vec<String> = info.tracks.track_lines().filter_map(extract_sha1).collect();
    match universal_hash(sha1s.iter().map(String::as_str)) {
        Ok(hash) => info.sizes.universal_hash = hash,
        Err(e) => log::warn!("Could not compute universal hash: {}", e),
    }

    match parse_datfile_path(&outputs.path(".dat")) {
        Ok(dat) => log::debug!(
            "Datfile '{}': {} track(s), {} bytes",
            dat.game,
            dat.track_count(),
            dat.total_size()
        ),
        Err(e) => log::warn!("Datfile is not well-formed: {}", e),
    }
}

fn fill_layerbreaks(
    outputs: &DumpOutputs,
    system: System,
    media: MediaType,
    info: &mut SubmissionInfo,
) {
    if let Some(step) = extractor_for(system).and_then(|e| e.layerbreaks) {
        step(outputs, media, info);
    } else if media == MediaType::BluRay {
        match std::fs::read(outputs.sibling("PIC.bin")) {
            Ok(pic) => {
                let total = image_sectors(&image_path(outputs, media), info.sizes.size);
                info.sizes
                    .set_layerbreaks(&parse_pic_layerbreaks(&pic, total));
            }
            Err(e) => log::warn!("Could not read PIC.bin: {}", e),
        }
    } else if media.is_layered() {
        let breaks: Vec<u64> = outputs
            .read_text("_disc.txt")
            .and_then(|text| parse_layerbreak(&text))
            .into_iter()
            .collect();
        info.sizes.set_layerbreaks(&breaks);
    }

    info.ensure_layers(info.sizes.layerbreaks().len() + 1);
}

/// Size of the image in Blu-ray sectors, from the file or the datfile.
fn image_sectors(image: &Path, dat_size: u64) -> u64 {
    let bytes = std::fs::metadata(image).map(|m| m.len()).unwrap_or(dat_size);
    bytes / BD_SECTOR_SIZE
}

fn fill_dumping_info(outputs: &DumpOutputs, info: &mut SubmissionInfo) {
    let disc_txt = outputs.read_text("_disc.txt").unwrap_or_default();

    info.dumping.dumping_program = match parse_dic_version(&disc_txt) {
        Some(version) => format!("DiscImageCreator {}", version),
        None => "DiscImageCreator".to_string(),
    };
    if let Some(date) = modified_date(&outputs.path("_disc.txt")) {
        info.dumping.dump_date = date;
    }
    if let Some(kind) = parse_disc_type(&disc_txt) {
        info.dumping.reported_disc_type = kind;
    }

    if let Some(drive_txt) = outputs.read_text("_drive.txt") {
        let drive = parse_drive_info(&drive_txt);
        info.dumping.manufacturer = drive.manufacturer.unwrap_or_default();
        info.dumping.model = drive.model.unwrap_or_default();
        info.dumping.firmware = drive.firmware.unwrap_or_default();
    }
}

fn modified_date(path: &Path) -> Option<String> {
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn fill_media_details(
    outputs: &DumpOutputs,
    system: System,
    media: MediaType,
    info: &mut SubmissionInfo,
) {
    if matches!(media, MediaType::CdRom | MediaType::GdRom) {
        info.common.error_count = outputs
            .read_text(".img_EdcEcc.txt")
            .and_then(|text| parse_error_count(&text));
        if info.common.error_count.is_none() {
            log::debug!("Read error count unknown");
        }
        if let Some(offset) = outputs
            .read_text("_disc.txt")
            .and_then(|text| parse_write_offset(&text))
        {
            info.tracks.offset = offset;
        }
        if let Some(cue) = outputs.read_text(".cue") {
            info.tracks.cuesheet = cue;
        }
    }

    if matches!(media, MediaType::CdRom | MediaType::Dvd)
        && let Some(rows) = outputs
            .read_text("_mainInfo.txt")
            .and_then(|text| parse_pvd_rows(&text))
    {
        info.extras.primary_volume_descriptor = rows;
    }

    if matches!(media, MediaType::Dvd | MediaType::HdDvd) && !system.is_xgd() {
        let disc_txt = outputs.read_text("_disc.txt").unwrap_or_default();
        let css = outputs.read_text("_CSSKey.txt");
        let protection = parse_dvd_protection(&disc_txt, css.as_deref());
        if !protection.is_empty() {
            if let Some(key) = &protection.disc_key {
                info.extras.disc_key = key.clone();
            }
            info.copy_protection.protection = protection.summary();
        }
    }
}

fn scan_protection(
    scanner: &dyn ProtectionScanner,
    outputs: &DumpOutputs,
    media: MediaType,
    info: &mut SubmissionInfo,
) {
    let image = image_path(outputs, media);
    let found = match scanner.scan(&image) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("Protection scan failed: {}", e);
            return;
        }
    };

    let summary = summarize(&found);
    if !summary.is_empty() {
        let protection = &mut info.copy_protection.protection;
        if protection.is_empty() {
            *protection = summary;
        } else {
            protection.push('\n');
            protection.push_str(&summary);
        }
    }
    info.copy_protection.full_protections = found;
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
