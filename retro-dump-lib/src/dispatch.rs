//! Per-system extraction steps.
//!
//! Most of a submission comes from outputs every dump has. What is left is
//! system specific: where the serial and build date live, and for the Xbox
//! family where the layerbreak is reported. Each system with such steps has
//! one [`SystemExtractor`] entry in a static table.

use std::path::PathBuf;

use retro_dump_core::{MediaType, SubmissionInfo, System};

use crate::disc_info::{parse_antimod, parse_xbox_layerbreak};
use crate::outputs::DumpOutputs;

/// Fills system specific fields of a submission.
pub type ExtractStep = fn(&DumpOutputs, MediaType, &mut SubmissionInfo);

/// System specific steps. `layerbreaks` replaces the media's generic
/// layerbreak lookup when set.
#[derive(Clone, Copy)]
pub struct SystemExtractor {
    pub identify: ExtractStep,
    pub layerbreaks: Option<ExtractStep>,
}

static EXTRACTORS: &[(System, SystemExtractor)] = &[
    (
        System::Ps1,
        SystemExtractor {
            identify: playstation,
            layerbreaks: None,
        },
    ),
    (
        System::Ps2,
        SystemExtractor {
            identify: playstation,
            layerbreaks: None,
        },
    ),
    (
        System::Saturn,
        SystemExtractor {
            identify: saturn,
            layerbreaks: None,
        },
    ),
    (
        System::Dreamcast,
        SystemExtractor {
            identify: dreamcast,
            layerbreaks: None,
        },
    ),
    (
        System::SegaCd,
        SystemExtractor {
            identify: sega_cd,
            layerbreaks: None,
        },
    ),
    (
        System::Xbox,
        SystemExtractor {
            identify: xbox,
            layerbreaks: Some(xbox_layerbreak),
        },
    ),
    (
        System::Xbox360,
        SystemExtractor {
            identify: xbox,
            layerbreaks: Some(xbox_layerbreak),
        },
    ),
];

/// Extractor registered for `system`, if it has system specific steps.
pub fn extractor_for(system: System) -> Option<&'static SystemExtractor> {
    EXTRACTORS
        .iter()
        .find(|(s, _)| *s == system)
        .map(|(_, extractor)| extractor)
}

/// The image DiscImageCreator leaves for `media`: the merged `.img` for CD
/// style media, the `.iso` otherwise.
pub fn image_path(outputs: &DumpOutputs, media: MediaType) -> PathBuf {
    if media.is_single_image() {
        outputs.path(".iso")
    } else {
        outputs.path(".img")
    }
}

fn set_if_some(dst: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *dst = v;
    }
}

// ---------------------------------------------------------------------------
// Sony
// ---------------------------------------------------------------------------

fn playstation(outputs: &DumpOutputs, media: MediaType, info: &mut SubmissionInfo) {
    let image = image_path(outputs, media);
    match retro_dump_sony::read_playstation_info_path(&image) {
        Ok(ps) => {
            info.common.volume_label = ps.volume_identifier;
            set_if_some(&mut info.common.serial, ps.serial);
            set_if_some(&mut info.versions.version, ps.version);
            set_if_some(&mut info.common.exe_date, ps.exe_date);
            if ps.region.is_some() {
                info.common.region = ps.region;
            }
        }
        Err(e) => log::warn!("Could not read {}: {}", image.display(), e),
    }

    if info.common.system == Some(System::Ps1) {
        info.copy_protection.antimodchip = outputs
            .read_text("_disc.txt")
            .and_then(|text| parse_antimod(&text));
    }
}

// ---------------------------------------------------------------------------
// Sega
// ---------------------------------------------------------------------------

fn apply_sega(
    outputs: &DumpOutputs,
    info: &mut SubmissionInfo,
    read: fn(&str) -> Option<retro_dump_sega::SegaBuildInfo>,
) {
    let Some(main_info) = outputs.read_text("_mainInfo.txt") else {
        return;
    };
    let Some(build) = read(&main_info) else {
        log::warn!("No Sega header found in _mainInfo.txt");
        return;
    };
    set_if_some(&mut info.common.serial, build.serial);
    set_if_some(&mut info.versions.version, build.version);
    set_if_some(&mut info.common.exe_date, build.date);
}

fn saturn(outputs: &DumpOutputs, _media: MediaType, info: &mut SubmissionInfo) {
    apply_sega(outputs, info, retro_dump_sega::saturn_build_info);
}

fn dreamcast(outputs: &DumpOutputs, _media: MediaType, info: &mut SubmissionInfo) {
    apply_sega(outputs, info, retro_dump_sega::dreamcast_build_info);
}

fn sega_cd(outputs: &DumpOutputs, _media: MediaType, info: &mut SubmissionInfo) {
    apply_sega(outputs, info, retro_dump_sega::sega_cd_build_info);
}

// ---------------------------------------------------------------------------
// Microsoft
// ---------------------------------------------------------------------------

fn xbox(outputs: &DumpOutputs, _media: MediaType, info: &mut SubmissionInfo) {
    let Some(system) = info.common.system else {
        return;
    };
    let xbox = match retro_dump_microsoft::read_xbox_disc_info(outputs.dir(), system) {
        Ok(xbox) => xbox,
        Err(e) => {
            log::warn!("Could not read Xbox disc information: {}", e);
            return;
        }
    };

    if let Some(catalog) = xbox.catalog {
        info.common.serial = catalog.serial();
        info.common.internal_serial = catalog.raw();
        info.versions.version = catalog.version_string();
        if let Some(region) = catalog.region() {
            info.common.region = Some(region);
        }
    }
    set_if_some(&mut info.extras.media_id, xbox.media_id);
    set_if_some(&mut info.extras.dmi_crc32, xbox.hashes.dmi_crc32);
    set_if_some(&mut info.extras.pfi_crc32, xbox.hashes.pfi_crc32);
    set_if_some(&mut info.extras.ss_crc32, xbox.hashes.ss_crc32);
}

fn xbox_layerbreak(outputs: &DumpOutputs, _media: MediaType, info: &mut SubmissionInfo) {
    let breaks: Vec<u64> = outputs
        .read_text("_disc.txt")
        .and_then(|text| parse_xbox_layerbreak(&text))
        .into_iter()
        .collect();
    info.sizes.set_layerbreaks(&breaks);
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
