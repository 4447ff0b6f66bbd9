//! Writing a finished submission next to the dump.
//!
//! * `!submissionInfo.txt`: human readable, one section per record part
//! * `!submissionInfo.json`: the record itself
//! * `!protectionInfo.txt`: per-file scanner results
//! * `<name>_logs.zip`: the text logs, deflated

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use retro_dump_core::SubmissionInfo;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::ExtractError;
use crate::options::OutputOptions;
use crate::outputs::{DumpOutputs, LOG_SUFFIXES};
use crate::protection::format_full_protections;

pub const SUBMISSION_TXT: &str = "!submissionInfo.txt";
pub const SUBMISSION_JSON: &str = "!submissionInfo.json";
pub const PROTECTION_TXT: &str = "!protectionInfo.txt";

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

struct Report {
    out: String,
}

impl Report {
    fn section(&mut self, title: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(title);
        self.out.push_str(":\n");
    }

    /// A `Key: value` line, skipped when the value is empty.
    fn field(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        if value.contains('\n') {
            self.out.push_str(&format!("\t{}:\n", key));
            for line in value.lines() {
                self.out.push_str(&format!("\t\t{}\n", line));
            }
        } else {
            self.out.push_str(&format!("\t{}: {}\n", key, value));
        }
    }

    fn opt_field<T: ToString>(&mut self, key: &str, value: Option<T>) {
        if let Some(v) = value {
            self.field(key, &v.to_string());
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Render `info` as the text report.
pub fn format_submission(info: &SubmissionInfo) -> String {
    let mut r = Report { out: String::new() };
    let common = &info.common;

    r.section("Common Disc Info");
    r.opt_field("System", common.system.map(|s| s.display_name()));
    r.opt_field("Media Type", common.media.map(|m| m.display_name()));
    r.opt_field("Category", common.category.map(|c| c.name()));
    r.opt_field("Region", common.region.map(|c| c.name()));
    let languages: Vec<&str> = common.languages.iter().map(|l| l.name()).collect();
    r.field("Languages", &languages.join(", "));
    r.field("Title", &common.title);
    r.field("Foreign Title (Non-Latin)", &common.foreign_title);
    r.field("Disc Number / Letter", &common.disc_number);
    r.field("Disc Title", &common.disc_title);
    r.field("Serial", &common.serial);
    r.field("Internal Serial", &common.internal_serial);
    r.field("Barcode", &common.barcode);
    r.field("EXE/Build Date", &common.exe_date);
    r.field("Volume Label", &common.volume_label);
    for (i, layer) in common.layers.iter().enumerate() {
        let prefix = format!("Layer {}", i);
        r.field(&format!("{} Mastering Ring", prefix), &layer.mastering_ring);
        r.field(&format!("{} Mastering SID", prefix), &layer.mastering_sid);
        r.field(&format!("{} Toolstamp or Mastering Code", prefix), &layer.toolstamp);
        r.field(&format!("{} Mould SID", prefix), &layer.mould_sid);
    }
    r.opt_field("Error Count", common.error_count);
    r.field("Comments", &common.comments);
    r.field("Contents", &common.contents);

    r.section("Version and Editions");
    r.field("Version", &info.versions.version);
    r.field("Edition/Release", &info.versions.edition);

    r.section("Extras");
    r.field("Primary Volume Descriptor (PVD)", &info.extras.primary_volume_descriptor);
    r.field("Disc Key", &info.extras.disc_key);
    r.field("Disc ID", &info.extras.disc_id);
    r.field("PIC", &info.extras.pic_identifier);
    r.field("Header", &info.extras.header);
    r.field("BCA", &info.extras.bca);
    r.field("Security Sector Ranges", &info.extras.security_sector_ranges);
    r.field("Media ID", &info.extras.media_id);
    r.field("DMI.bin CRC32", &info.extras.dmi_crc32);
    r.field("PFI.bin CRC32", &info.extras.pfi_crc32);
    r.field("SS.bin CRC32", &info.extras.ss_crc32);

    r.section("Copy Protection");
    r.field("Copy Protection", &info.copy_protection.protection);
    r.opt_field("Anti-modchip", info.copy_protection.antimodchip.map(yes_no));
    r.opt_field("LibCrypt", info.copy_protection.libcrypt.map(yes_no));

    r.section("Dumping Info");
    r.field("Dumping Program", &info.dumping.dumping_program);
    r.field("Date", &info.dumping.dump_date);
    r.field("Manufacturer", &info.dumping.manufacturer);
    r.field("Model", &info.dumping.model);
    r.field("Firmware", &info.dumping.firmware);
    r.field("Reported Disc Type", &info.dumping.reported_disc_type);

    r.section("Tracks and Write Offsets");
    r.field("DAT", &info.tracks.clrmamepro_data);
    r.field("Cuesheet", &info.tracks.cuesheet);
    r.field("Write Offset", &info.tracks.offset);

    r.section("Size & Checksum");
    if info.sizes.size > 0 {
        r.field("Size", &info.sizes.size.to_string());
    }
    r.field("CRC32", &info.sizes.crc32);
    r.field("MD5", &info.sizes.md5);
    r.field("SHA1", &info.sizes.sha1);
    for (i, lb) in info.sizes.layerbreaks().iter().enumerate() {
        let key = match i {
            0 => "Layerbreak".to_string(),
            n => format!("Layerbreak {}", n + 1),
        };
        r.field(&key, &lb.to_string());
    }
    r.opt_field("Universal Hash (SHA-1)", info.sizes.universal_hash.as_deref());

    if let Some(id) = info.fully_matched_id() {
        r.section("Matches");
        r.field("Fully Matching ID", &id.to_string());
    }
    if !info.partially_matched_ids().is_empty() {
        if info.fully_matched_id().is_none() {
            r.section("Matches");
        }
        let ids: Vec<String> = info
            .partially_matched_ids()
            .iter()
            .map(u32::to_string)
            .collect();
        r.field("Partially Matching IDs", &ids.join(", "));
    }

    r.out
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

fn write_file(path: &Path, contents: &str) -> Result<(), ExtractError> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Write the report files selected by `options` into the dump directory.
/// Returns the paths written.
pub fn write_submission(
    info: &SubmissionInfo,
    outputs: &DumpOutputs,
    options: &OutputOptions,
) -> Result<Vec<PathBuf>, ExtractError> {
    let mut info = info.clone();
    if !options.placeholders {
        info.clear_placeholders();
    }

    let mut written = Vec::new();

    let txt = outputs.sibling(SUBMISSION_TXT);
    write_file(&txt, &format_submission(&info))?;
    written.push(txt);

    if options.json {
        let json = outputs.sibling(SUBMISSION_JSON);
        write_file(&json, &serde_json::to_string_pretty(&info)?)?;
        written.push(json);
    }

    let protections = &info.copy_protection.full_protections;
    if options.protection_file && !protections.is_empty() {
        let path = outputs.sibling(PROTECTION_TXT);
        write_file(&path, &format_full_protections(protections))?;
        written.push(path);
    }

    if options.zip_logs
        && let Some(zip) = zip_logs(outputs)?
    {
        written.push(zip);
    }

    for path in &written {
        log::debug!("Wrote {}", path.display());
    }
    Ok(written)
}

/// Pack the dump's text logs into `<stem>_logs.zip`. Returns `None` if
/// there were no logs to pack.
pub fn zip_logs(outputs: &DumpOutputs) -> Result<Option<PathBuf>, ExtractError> {
    let logs: Vec<PathBuf> = LOG_SUFFIXES
        .iter()
        .map(|s| outputs.path(s))
        .filter(|p| p.is_file())
        .collect();
    if logs.is_empty() {
        return Ok(None);
    }

    let zip_path = outputs.path("_logs.zip");
    let mut zip = zip::ZipWriter::new(File::create(&zip_path)?);
    let file_options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for log_path in &logs {
        let Some(name) = log_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        zip.start_file(name, file_options)?;
        let mut file = File::open(log_path)?;
        std::io::copy(&mut file, &mut zip)?;
    }
    zip.finish()?;

    Ok(Some(zip_path))
}

/// Load a user seed: a (possibly partial) submission in JSON.
pub fn load_seed(path: &Path) -> Result<SubmissionInfo, ExtractError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
#[path = "tests/writer_tests.rs"]
mod tests;
