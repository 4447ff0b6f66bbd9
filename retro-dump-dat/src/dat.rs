use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;

use crate::error::DatError;

/// The `.dat` file DiscImageCreator writes next to an image: one `<rom>`
/// entry per track (or a single entry for single-image media).
#[derive(Debug, Clone, Default)]
pub struct Datfile {
    pub game: String,
    pub roms: Vec<DatRom>,
}

/// A single `<rom>` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatRom {
    pub name: String,
    pub size: u64,
    /// CRC32 checksum (lowercase hex)
    pub crc: String,
    /// MD5 checksum (lowercase hex), if present
    pub md5: Option<String>,
    /// SHA1 checksum (lowercase hex), if present
    pub sha1: Option<String>,
}

impl Datfile {
    pub fn track_count(&self) -> usize {
        self.roms.len()
    }

    /// Sum of all rom sizes.
    pub fn total_size(&self) -> u64 {
        self.roms.iter().map(|r| r.size).sum()
    }

    /// The only rom, for single-image media.
    pub fn single_rom(&self) -> Option<&DatRom> {
        match self.roms.as_slice() {
            [rom] => Some(rom),
            _ => None,
        }
    }
}

/// Parse a DIC datfile.
pub fn parse_datfile<R: BufRead>(reader: R) -> Result<Datfile, DatError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut dat = Datfile::default();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) => match e.name().as_ref() {
                b"game" => {
                    for attr in e.attributes() {
                        let attr = attr?;
                        if attr.key.as_ref() == b"name" {
                            dat.game = String::from_utf8_lossy(&attr.value).to_string();
                        }
                    }
                }
                b"rom" => dat.roms.push(parse_rom_attributes(e)?),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if dat.roms.is_empty() {
        return Err(DatError::invalid_dat("No rom entries found in datfile"));
    }

    Ok(dat)
}

/// Parse a DIC datfile from a path.
pub fn parse_datfile_path(path: &Path) -> Result<Datfile, DatError> {
    let file = std::fs::File::open(path)?;
    parse_datfile(std::io::BufReader::new(file))
}

fn parse_rom_attributes(e: &BytesStart<'_>) -> Result<DatRom, DatError> {
    let mut rom = DatRom::default();

    for attr in e.attributes() {
        let attr = attr?;
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match attr.key.as_ref() {
            b"name" => rom.name = value,
            b"size" => {
                rom.size = value
                    .parse()
                    .map_err(|_| DatError::invalid_dat(format!("Invalid rom size: {value}")))?;
            }
            b"crc" => rom.crc = value.to_lowercase(),
            b"md5" => rom.md5 = Some(value.to_lowercase()),
            b"sha1" => rom.sha1 = Some(value.to_lowercase()),
            _ => {}
        }
    }

    Ok(rom)
}

// ---------------------------------------------------------------------------
// Line-level access
// ---------------------------------------------------------------------------

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name="([^"]*)""#).expect("static pattern"));
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"size="(\d+)""#).expect("static pattern"));
static CRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"crc="([0-9A-Fa-f]{8})""#).expect("static pattern"));
static MD5_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"md5="([0-9A-Fa-f]{32})""#).expect("static pattern"));
static SHA1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"sha1="([0-9A-Fa-f]{40})""#).expect("static pattern"));

/// Keep every `<rom` line of a datfile, trimmed, joined by newlines.
///
/// This is the track hash text carried verbatim in a submission.
pub fn rom_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| l.starts_with("<rom"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pull size and hashes out of a single `<rom>` line.
///
/// Returns `None` unless at least the size and CRC32 are present.
pub fn parse_rom_line(line: &str) -> Option<DatRom> {
    let size = capture(&SIZE_RE, line)?.parse().ok()?;
    let crc = capture(&CRC_RE, line)?.to_lowercase();
    Some(DatRom {
        name: capture(&NAME_RE, line).unwrap_or_default(),
        size,
        crc,
        md5: capture(&MD5_RE, line).map(|s| s.to_lowercase()),
        sha1: capture(&SHA1_RE, line).map(|s| s.to_lowercase()),
    })
}

/// SHA-1 of a `<rom>` line, lowercase.
pub fn extract_sha1(line: &str) -> Option<String> {
    capture(&SHA1_RE, line).map(|s| s.to_lowercase())
}

#[cfg(test)]
#[path = "tests/dat_tests.rs"]
mod tests;
