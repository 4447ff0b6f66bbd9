//! ISO 9660 reading over 2048-byte and raw 2352-byte sector images.

use std::io::{Read, Seek, SeekFrom};

use retro_dump_core::util::read_ascii_fixed;

use crate::error::IsoError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// CD sync pattern at the start of every raw (2352-byte) sector.
pub const CD_SYNC_PATTERN: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Standard ISO 9660 sector size (user data only).
pub const ISO_SECTOR_SIZE: u64 = 2048;

/// Raw CD sector size (sync + header + subheader + data + EDC + ECC).
pub const RAW_SECTOR_SIZE: u64 = 2352;

/// Offset to user data within a Mode 1 raw sector: 12 (sync) + 4 (header).
const MODE1_DATA_OFFSET: usize = 16;

/// Offset to user data within a Mode 2 Form 1 raw sector:
/// 12 (sync) + 4 (header) + 8 (subheader).
const MODE2_FORM1_DATA_OFFSET: usize = 24;

/// ISO 9660 Primary Volume Descriptor is always at sector 16.
pub const PVD_SECTOR: u64 = 16;

// ---------------------------------------------------------------------------
// Format detection
// ---------------------------------------------------------------------------

/// Sector layout of an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscFormat {
    /// 2048 bytes/sector (DVD `.iso`).
    Iso2048,
    /// 2352 bytes/sector (CD `.bin` / `.img`).
    RawSector2352,
}

impl DiscFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iso2048 => "ISO 9660",
            Self::RawSector2352 => "Raw BIN (2352)",
        }
    }
}

/// Detect the sector layout from the first bytes and the PVD signature.
pub fn detect_disc_format<R: Read + Seek>(reader: &mut R) -> Result<DiscFormat, IsoError> {
    reader.seek(SeekFrom::Start(0))?;
    let mut buf = [0u8; 16];
    let bytes_read = reader.read(&mut buf)?;

    if bytes_read < 12 {
        return Err(IsoError::TooSmall {
            expected: 12,
            actual: bytes_read as u64,
        });
    }

    if buf[..12] == CD_SYNC_PATTERN {
        return Ok(DiscFormat::RawSector2352);
    }

    reader.seek(SeekFrom::Start(PVD_SECTOR * ISO_SECTOR_SIZE + 1))?;
    let mut cd001 = [0u8; 5];
    if reader.read_exact(&mut cd001).is_ok() && &cd001 == b"CD001" {
        return Ok(DiscFormat::Iso2048);
    }

    Err(IsoError::invalid_format("No ISO 9660 volume found"))
}

// ---------------------------------------------------------------------------
// Sector reading
// ---------------------------------------------------------------------------

/// Read 2048 bytes of user data from a given sector number.
///
/// Raw sectors are read whole and the data offset is chosen from the mode
/// byte in the sector header.
pub fn read_sector_data<R: Read + Seek>(
    reader: &mut R,
    sector: u64,
    format: DiscFormat,
) -> Result<[u8; 2048], IsoError> {
    let mut data = [0u8; 2048];
    match format {
        DiscFormat::Iso2048 => {
            reader.seek(SeekFrom::Start(sector * ISO_SECTOR_SIZE))?;
            read_exact_sector(reader, &mut data, sector)?;
        }
        DiscFormat::RawSector2352 => {
            reader.seek(SeekFrom::Start(sector * RAW_SECTOR_SIZE))?;
            let mut raw = [0u8; RAW_SECTOR_SIZE as usize];
            read_exact_sector(reader, &mut raw, sector)?;
            let offset = match raw[15] {
                1 => MODE1_DATA_OFFSET,
                _ => MODE2_FORM1_DATA_OFFSET,
            };
            data.copy_from_slice(&raw[offset..offset + 2048]);
        }
    }
    Ok(data)
}

fn read_exact_sector<R: Read>(reader: &mut R, buf: &mut [u8], sector: u64) -> Result<(), IsoError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            IsoError::invalid_format(format!("Sector {} is beyond end of image", sector))
        } else {
            IsoError::Io(e)
        }
    })
}

// ---------------------------------------------------------------------------
// Directory records
// ---------------------------------------------------------------------------

/// Recording date of a directory record (the 7-byte short form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl RecordingDate {
    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            year: 1900 + bytes[0] as u16,
            month: bytes[1],
            day: bytes[2],
        }
    }

    /// `YYYY-MM-DD`, or `None` if the stored date is not a calendar date.
    pub fn to_iso_date(&self) -> Option<String> {
        if !(1..=12).contains(&self.month) || !(1..=31).contains(&self.day) {
            return None;
        }
        Some(format!("{:04}-{:02}-{:02}", self.year, self.month, self.day))
    }
}

/// A parsed ISO 9660 directory record.
#[derive(Debug, Clone)]
pub struct DirectoryRecord {
    pub extent_lba: u32,
    pub data_length: u32,
    pub recorded: RecordingDate,
    pub file_flags: u8,
    pub file_identifier: String,
}

impl DirectoryRecord {
    pub fn is_directory(&self) -> bool {
        self.file_flags & 0x02 != 0
    }

    /// Identifier with the `;1` version suffix removed.
    pub fn name(&self) -> &str {
        self.file_identifier
            .split(';')
            .next()
            .unwrap_or(&self.file_identifier)
    }
}

/// Parse a single ISO 9660 directory record.
pub fn parse_directory_record(data: &[u8]) -> Option<DirectoryRecord> {
    let record_len = *data.first()? as usize;
    if record_len < 34 || data.len() < record_len {
        return None;
    }

    let extent_lba = u32::from_le_bytes([data[2], data[3], data[4], data[5]]);
    let data_length = u32::from_le_bytes([data[10], data[11], data[12], data[13]]);
    let recorded = RecordingDate::from_bytes(&data[18..25]);
    let file_flags = data[25];
    let id_len = data[32] as usize;

    if 33 + id_len > record_len {
        return None;
    }

    let file_identifier = match &data[33..33 + id_len] {
        [0x00] => ".".to_string(),
        [0x01] => "..".to_string(),
        id => String::from_utf8_lossy(id).to_string(),
    };

    Some(DirectoryRecord {
        extent_lba,
        data_length,
        recorded,
        file_flags,
        file_identifier,
    })
}

// ---------------------------------------------------------------------------
// Primary Volume Descriptor
// ---------------------------------------------------------------------------

/// Parsed ISO 9660 Primary Volume Descriptor.
#[derive(Debug, Clone)]
pub struct PrimaryVolumeDescriptor {
    /// System identifier (offset 8, 32 bytes). e.g. "PLAYSTATION"
    pub system_identifier: String,
    /// Volume identifier (offset 40, 32 bytes).
    pub volume_identifier: String,
    /// Volume space size in sectors (offset 80, LE u32).
    pub volume_space_size: u32,
    /// Root directory record (offset 156).
    pub root: DirectoryRecord,
}

/// Read and parse the Primary Volume Descriptor from sector 16.
pub fn read_pvd<R: Read + Seek>(
    reader: &mut R,
    format: DiscFormat,
) -> Result<PrimaryVolumeDescriptor, IsoError> {
    let sector = read_sector_data(reader, PVD_SECTOR, format)?;

    if sector[0] != 0x01 {
        return Err(IsoError::invalid_format(format!(
            "Expected PVD type 0x01, got 0x{:02X}",
            sector[0]
        )));
    }
    if &sector[1..6] != b"CD001" {
        return Err(IsoError::invalid_format("Missing CD001 signature in PVD"));
    }

    let root = parse_directory_record(&sector[156..190])
        .ok_or_else(|| IsoError::invalid_format("Invalid root directory record"))?;

    Ok(PrimaryVolumeDescriptor {
        system_identifier: read_ascii_fixed(&sector[8..40]),
        volume_identifier: read_ascii_fixed(&sector[40..72]),
        volume_space_size: u32::from_le_bytes([sector[80], sector[81], sector[82], sector[83]]),
        root,
    })
}

// ---------------------------------------------------------------------------
// Directory walking
// ---------------------------------------------------------------------------

/// List the records of a directory, excluding `.` and `..`.
pub fn read_directory<R: Read + Seek>(
    reader: &mut R,
    format: DiscFormat,
    dir: &DirectoryRecord,
) -> Result<Vec<DirectoryRecord>, IsoError> {
    let mut records = Vec::new();
    let dir_sectors = (dir.data_length as u64).div_ceil(ISO_SECTOR_SIZE);

    for sector_offset in 0..dir_sectors {
        let sector = dir.extent_lba as u64 + sector_offset;
        let data = read_sector_data(reader, sector, format)?;

        let mut pos = 0;
        while pos < data.len() {
            let record_len = data[pos] as usize;
            if record_len == 0 || pos + record_len > data.len() {
                break;
            }
            if let Some(record) = parse_directory_record(&data[pos..pos + record_len])
                && record.file_identifier != "."
                && record.file_identifier != ".."
            {
                records.push(record);
            }
            pos += record_len;
        }
    }

    Ok(records)
}

/// Resolve a path like `SLUS_012.34` or `EXE\MAIN.EXE` from the root.
///
/// Matching is case-insensitive and ignores `;1` version suffixes.
pub fn find_path<R: Read + Seek>(
    reader: &mut R,
    format: DiscFormat,
    pvd: &PrimaryVolumeDescriptor,
    path: &str,
) -> Result<DirectoryRecord, IsoError> {
    let mut current = pvd.root.clone();

    for component in path.split(['\\', '/']).filter(|c| !c.is_empty()) {
        let wanted = component.split(';').next().unwrap_or(component);
        current = read_directory(reader, format, &current)?
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IsoError::not_found(path.to_string()))?;
    }

    Ok(current)
}

/// Read the full content of a file given its directory record.
pub fn read_file<R: Read + Seek>(
    reader: &mut R,
    format: DiscFormat,
    record: &DirectoryRecord,
) -> Result<Vec<u8>, IsoError> {
    let mut result = Vec::with_capacity(record.data_length as usize);
    let sectors_needed = (record.data_length as u64).div_ceil(ISO_SECTOR_SIZE);
    let mut remaining = record.data_length as usize;

    for i in 0..sectors_needed {
        let sector = record.extent_lba as u64 + i;
        let data = read_sector_data(reader, sector, format)?;
        let to_copy = remaining.min(data.len());
        result.extend_from_slice(&data[..to_copy]);
        remaining -= to_copy;
    }

    Ok(result)
}

#[cfg(test)]
#[path = "tests/iso_tests.rs"]
mod tests;
