//! Synthetic ISO 9660 images for tests.

use crate::iso::{CD_SYNC_PATTERN, RAW_SECTOR_SIZE};

pub const SECTOR: usize = 2048;

/// Recording date bytes: 1999-03-15 12:00:00 UTC.
pub const DATE_1999_03_15: [u8; 7] = [99, 3, 15, 12, 0, 0, 0];

pub enum Entry<'a> {
    File(&'a str, &'a [u8]),
    Dir(&'a str, Vec<(&'a str, &'a [u8])>),
}

pub fn dir_record(name: &[u8], extent: u32, length: u32, flags: u8, date: [u8; 7]) -> Vec<u8> {
    let record_len = 33 + name.len() + (name.len() + 1) % 2;
    let mut record = vec![0u8; record_len];
    record[0] = record_len as u8;
    record[2..6].copy_from_slice(&extent.to_le_bytes());
    record[10..14].copy_from_slice(&length.to_le_bytes());
    record[18..25].copy_from_slice(&date);
    record[25] = flags;
    record[32] = name.len() as u8;
    record[33..33 + name.len()].copy_from_slice(name);
    record
}

fn write_at(image: &mut Vec<u8>, sector: usize, bytes: &[u8]) {
    let start = sector * SECTOR;
    let end = start + bytes.len();
    if image.len() < end.next_multiple_of(SECTOR) {
        image.resize(end.next_multiple_of(SECTOR), 0);
    }
    image[start..end].copy_from_slice(bytes);
}

fn place_file(image: &mut Vec<u8>, content: &[u8], next_lba: &mut u32) -> u32 {
    let lba = *next_lba;
    write_at(image, lba as usize, content);
    *next_lba += content.len().max(1).div_ceil(SECTOR) as u32;
    lba
}

fn directory_sector(self_lba: u32, parent_lba: u32, records: &[Vec<u8>]) -> Vec<u8> {
    let mut sector = Vec::with_capacity(SECTOR);
    sector.extend(dir_record(&[0x00], self_lba, SECTOR as u32, 0x02, DATE_1999_03_15));
    sector.extend(dir_record(&[0x01], parent_lba, SECTOR as u32, 0x02, DATE_1999_03_15));
    for r in records {
        sector.extend_from_slice(r);
    }
    assert!(sector.len() <= SECTOR);
    sector.resize(SECTOR, 0);
    sector
}

/// Build a 2048-byte/sector image with the given system identifier and
/// root entries. Each file gets its own sectors after the directories.
pub fn build_iso(system_id: &str, entries: &[Entry<'_>]) -> Vec<u8> {
    let mut image = vec![0u8; 18 * SECTOR];
    let root_lba = 18u32;
    let mut next_lba = 19u32;

    // Allocate subdirectory sectors first so records can point at them.
    let mut dir_lbas = Vec::new();
    for entry in entries {
        if let Entry::Dir(..) = entry {
            dir_lbas.push(next_lba);
            next_lba += 1;
        }
    }

    let mut root_records = Vec::new();
    let mut dir_index = 0;
    for entry in entries {
        match entry {
            Entry::File(name, content) => {
                let lba = place_file(&mut image, content, &mut next_lba);
                root_records.push(dir_record(
                    name.as_bytes(),
                    lba,
                    content.len() as u32,
                    0,
                    DATE_1999_03_15,
                ));
            }
            Entry::Dir(name, files) => {
                let dir_lba = dir_lbas[dir_index];
                dir_index += 1;
                let mut records = Vec::new();
                for (file_name, content) in files {
                    let lba = place_file(&mut image, content, &mut next_lba);
                    records.push(dir_record(
                        file_name.as_bytes(),
                        lba,
                        content.len() as u32,
                        0,
                        DATE_1999_03_15,
                    ));
                }
                write_at(&mut image, dir_lba as usize, &directory_sector(dir_lba, root_lba, &records));
                root_records.push(dir_record(
                    name.as_bytes(),
                    dir_lba,
                    SECTOR as u32,
                    0x02,
                    DATE_1999_03_15,
                ));
            }
        }
    }
    write_at(
        &mut image,
        root_lba as usize,
        &directory_sector(root_lba, root_lba, &root_records),
    );

    let mut pvd = vec![0u8; SECTOR];
    pvd[0] = 0x01;
    pvd[1..6].copy_from_slice(b"CD001");
    pvd[6] = 0x01;
    pvd[8..40].fill(b' ');
    pvd[8..8 + system_id.len()].copy_from_slice(system_id.as_bytes());
    pvd[40..72].fill(b' ');
    pvd[40..51].copy_from_slice(b"TEST_VOLUME");
    let total = image.len().div_ceil(SECTOR).max(next_lba as usize) as u32;
    pvd[80..84].copy_from_slice(&total.to_le_bytes());
    pvd[84..88].copy_from_slice(&total.to_be_bytes());
    let root = dir_record(&[0x00], root_lba, SECTOR as u32, 0x02, DATE_1999_03_15);
    pvd[156..156 + root.len()].copy_from_slice(&root);
    write_at(&mut image, 16, &pvd);

    image
}

/// Convert a 2048-byte/sector image to raw 2352-byte sectors of `mode`.
pub fn to_raw(iso: &[u8], mode: u8) -> Vec<u8> {
    let offset = if mode == 1 { 16 } else { 24 };
    let mut raw = Vec::with_capacity(iso.len() / SECTOR * RAW_SECTOR_SIZE as usize);
    for chunk in iso.chunks(SECTOR) {
        let mut sector = [0u8; RAW_SECTOR_SIZE as usize];
        sector[0..12].copy_from_slice(&CD_SYNC_PATTERN);
        sector[15] = mode;
        sector[offset..offset + chunk.len()].copy_from_slice(chunk);
        raw.extend_from_slice(&sector);
    }
    raw
}
