//! Blu-ray layerbreaks from `PIC.bin`.
//!
//! Each layer is described by a 0x40-byte record. The records used here
//! start at 0x1C, 0x5C and 0x9C; each holds the layer's first PSN and, four
//! bytes later, its last PSN, both big-endian.

use retro_dump_core::util::read_u32_be;

const RECORD_OFFSETS: [usize; 3] = [0x1C, 0x5C, 0x9C];

/// Sector size of a Blu-ray image.
pub const BD_SECTOR_SIZE: u64 = 2048;

/// Layerbreaks in layer order (at most three).
///
/// A layer counts only while its record's end PSN is nonzero and the
/// running sum of layer sizes stays below `total_sectors`; the first layer
/// that fails either check ends the list.
pub fn parse_pic_layerbreaks(pic: &[u8], total_sectors: u64) -> Vec<u64> {
    let mut breaks = Vec::new();
    let mut position: u64 = 0;

    for offset in RECORD_OFFSETS {
        let (Some(start), Some(end)) = (read_u32_be(pic, offset), read_u32_be(pic, offset + 4))
        else {
            break;
        };
        if end == 0 || end < start {
            break;
        }
        position += u64::from(end - start) + 1;
        if position >= total_sectors {
            break;
        }
        breaks.push(position);
    }

    breaks
}
