use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha1::Digest;

use crate::error::DatError;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Size and checksums of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHashes {
    pub size: u64,
    /// CRC32 (lowercase hex)
    pub crc32: String,
    /// MD5 (lowercase hex)
    pub md5: String,
    /// SHA1 (lowercase hex)
    pub sha1: String,
}

/// Compute size, CRC32, MD5 and SHA1 in a single streaming pass.
pub fn hash_reader<R: Read>(mut reader: R) -> Result<FileHashes, DatError> {
    let mut crc = crc32fast::Hasher::new();
    let mut md5 = md5::Context::new();
    let mut sha = sha1::Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut size: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        crc.update(&buf[..n]);
        md5.consume(&buf[..n]);
        sha.update(&buf[..n]);
        size += n as u64;
    }

    Ok(FileHashes {
        size,
        crc32: format!("{:08x}", crc.finalize()),
        md5: format!("{:x}", md5.compute()),
        sha1: format!("{:x}", sha.finalize()),
    })
}

/// Hash a file on disk.
pub fn hash_file(path: &Path) -> Result<FileHashes, DatError> {
    let file = std::fs::File::open(path)?;
    hash_reader(file)
}

fn decode_sha1(hex: &str) -> Result<[u8; 20], DatError> {
    let hex = hex.trim();
    if hex.len() != 40 || !hex.is_ascii() {
        return Err(DatError::InvalidDigest(hex.to_string()));
    }
    let mut out = [0u8; 20];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| DatError::InvalidDigest(hex.to_string()))?;
    }
    Ok(out)
}

/// Universal hash of a multi-track disc: SHA-1 over the concatenated raw
/// SHA-1 digests of each track, in track order.
///
/// Returns `None` for an empty track list.
pub fn universal_hash<'a>(
    track_sha1s: impl IntoIterator<Item = &'a str>,
) -> Result<Option<String>, DatError> {
    let mut sha = sha1::Sha1::new();
    let mut any = false;
    for hex in track_sha1s {
        sha.update(decode_sha1(hex)?);
        any = true;
    }
    Ok(any.then(|| format!("{:x}", sha.finalize())))
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
