use super::*;

#[test]
fn test_hash_reader_known_values() {
    let hashes = hash_reader(&b"abc"[..]).unwrap();
    assert_eq!(hashes.size, 3);
    assert_eq!(hashes.crc32, "352441c2");
    assert_eq!(hashes.md5, "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(hashes.sha1, "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn test_hash_reader_empty() {
    let hashes = hash_reader(std::io::empty()).unwrap();
    assert_eq!(hashes.size, 0);
    assert_eq!(hashes.crc32, "00000000");
    assert_eq!(hashes.sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn test_hash_file_spans_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bin");
    let data = vec![0x5Au8; CHUNK_SIZE * 2 + 17];
    std::fs::write(&path, &data).unwrap();

    let from_file = hash_file(&path).unwrap();
    let from_memory = hash_reader(data.as_slice()).unwrap();
    assert_eq!(from_file, from_memory);
    assert_eq!(from_file.size, data.len() as u64);
}

#[test]
fn test_universal_hash_single_track() {
    // SHA-1 of the 20 raw bytes of SHA-1("abc")
    let abc = "a9993e364706816aba3e25717850c26c9cd0d89d";
    let raw = decode_sha1(abc).unwrap();
    let expected = format!("{:x}", sha1::Sha1::digest(raw));
    assert_eq!(universal_hash([abc]).unwrap(), Some(expected));
}

#[test]
fn test_universal_hash_is_order_sensitive() {
    let a = "a9993e364706816aba3e25717850c26c9cd0d89d";
    let b = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    let ab = universal_hash([a, b]).unwrap();
    let ba = universal_hash([b, a]).unwrap();
    assert!(ab.is_some());
    assert_ne!(ab, ba);
}

#[test]
fn test_universal_hash_empty_and_invalid() {
    assert_eq!(universal_hash(std::iter::empty()).unwrap(), None);
    assert!(matches!(
        universal_hash(["not-a-digest"]),
        Err(DatError::InvalidDigest(_))
    ));
}
