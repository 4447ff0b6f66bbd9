use retro_dump_dat::DatError;

#[derive(Debug, thiserror::Error)]
pub enum XboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Hashing failed: {0}")]
    Hash(#[from] DatError),

    #[error("{file} too small: expected {expected} bytes, got {actual}")]
    TooSmall {
        file: &'static str,
        expected: usize,
        actual: usize,
    },
}
