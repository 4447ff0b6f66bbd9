/// Errors from reading a PlayStation disc image.
#[derive(Debug, thiserror::Error)]
pub enum IsoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid disc image: {0}")]
    InvalidFormat(String),

    #[error("Image too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },

    #[error("Not found in image: {0}")]
    NotFound(String),
}

impl IsoError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
