/// Errors that can occur while talking to redump.org.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited by redump.org")]
    RateLimit,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Unexpected page content: {0}")]
    Page(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScrapeError {
    pub fn page(msg: impl Into<String>) -> Self {
        Self::Page(msg.into())
    }
}
