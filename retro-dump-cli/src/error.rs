use thiserror::Error;

use retro_dump_lib::{ConfigError, ExtractError};
use retro_dump_params::ParamError;
use retro_dump_scraper::ScrapeError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Command line rejected
    #[error("Invalid command line: {0}")]
    Params(#[from] ParamError),

    /// Dump outputs could not be read or written
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// Options file error
    #[error("Options error: {0}")]
    Options(#[from] ConfigError),

    /// redump.org error
    #[error("redump.org: {0}")]
    Scrape(#[from] ScrapeError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
