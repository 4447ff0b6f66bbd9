use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while running a dump or reading its outputs.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Every expected output that was not found, listed together.
    #[error("Missing dump outputs: {}", format_paths(.0))]
    MissingOutputs(Vec<PathBuf>),

    #[error("Invalid parameters: {0}")]
    Params(#[from] retro_dump_params::ParamError),

    #[error("Datfile error: {0}")]
    Dat(#[from] retro_dump_dat::DatError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Could not start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Dump cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl ExtractError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors loading, saving or editing the options file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown option '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for '{key}': '{value}' ({expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl ConfigError {
    pub fn invalid_value(key: &str, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}
