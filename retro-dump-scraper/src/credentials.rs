use std::path::{Path, PathBuf};

use crate::error::ScrapeError;

const USERNAME_VAR: &str = "REDUMP_USERNAME";
const PASSWORD_VAR: &str = "REDUMP_PASSWORD";

/// redump.org forum account used to log in before searching.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Where a credential field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each credential field.
#[derive(Debug)]
pub struct CredentialSources {
    pub username: CredentialSource,
    pub password: CredentialSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    redump: Option<RedumpConfig>,
}

#[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
struct RedumpConfig {
    username: Option<String>,
    password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables or the config file.
    ///
    /// Priority: env vars > config file. Both fields are required.
    pub fn load() -> Result<Self, ScrapeError> {
        let config = config_path().and_then(|p| read_config(&p));
        resolve(|var| std::env::var(var).ok(), config)
    }

    /// Like [`Credentials::load`], but `None` when nothing is configured.
    pub fn load_optional() -> Option<Self> {
        match Self::load() {
            Ok(creds) => Some(creds),
            Err(e) => {
                log::debug!("No redump.org credentials: {}", e);
                None
            }
        }
    }

    /// Replace fields with explicit values (e.g., from CLI args).
    pub fn with_overrides(mut self, username: Option<String>, password: Option<String>) -> Self {
        if let Some(user) = username {
            self.username = user;
        }
        if let Some(pw) = password {
            self.password = pw;
        }
        self
    }
}

fn resolve(
    env: impl Fn(&str) -> Option<String>,
    config: Option<RedumpConfig>,
) -> Result<Credentials, ScrapeError> {
    let config = config.unwrap_or_default();

    let username = env(USERNAME_VAR)
        .or(config.username)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ScrapeError::Config(format!(
                "Missing username. Set {} env var or add to config file",
                USERNAME_VAR
            ))
        })?;

    let password = env(PASSWORD_VAR)
        .or(config.password)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ScrapeError::Config(format!(
                "Missing password. Set {} env var or add to config file",
                PASSWORD_VAR
            ))
        })?;

    Ok(Credentials { username, password })
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("retro-dump").join("credentials.toml"))
}

/// Save credentials to the config file, creating parent directories as needed.
/// Returns the path the file was written to.
pub fn save_to_file(creds: &Credentials) -> Result<PathBuf, ScrapeError> {
    let path = config_path()
        .ok_or_else(|| ScrapeError::Config("Could not determine config directory".to_string()))?;
    save_to(creds, &path)?;
    Ok(path)
}

fn save_to(creds: &Credentials, path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        redump: Some(RedumpConfig {
            username: Some(creds.username.clone()),
            password: Some(creds.password.clone()),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| ScrapeError::Config(format!("Failed to serialize config: {}", e)))?;

    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, toml_str)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Determine where each credential field is coming from.
pub fn credential_sources() -> CredentialSources {
    let config = config_path().and_then(|p| read_config(&p));
    sources(|var| std::env::var(var).is_ok(), config.as_ref())
}

fn sources(env_set: impl Fn(&str) -> bool, config: Option<&RedumpConfig>) -> CredentialSources {
    let username = if env_set(USERNAME_VAR) {
        CredentialSource::EnvVar(USERNAME_VAR)
    } else if config.and_then(|c| c.username.as_ref()).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    let password = if env_set(PASSWORD_VAR) {
        CredentialSource::EnvVar(PASSWORD_VAR)
    } else if config.and_then(|c| c.password.as_ref()).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    };

    CredentialSources { username, password }
}

fn read_config(path: &Path) -> Option<RedumpConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<ConfigFile>(&content) {
        Ok(config) => config.redump,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/credentials_tests.rs"]
mod tests;
