//! Persistent options: `~/.config/retro-dump/options.toml`.
//!
//! Options are a typed struct. `retro-dump config set` edits them through
//! the static [`OPTION_KEYS`] table, one entry per editable key.

use std::path::{Path, PathBuf};

use retro_dump_core::MediaType;
use retro_dump_params::DumpOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Canonical path to the options file.
pub fn options_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("retro-dump").join("options.toml")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveSpeeds {
    pub cd: i32,
    pub dvd: i32,
    pub hddvd: i32,
    pub bd: i32,
}

impl Default for DriveSpeeds {
    fn default() -> Self {
        Self {
            cd: 24,
            dvd: 16,
            hddvd: 24,
            bd: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Also write `!submissionInfo.json`.
    pub json: bool,
    /// Pack the text logs into `<name>_logs.zip`.
    pub zip_logs: bool,
    /// Keep placeholder markers in the written report.
    pub placeholders: bool,
    /// Write `!protectionInfo.txt` when a scanner reported anything.
    pub protection_file: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            json: false,
            zip_logs: true,
            placeholders: true,
            protection_file: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedumpOptions {
    /// Look the dump up on redump.org after extraction.
    pub enabled: bool,
}

/// Everything `retro-dump` remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// DiscImageCreator executable.
    pub dic_path: PathBuf,
    pub speeds: DriveSpeeds,
    pub dump: DumpOptions,
    pub output: OutputOptions,
    pub redump: RedumpOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dic_path: PathBuf::from(if cfg!(windows) {
                "DiscImageCreator.exe"
            } else {
                "DiscImageCreator"
            }),
            speeds: DriveSpeeds::default(),
            dump: DumpOptions::default(),
            output: OutputOptions::default(),
            redump: RedumpOptions::default(),
        }
    }
}

impl Options {
    /// Load from the canonical path. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&options_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No options file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&options_path())
    }

    /// Write atomically through a temporary file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Default drive speed for `media`.
    pub fn speed_for(&self, media: MediaType) -> i32 {
        match media {
            MediaType::CdRom | MediaType::GdRom => self.speeds.cd,
            MediaType::HdDvd => self.speeds.hddvd,
            MediaType::BluRay => self.speeds.bd,
            _ => self.speeds.dvd,
        }
    }

    /// Set `key` from its text form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let entry = OPTION_KEYS
            .iter()
            .find(|k| k.key == key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        (entry.set)(self, value.trim())
            .map_err(|expected| ConfigError::invalid_value(key, value, expected))
    }

    /// Text form of `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        OPTION_KEYS
            .iter()
            .find(|k| k.key == key)
            .map(|entry| (entry.get)(self))
    }
}

// ---------------------------------------------------------------------------
// Key table
// ---------------------------------------------------------------------------

/// One editable option.
pub struct OptionKey {
    pub key: &'static str,
    pub description: &'static str,
    set: fn(&mut Options, &str) -> Result<(), &'static str>,
    get: fn(&Options) -> String,
}

fn parse_bool(value: &str) -> Result<bool, &'static str> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err("expected true or false"),
    }
}

fn parse_int(value: &str) -> Result<i32, &'static str> {
    value.parse().map_err(|_| "expected an integer")
}

fn parse_speed(value: &str) -> Result<i32, &'static str> {
    match parse_int(value)? {
        s @ 0..=72 => Ok(s),
        _ => Err("expected a speed between 0 and 72"),
    }
}

pub static OPTION_KEYS: &[OptionKey] = &[
    OptionKey {
        key: "dic.path",
        description: "DiscImageCreator executable",
        set: |o, v| {
            if v.is_empty() {
                return Err("expected a path");
            }
            o.dic_path = PathBuf::from(v);
            Ok(())
        },
        get: |o| o.dic_path.display().to_string(),
    },
    OptionKey {
        key: "speed.cd",
        description: "Default CD and GD-ROM read speed",
        set: |o, v| {
            o.speeds.cd = parse_speed(v)?;
            Ok(())
        },
        get: |o| o.speeds.cd.to_string(),
    },
    OptionKey {
        key: "speed.dvd",
        description: "Default DVD read speed",
        set: |o, v| {
            o.speeds.dvd = parse_speed(v)?;
            Ok(())
        },
        get: |o| o.speeds.dvd.to_string(),
    },
    OptionKey {
        key: "speed.hddvd",
        description: "Default HD-DVD read speed",
        set: |o, v| {
            o.speeds.hddvd = parse_speed(v)?;
            Ok(())
        },
        get: |o| o.speeds.hddvd.to_string(),
    },
    OptionKey {
        key: "speed.bd",
        description: "Default Blu-ray read speed",
        set: |o, v| {
            o.speeds.bd = parse_speed(v)?;
            Ok(())
        },
        get: |o| o.speeds.bd.to_string(),
    },
    OptionKey {
        key: "dump.quiet",
        description: "Disable DiscImageCreator's beep (/q)",
        set: |o, v| {
            o.dump.quiet_mode = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.dump.quiet_mode.to_string(),
    },
    OptionKey {
        key: "dump.paranoid",
        description: "Scan sector protection and read subchannels fully",
        set: |o, v| {
            o.dump.paranoid_mode = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.dump.paranoid_mode.to_string(),
    },
    OptionKey {
        key: "dump.cmi",
        description: "Read DVD CMI (/c)",
        set: |o, v| {
            o.dump.use_cmi_flag = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.dump.use_cmi_flag.to_string(),
    },
    OptionKey {
        key: "dump.reread",
        description: "C2 reread count (-1 off, 0 default)",
        set: |o, v| {
            o.dump.reread_count = parse_int(v)?;
            Ok(())
        },
        get: |o| o.dump.reread_count.to_string(),
    },
    OptionKey {
        key: "dump.dvd_reread",
        description: "DVD reread count (-1 off, 0 default)",
        set: |o, v| {
            o.dump.dvd_reread_count = parse_int(v)?;
            Ok(())
        },
        get: |o| o.dump.dvd_reread_count.to_string(),
    },
    OptionKey {
        key: "dump.multi_sector_read",
        description: "Read multiple sectors at once (/mr)",
        set: |o, v| {
            o.dump.multi_sector_read = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.dump.multi_sector_read.to_string(),
    },
    OptionKey {
        key: "dump.multi_sector_read_value",
        description: "Sector count for /mr",
        set: |o, v| match parse_int(v)? {
            n if n >= 0 => {
                o.dump.multi_sector_read_value = n;
                Ok(())
            }
            _ => Err("expected a non-negative integer"),
        },
        get: |o| o.dump.multi_sector_read_value.to_string(),
    },
    OptionKey {
        key: "output.json",
        description: "Write !submissionInfo.json",
        set: |o, v| {
            o.output.json = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.output.json.to_string(),
    },
    OptionKey {
        key: "output.zip_logs",
        description: "Pack text logs into _logs.zip",
        set: |o, v| {
            o.output.zip_logs = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.output.zip_logs.to_string(),
    },
    OptionKey {
        key: "output.placeholders",
        description: "Keep placeholder markers in the report",
        set: |o, v| {
            o.output.placeholders = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.output.placeholders.to_string(),
    },
    OptionKey {
        key: "output.protection_file",
        description: "Write !protectionInfo.txt",
        set: |o, v| {
            o.output.protection_file = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.output.protection_file.to_string(),
    },
    OptionKey {
        key: "redump.enabled",
        description: "Look dumps up on redump.org",
        set: |o, v| {
            o.redump.enabled = parse_bool(v)?;
            Ok(())
        },
        get: |o| o.redump.enabled.to_string(),
    },
];

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
