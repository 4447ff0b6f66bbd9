//! The parameter model: one DiscImageCreator invocation.

use std::collections::BTreeMap;

use crate::command::Command;
use crate::error::ParamError;
use crate::flag::{Flag, FlagValue};

/// Tri-state of a flag within a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagState {
    /// Never touched.
    Unset,
    On,
    /// Explicitly turned off (e.g. by a user option overriding a preset).
    Off,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FlagSetting {
    enabled: bool,
    values: Vec<FlagValue>,
}

/// One invocation of DiscImageCreator.
///
/// Positional slots are public and may be left empty; whether the set is
/// complete is decided when it is serialized. Flags can only be switched
/// on through [`Parameters::enable`], which checks both the support table
/// and the flag's sub-value contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    command: Command,
    pub drive: Option<String>,
    pub filename: Option<String>,
    pub speed: Option<i32>,
    pub lba_range: Option<(i32, i32)>,
    flags: BTreeMap<Flag, FlagSetting>,
}

impl Parameters {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            drive: None,
            filename: None,
            speed: None,
            lba_range: None,
            flags: BTreeMap::new(),
        }
    }

    pub fn with_drive(mut self, drive: impl Into<String>) -> Self {
        self.drive = Some(drive.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_lba_range(mut self, start: i32, end: i32) -> Self {
        self.lba_range = Some((start, end));
        self
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Switch to another command. Flags are kept as they are; any that the
    /// new command does not support make serialization fail until they are
    /// cleared.
    pub fn set_command(&mut self, command: Command) {
        self.command = command;
    }

    /// Turn `flag` on with the given sub-values.
    pub fn enable(&mut self, flag: Flag, values: &[FlagValue]) -> Result<(), ParamError> {
        if !self.command.supports(flag) {
            return Err(ParamError::UnsupportedFlag {
                command: self.command,
                flag,
            });
        }
        validate_flag_values(flag, values)?;
        self.flags.insert(
            flag,
            FlagSetting {
                enabled: true,
                values: values.to_vec(),
            },
        );
        Ok(())
    }

    /// Turn `flag` on with integer sub-values.
    pub fn enable_with(&mut self, flag: Flag, values: &[i32]) -> Result<(), ParamError> {
        let values: Vec<FlagValue> = values.iter().copied().map(FlagValue::Int).collect();
        self.enable(flag, &values)
    }

    /// Explicitly turn `flag` off.
    pub fn disable(&mut self, flag: Flag) {
        self.flags.insert(
            flag,
            FlagSetting {
                enabled: false,
                values: Vec::new(),
            },
        );
    }

    /// Forget any setting for `flag`.
    pub fn clear(&mut self, flag: Flag) {
        self.flags.remove(&flag);
    }

    pub fn state(&self, flag: Flag) -> FlagState {
        match self.flags.get(&flag) {
            None => FlagState::Unset,
            Some(s) if s.enabled => FlagState::On,
            Some(_) => FlagState::Off,
        }
    }

    pub fn is_enabled(&self, flag: Flag) -> bool {
        self.state(flag) == FlagState::On
    }

    /// Sub-values of an enabled flag (empty if none or not enabled).
    pub fn values(&self, flag: Flag) -> &[FlagValue] {
        match self.flags.get(&flag) {
            Some(s) if s.enabled => &s.values,
            _ => &[],
        }
    }

    /// Integer sub-value at `index`, if set.
    pub fn value(&self, flag: Flag, index: usize) -> Option<i32> {
        self.values(flag).get(index).and_then(FlagValue::as_int)
    }

    /// Enabled flags in canonical emission order.
    pub fn enabled_flags(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.iter().copied().filter(|f| self.is_enabled(*f))
    }

    pub(crate) fn insert_enabled(&mut self, flag: Flag, values: Vec<FlagValue>) {
        self.flags.insert(
            flag,
            FlagSetting {
                enabled: true,
                values,
            },
        );
    }
}

/// Check `values` against the declared contract of `flag`.
///
/// Values form a contiguous prefix of the declared sub-values; each must
/// satisfy its bound and any condition on earlier values, and every
/// mandatory sub-value must be present.
pub fn validate_flag_values(flag: Flag, values: &[FlagValue]) -> Result<(), ParamError> {
    let specs = flag.value_specs();
    if values.len() > specs.len() {
        return Err(ParamError::TooManyFlagValues {
            flag,
            max: specs.len(),
        });
    }

    for (i, spec) in specs.iter().enumerate() {
        match values.get(i) {
            Some(value) => {
                if !spec.is_allowed_after(&values[..i]) || !spec.admits(value) {
                    return Err(ParamError::invalid_flag_value(
                        flag,
                        spec.name,
                        value.to_string(),
                    ));
                }
            }
            None if spec.is_mandatory() => {
                return Err(ParamError::MissingFlagValue {
                    flag,
                    value: spec.name,
                });
            }
            None => break,
        }
    }

    Ok(())
}

/// Normalize a drive identifier.
///
/// Accepts a drive letter with or without the trailing `:` or `:\`
/// (normalized to the bare uppercase letter) or an absolute device path
/// such as `/dev/sr0`.
pub fn normalize_drive(drive: &str) -> Option<String> {
    let drive = drive.trim();
    if drive.starts_with('/') && drive.len() > 1 {
        return Some(drive.to_string());
    }

    let mut chars = drive.chars();
    let letter = chars.next().filter(|c| c.is_ascii_alphabetic())?;
    match chars.as_str() {
        "" | ":" | ":\\" | ":/" => Some(letter.to_ascii_uppercase().to_string()),
        _ => None,
    }
}
