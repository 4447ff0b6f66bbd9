use retro_dump_core::{MediaType, System};

use crate::command::Command;
use crate::flag::Flag;

/// Reasons a command line or parameter set is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("Empty command line")]
    Empty,

    #[error("Unterminated quote in command line")]
    UnterminatedQuote,

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' requires a {slot}")]
    MissingPositional { command: Command, slot: &'static str },

    #[error("Expected a {slot} but found flag '{token}'")]
    FlagInPositional { slot: &'static str, token: String },

    #[error("Invalid drive identifier: '{0}'")]
    InvalidDrive(String),

    #[error("Filename cannot contain a double quote: '{0}'")]
    InvalidFilename(String),

    #[error("Invalid {slot}: '{token}'")]
    InvalidNumber { slot: &'static str, token: String },

    #[error("{slot} {value} is out of range {min}..={max}")]
    OutOfRange {
        slot: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("'{command}' does not accept flag {flag}")]
    UnsupportedFlag { command: Command, flag: Flag },

    #[error("Flag {flag} requires a {value}")]
    MissingFlagValue { flag: Flag, value: &'static str },

    #[error("Invalid {value} for flag {flag}: '{token}'")]
    InvalidFlagValue {
        flag: Flag,
        value: &'static str,
        token: String,
    },

    #[error("Flag {flag} takes at most {max} values")]
    TooManyFlagValues { flag: Flag, max: usize },

    #[error("No dump command for {system} on {media}")]
    UnsupportedMedia { system: System, media: MediaType },
}

impl ParamError {
    pub fn missing(command: Command, slot: &'static str) -> Self {
        Self::MissingPositional { command, slot }
    }

    pub fn invalid_flag_value(flag: Flag, value: &'static str, token: impl Into<String>) -> Self {
        Self::InvalidFlagValue {
            flag,
            value,
            token: token.into(),
        }
    }
}
