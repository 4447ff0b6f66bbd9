//! DiscImageCreator parameters: building, serializing and parsing
//! command lines.
//!
//! A [`Parameters`] value holds one invocation: the [`Command`], its fixed
//! positional arguments, and a set of [`Flag`]s with their sub-values. The
//! per-command support table in [`command`] and the per-flag sub-value
//! declarations in [`flag`] are consulted by both [`Parameters::parse`] and
//! [`Parameters::to_command_line`].

pub mod command;
pub mod defaults;
pub mod error;
pub mod flag;
pub mod parameters;
pub mod parse;
pub mod serialize;

pub use command::{Command, Signature};
pub use defaults::{DEFAULT_C2_REREAD, DEFAULT_DVD_REREAD, DumpOptions};
pub use error::ParamError;
pub use flag::{Bound, Flag, FlagValue, Need, ValueKind, ValueSpec};
pub use parameters::{FlagState, Parameters, normalize_drive, validate_flag_values};
pub use parse::tokenize;
