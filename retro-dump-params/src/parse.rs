//! Command-line parsing and validation.
//!
//! The parser runs in four steps: tokenize, pick the command, read the
//! command's fixed positional arguments, then read flags. Any positional
//! problem rejects the whole line. Flags the command does not support are
//! rejected too; tokens that are not flags at all are skipped.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::command::Command;
use crate::error::ParamError;
use crate::flag::{Flag, FlagValue};
use crate::parameters::{Parameters, normalize_drive};

/// Split a command line on whitespace, keeping double-quoted segments
/// together. Quotes are removed from the resulting tokens.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParamError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParamError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

struct Cursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Take the next token as a positional argument. Flags may not stand
    /// in for a positional.
    fn positional(&mut self, command: Command, slot: &'static str) -> Result<&'a str, ParamError> {
        let token = self.peek().ok_or(ParamError::missing(command, slot))?;
        if Flag::from_token(token).is_some() {
            return Err(ParamError::FlagInPositional {
                slot,
                token: token.to_string(),
            });
        }
        self.pos += 1;
        Ok(token)
    }

    /// Next token, unless it is a flag.
    fn peek_value(&self) -> Option<&'a str> {
        self.peek().filter(|t| Flag::from_token(t).is_none())
    }
}

fn parse_bounded(
    slot: &'static str,
    token: &str,
    range: RangeInclusive<i32>,
) -> Result<i32, ParamError> {
    let value: i32 = token.parse().map_err(|_| ParamError::InvalidNumber {
        slot,
        token: token.to_string(),
    })?;
    check_bounded(slot, value, range)
}

pub(crate) fn check_bounded(
    slot: &'static str,
    value: i32,
    range: RangeInclusive<i32>,
) -> Result<i32, ParamError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ParamError::OutOfRange {
            slot,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Consume the sub-values of `flag` from the cursor.
///
/// A sub-value is taken only if the next token exists, is not a flag,
/// parses and satisfies its bound. Optional sub-values stop consumption
/// at the first miss; a missing mandatory sub-value is an error.
fn read_flag_values(flag: Flag, cursor: &mut Cursor<'_>) -> Result<Vec<FlagValue>, ParamError> {
    let mut values = Vec::new();

    for spec in flag.value_specs() {
        if !spec.is_allowed_after(&values) {
            break;
        }
        let candidate = cursor.peek_value();
        match candidate.and_then(|t| spec.accept(t)) {
            Some(value) => {
                values.push(value);
                cursor.advance();
            }
            None if spec.is_mandatory() => {
                return Err(match candidate {
                    Some(token) => ParamError::invalid_flag_value(flag, spec.name, token),
                    None => ParamError::MissingFlagValue {
                        flag,
                        value: spec.name,
                    },
                });
            }
            None => break,
        }
    }

    Ok(values)
}

impl Parameters {
    /// Parse and validate a DiscImageCreator command line.
    pub fn parse(line: &str) -> Result<Self, ParamError> {
        let tokens = tokenize(line)?;
        let (first, rest) = tokens.split_first().ok_or(ParamError::Empty)?;
        let command =
            Command::from_token(first).ok_or_else(|| ParamError::UnknownCommand(first.clone()))?;

        let signature = command.signature();
        let mut params = Parameters::new(command);
        let mut cursor = Cursor {
            tokens: rest,
            pos: 0,
        };

        if signature.drive {
            let token = cursor.positional(command, "drive")?;
            let drive =
                normalize_drive(token).ok_or_else(|| ParamError::InvalidDrive(token.to_string()))?;
            params.drive = Some(drive);
        }
        if signature.filename {
            let filename = cursor.positional(command, "filename")?;
            if filename.trim().is_empty() {
                return Err(ParamError::missing(command, "filename"));
            }
            params.filename = Some(filename.to_string());
        }
        if let Some(range) = signature.speed {
            let token = cursor.positional(command, "drive speed")?;
            params.speed = Some(parse_bounded("drive speed", token, range)?);
        }
        if signature.lba_range {
            let start = cursor.positional(command, "start LBA")?;
            let start = parse_bounded("start LBA", start, 0..=i32::MAX)?;
            let end = cursor.positional(command, "end LBA")?;
            let end = parse_bounded("end LBA", end, 0..=i32::MAX)?;
            params.lba_range = Some((start, end));
        }

        while let Some(token) = cursor.advance() {
            let Some(flag) = Flag::from_token(token) else {
                log::debug!("Skipping unrecognized token '{}'", token);
                continue;
            };
            if !command.supports(flag) {
                log::debug!("Skipping {} (not accepted by '{}')", flag, command);
                continue;
            }
            let values = read_flag_values(flag, &mut cursor)?;
            params.insert_enabled(flag, values);
        }

        Ok(params)
    }
}

impl FromStr for Parameters {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
