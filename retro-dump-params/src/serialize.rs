//! Turning a parameter set back into a command line.

use crate::error::ParamError;
use crate::parameters::{Parameters, normalize_drive, validate_flag_values};
use crate::parse::check_bounded;

impl Parameters {
    /// Arguments for spawning DiscImageCreator directly (no quoting).
    ///
    /// The first element is the command token.
    pub fn to_tokens(&self) -> Result<Vec<String>, ParamError> {
        self.emit(false)
    }

    /// Render the full command line. The filename is always quoted and
    /// flags follow in canonical order.
    pub fn to_command_line(&self) -> Result<String, ParamError> {
        Ok(self.emit(true)?.join(" "))
    }

    fn emit(&self, quote_filename: bool) -> Result<Vec<String>, ParamError> {
        let command = self.command();
        let signature = command.signature();
        let mut out = vec![command.token().to_string()];

        if signature.drive {
            let raw = self
                .drive
                .as_deref()
                .ok_or(ParamError::missing(command, "drive"))?;
            let drive =
                normalize_drive(raw).ok_or_else(|| ParamError::InvalidDrive(raw.to_string()))?;
            out.push(drive);
        }

        if signature.filename {
            let filename = self
                .filename
                .as_deref()
                .filter(|f| !f.trim().is_empty())
                .ok_or(ParamError::missing(command, "filename"))?;
            if filename.contains('"') {
                return Err(ParamError::InvalidFilename(filename.to_string()));
            }
            if quote_filename {
                out.push(format!("\"{}\"", filename));
            } else {
                out.push(filename.to_string());
            }
        }

        if let Some(range) = signature.speed {
            let speed = self.speed.ok_or(ParamError::missing(command, "drive speed"))?;
            out.push(check_bounded("drive speed", speed, range)?.to_string());
        }

        if signature.lba_range {
            let (start, end) = self
                .lba_range
                .ok_or(ParamError::missing(command, "start LBA"))?;
            out.push(check_bounded("start LBA", start, 0..=i32::MAX)?.to_string());
            out.push(check_bounded("end LBA", end, 0..=i32::MAX)?.to_string());
        }

        for flag in self.enabled_flags() {
            if !command.supports(flag) {
                return Err(ParamError::UnsupportedFlag { command, flag });
            }
            let values = self.values(flag);
            validate_flag_values(flag, values)?;
            out.push(flag.token().to_string());
            out.extend(values.iter().map(ToString::to_string));
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "tests/serialize_tests.rs"]
mod tests;
