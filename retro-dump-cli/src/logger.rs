//! Log output for the CLI.
//!
//! Everything user-facing goes through the `log` macros so `--quiet`,
//! `--verbose` and `--logfile` apply uniformly.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

/// Writes to stderr and, if set, to a log file with ANSI codes removed.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. Fails only if `logfile` cannot be created.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let file = logfile.map(File::create).transpose()?;

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("retro_dump", level_for(quiet, verbose))
        .parse_default_env()
        .target(Target::Pipe(Box::new(Tee { file })));

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Commands print through `log`, which writes to stderr.
    const COMMAND_SOURCES: &[(&str, &str)] = &[
        ("config.rs", include_str!("commands/config.rs")),
        ("credentials.rs", include_str!("commands/credentials.rs")),
        ("dump.rs", include_str!("commands/dump.rs")),
        ("list.rs", include_str!("commands/list.rs")),
        ("params.rs", include_str!("commands/params.rs")),
    ];

    #[test]
    fn test_command_colours_checked_against_stderr() {
        for (name, source) in COMMAND_SOURCES {
            assert!(
                !source.contains("Stream::Stdout") && !source.contains("color(Stdout"),
                "{} decides colour from stdout",
                name
            );
        }
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(false, true), LevelFilter::Debug);
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }
}
