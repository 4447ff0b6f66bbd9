use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use retro_dump_lib::Options;
use retro_dump_params::{FlagState, Parameters};

use crate::CliError;
use crate::cli_types::DiscArgs;

/// Print the default command line for a disc.
pub(crate) fn run_params_build(
    disc: &DiscArgs,
    drive: &str,
    filename: &str,
    speed: Option<i32>,
) -> Result<(), CliError> {
    let options = Options::load()?;
    let speed = speed.unwrap_or_else(|| options.speed_for(disc.media));
    let params =
        Parameters::with_defaults(disc.system, disc.media, drive, filename, speed, &options.dump)?;

    log::info!("{}", params.to_command_line()?);
    Ok(())
}

/// Parse a command line and show what it means.
pub(crate) fn run_params_validate(line: &str) -> Result<(), CliError> {
    let params = Parameters::parse(line)?;
    let command = params.command();

    log::info!(
        "{} {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        params.to_command_line()?,
    );
    crate::log_blank();
    log::info!(
        "  {} {}",
        "Command:".if_supports_color(Stderr, |t| t.cyan()),
        command,
    );
    if let Some(drive) = &params.drive {
        log::info!(
            "  {} {}",
            "Drive:".if_supports_color(Stderr, |t| t.cyan()),
            drive
        );
    }
    if let Some(filename) = &params.filename {
        log::info!(
            "  {} {}",
            "Filename:".if_supports_color(Stderr, |t| t.cyan()),
            filename
        );
    }
    if let Some(speed) = params.speed {
        log::info!(
            "  {} {}",
            "Speed:".if_supports_color(Stderr, |t| t.cyan()),
            speed
        );
    }
    if let Some((start, end)) = params.lba_range {
        log::info!(
            "  {} {}-{}",
            "LBA range:".if_supports_color(Stderr, |t| t.cyan()),
            start,
            end
        );
    }

    for flag in command.supported_flags() {
        if params.state(*flag) != FlagState::On {
            continue;
        }
        let values: Vec<String> = params.values(*flag).iter().map(|v| v.to_string()).collect();
        log::info!(
            "  {} {}{}",
            flag.token().if_supports_color(Stderr, |t| t.bold()),
            flag.description(),
            if values.is_empty() {
                String::new()
            } else {
                format!(" [{}]", values.join(" "))
                    .if_supports_color(Stderr, |t| t.dimmed())
                    .to_string()
            },
        );
    }

    Ok(())
}
