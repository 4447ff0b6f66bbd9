use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use retro_dump_lib::{OPTION_KEYS, Options, options_path};

use crate::CliError;

/// Show every option with its current value.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = options_path();
    let options = Options::load()?;

    log::info!(
        "{}",
        "retro-dump Options".if_supports_color(Stderr, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Options file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        );
    } else {
        log::info!(
            "  Options file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stderr, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let width = OPTION_KEYS.iter().map(|k| k.key.len()).max().unwrap_or(0) + 1;
    for entry in OPTION_KEYS {
        let value = options.get(entry.key).unwrap_or_default();
        log::info!(
            "  {} {} {}",
            format!("{:<width$}", format!("{}:", entry.key)).if_supports_color(Stderr, |t| t.cyan()),
            value,
            format!("({})", entry.description).if_supports_color(Stderr, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Set one option and save the options file.
pub(crate) fn run_config_set(key: &str, value: &str) -> Result<(), CliError> {
    let mut options = Options::load()?;
    options.set(key, value)?;
    options.save()?;

    log::info!(
        "{} {} = {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        key.if_supports_color(Stderr, |t| t.cyan()),
        options.get(key).unwrap_or_default(),
    );
    Ok(())
}

/// Print the options file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", options_path().display());
    Ok(())
}
