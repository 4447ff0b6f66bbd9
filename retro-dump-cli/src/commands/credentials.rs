use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use retro_dump_scraper::{CredentialSource, Credentials, RedumpClient};

use crate::CliError;

fn mask_value(s: &str) -> String {
    match s.char_indices().nth(2) {
        Some((idx, _)) => format!("{}****", &s[..idx]),
        None => "****".to_string(),
    }
}

/// Show current credentials and their sources.
pub(crate) fn run_credentials_show() -> Result<(), CliError> {
    let path = retro_dump_scraper::config_path();
    let sources = retro_dump_scraper::credential_sources();

    log::info!(
        "{}",
        "redump.org Credentials".if_supports_color(Stderr, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stderr, |t| t.cyan()),
                "(exists)".if_supports_color(Stderr, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stderr, |t| t.cyan()),
                "(not found)".if_supports_color(Stderr, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stderr, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    // Credentials::load() fails if either field is missing, so resolve per field
    let creds = Credentials::load().ok();

    let get_value = |source: &CredentialSource,
                     from_creds: Option<String>,
                     is_secret: bool|
     -> Option<String> {
        let value = match source {
            CredentialSource::Missing => return None,
            CredentialSource::EnvVar(var) => std::env::var(var).ok()?,
            CredentialSource::ConfigFile => from_creds?,
        };
        Some(if is_secret { mask_value(&value) } else { value })
    };

    let fields = [
        (
            "username",
            &sources.username,
            get_value(
                &sources.username,
                creds.as_ref().map(|c| c.username.clone()),
                false,
            ),
        ),
        (
            "password",
            &sources.password,
            get_value(
                &sources.password,
                creds.as_ref().map(|c| c.password.clone()),
                true,
            ),
        ),
    ];

    for (name, source, value) in &fields {
        let source_str = format!("({})", source);
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stderr, |t| t.cyan()),
            match value {
                Some(v) => v.clone(),
                None => "not set".if_supports_color(Stderr, |t| t.yellow()).to_string(),
            },
            source_str.if_supports_color(Stderr, |t| t.dimmed()),
        );
    }

    Ok(())
}

fn read_line(prompt: &str, default: Option<&str>) -> Result<String, CliError> {
    loop {
        match default {
            Some(def) => print!("  {} [{}]: ", prompt, def),
            None => print!("  {}: ", prompt),
        }
        std::io::stdout().flush()?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            return Err(CliError::other("Input closed before setup finished"));
        }
        let trimmed = input.trim();

        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        if let Some(def) = default {
            return Ok(def.to_string());
        }
        log::warn!("This field is required.");
    }
}

/// Interactively set up credentials.
pub(crate) fn run_credentials_setup() -> Result<(), CliError> {
    log::info!(
        "{}",
        "redump.org Credential Setup".if_supports_color(Stderr, |t| t.bold()),
    );
    crate::log_blank();

    let existing = Credentials::load().ok();

    let username = read_line("username", existing.as_ref().map(|c| c.username.as_str()))?;
    let password = read_line(
        "password",
        existing.as_ref().map(|c| c.password.as_str()),
    )?;

    let path = retro_dump_scraper::save_to_file(&Credentials::new(username, password))
        .map_err(|e| CliError::config(format!("Failed to save credentials: {}", e)))?;

    crate::log_blank();
    log::info!(
        "{} Credentials saved to {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        path.display().if_supports_color(Stderr, |t| t.cyan()),
    );

    Ok(())
}

/// Test credentials by logging in to redump.org.
pub(crate) fn run_credentials_test(quiet: bool) -> Result<(), CliError> {
    let creds = match Credentials::load() {
        Ok(c) => c,
        Err(e) => {
            log::warn!(
                "{} Failed to load credentials: {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                e,
            );
            log::warn!("");
            log::warn!("Run 'retro-dump credentials setup' to configure credentials.");
            return Ok(());
        }
    };

    log::info!("Logging in to redump.org as {}...", creds.username);

    let rt = crate::runtime()?;
    rt.block_on(async {
        let pb = crate::spinner::spinner(quiet, "Connecting...");
        let result = match RedumpClient::new() {
            Ok(mut client) => client.login(&creds).await,
            Err(e) => Err(e),
        };
        pb.finish_and_clear();

        match result {
            Ok(true) => log::info!(
                "{} Credentials are valid!",
                "\u{2714}".if_supports_color(Stderr, |t| t.green()),
            ),
            Ok(false) => log::warn!(
                "{} redump.org rejected the username or password",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            ),
            Err(e) => log::warn!(
                "{} Credential validation failed: {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                e,
            ),
        }
    });

    Ok(())
}

/// Print the credentials file path.
pub(crate) fn run_credentials_path() -> Result<(), CliError> {
    match retro_dump_scraper::config_path() {
        Some(path) => log::info!("{}", path.display()),
        None => {
            return Err(CliError::config("Could not determine config directory"));
        }
    }

    Ok(())
}
