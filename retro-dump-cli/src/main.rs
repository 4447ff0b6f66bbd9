//! retro-dump CLI
//!
//! Command-line front end for dumping discs with DiscImageCreator and
//! preparing redump.org submissions.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, CredentialsAction, ParamsAction};
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Create the tokio runtime a command runs its async work on.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Params { action } => match action {
            ParamsAction::Build {
                disc,
                drive,
                filename,
                speed,
            } => commands::params::run_params_build(&disc, &drive, &filename, speed),
            ParamsAction::Validate { line } => commands::params::run_params_validate(&line),
        },
        Commands::Dump {
            disc,
            drive,
            output,
            speed,
            command,
            dry_run,
            submission,
        } => commands::dump::run_dump(
            commands::dump::DumpRequest {
                disc,
                drive,
                output,
                speed,
                command,
                dry_run,
                submission,
            },
            quiet,
        ),
        Commands::Check {
            disc,
            image,
            submission,
        } => commands::dump::run_check(&disc, &image, &submission, quiet),
        Commands::List { what } => {
            commands::list::run_list(what);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Set { key, value } => commands::config::run_config_set(&key, &value),
            ConfigAction::Path => commands::config::run_config_path(),
        },
        Commands::Credentials { action } => match action {
            CredentialsAction::Show => commands::credentials::run_credentials_show(),
            CredentialsAction::Setup => commands::credentials::run_credentials_setup(),
            CredentialsAction::Test => commands::credentials::run_credentials_test(quiet),
            CredentialsAction::Path => commands::credentials::run_credentials_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
