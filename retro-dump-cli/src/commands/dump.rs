use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use tokio::sync::watch;

use retro_dump_core::SubmissionInfo;
use retro_dump_lib::{
    DicRunner, DumpOutputs, ExtractError, Options, extract_submission, load_seed,
    missing_outputs, write_submission,
};
use retro_dump_params::Parameters;
use retro_dump_scraper::{Credentials, Reconciliation, RedumpClient, reconcile};

use crate::CliError;
use crate::cli_types::{DiscArgs, SubmissionArgs};

/// Arguments of `retro-dump dump`.
pub(crate) struct DumpRequest {
    pub disc: DiscArgs,
    pub drive: Option<String>,
    pub output: Option<PathBuf>,
    pub speed: Option<i32>,
    pub command: Option<String>,
    pub dry_run: bool,
    pub submission: SubmissionArgs,
}

fn build_parameters(req: &DumpRequest, options: &Options) -> Result<Parameters, CliError> {
    if let Some(line) = &req.command {
        return Ok(Parameters::parse(line)?);
    }

    let drive = req
        .drive
        .as_deref()
        .ok_or_else(|| CliError::other("A drive is required (--drive) unless --command is given"))?;
    let output = req.output.as_deref().ok_or_else(|| {
        CliError::other("An output path is required (--output) unless --command is given")
    })?;
    let speed = req.speed.unwrap_or_else(|| options.speed_for(req.disc.media));

    Ok(Parameters::with_defaults(
        req.disc.system,
        req.disc.media,
        drive,
        output.to_string_lossy(),
        speed,
        &options.dump,
    )?)
}

/// Run DiscImageCreator, then extract and write the submission.
pub(crate) fn run_dump(req: DumpRequest, quiet: bool) -> Result<(), CliError> {
    let options = Options::load()?;
    let params = build_parameters(&req, &options)?;
    let line = params.to_command_line()?;

    if req.dry_run {
        log::info!("{} {}", options.dic_path.display(), line);
        return Ok(());
    }

    let image = params
        .filename
        .as_deref()
        .map(PathBuf::from)
        .ok_or_else(|| CliError::other(format!("'{}' does not write an image", params.command())))?;
    if let Some(parent) = image.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let rt = crate::runtime()?;
    let runner = DicRunner::new(&options.dic_path);
    let (cancel_tx, cancel_rx) = watch::channel(false);

    let exit = rt.block_on(async {
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupted, stopping DiscImageCreator...");
                let _ = cancel_tx.send(true);
            }
        });

        let pb = crate::spinner::spinner(quiet, "Dumping...");
        let result = runner.run(&params, cancel_rx).await;
        pb.finish_and_clear();
        result
    })?;

    match exit {
        Some(0) => log::info!("DiscImageCreator finished"),
        Some(code) => log::warn!("DiscImageCreator exited with code {}", code),
        None => log::warn!("DiscImageCreator was terminated by a signal"),
    }

    finish_submission(&rt, &req.disc, &image, &req.submission, &options, quiet)
}

/// Extract and write the submission for an existing dump.
pub(crate) fn run_check(
    disc: &DiscArgs,
    image: &Path,
    submission: &SubmissionArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let options = Options::load()?;
    let rt = crate::runtime()?;
    finish_submission(&rt, disc, image, submission, &options, quiet)
}

fn finish_submission(
    rt: &tokio::runtime::Runtime,
    disc: &DiscArgs,
    image: &Path,
    args: &SubmissionArgs,
    options: &Options,
    quiet: bool,
) -> Result<(), CliError> {
    let outputs = DumpOutputs::new(image);
    let missing = missing_outputs(&outputs, disc.system, disc.media);
    if !missing.is_empty() {
        log::error!("Dump is incomplete, {} file(s) missing:", missing.len());
        for path in &missing {
            log::error!(
                "  {}",
                path.display().if_supports_color(Stderr, |t| t.red())
            );
        }
        return Err(ExtractError::MissingOutputs(missing).into());
    }

    let mut info = extract_submission(image, disc.system, disc.media, None)?;

    let use_redump = (args.redump || options.redump.enabled) && !args.no_redump;
    if use_redump {
        lookup_redump(rt, &mut info, quiet);
    }

    if let Some(seed_path) = &args.seed {
        let seed = load_seed(seed_path)?;
        info.inject_seed(&seed);
        log::debug!("Applied seed {}", seed_path.display());
    }

    let written = write_submission(&info, &outputs, &options.output)?;
    log::info!(
        "{} Submission written:",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
    );
    for path in &written {
        log::info!(
            "  {}",
            path.display().if_supports_color(Stderr, |t| t.cyan())
        );
    }

    Ok(())
}

fn lookup_redump(rt: &tokio::runtime::Runtime, info: &mut SubmissionInfo, quiet: bool) {
    let creds = Credentials::load_optional();
    if creds.is_none() {
        log::warn!("No redump.org credentials. Run 'retro-dump credentials setup' to add them.");
    }

    let result = rt.block_on(async {
        let pb = crate::spinner::spinner(quiet, "Searching redump.org...");
        let result = match RedumpClient::new() {
            Ok(mut client) => Ok(reconcile(&mut client, creds.as_ref(), info).await),
            Err(e) => Err(e),
        };
        pb.finish_and_clear();
        result
    });

    match result {
        Ok(Reconciliation::Applied {
            fully_matched: Some(id),
            ..
        }) => log::info!(
            "{} Matched redump.org disc {}",
            "\u{2714}".if_supports_color(Stderr, |t| t.green()),
            id.if_supports_color(Stderr, |t| t.bold()),
        ),
        Ok(Reconciliation::Applied {
            fully_matched: None,
            partially_matched,
        }) if partially_matched.is_empty() => log::info!("No matching discs on redump.org"),
        Ok(Reconciliation::Applied {
            partially_matched, ..
        }) => log::info!(
            "Partial redump.org matches: {}",
            partially_matched
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Ok(Reconciliation::NotApplied) => log::warn!("redump.org lookup was not applied"),
        Err(e) => log::warn!("redump.org lookup failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retro_dump_core::{MediaType, System};
    use retro_dump_params::Command;

    fn request(command: Option<&str>, drive: Option<&str>) -> DumpRequest {
        DumpRequest {
            disc: DiscArgs {
                system: System::Ps1,
                media: MediaType::CdRom,
            },
            drive: drive.map(str::to_string),
            output: Some(PathBuf::from("out/game.bin")),
            speed: None,
            command: command.map(str::to_string),
            dry_run: true,
            submission: SubmissionArgs {
                seed: None,
                redump: false,
                no_redump: false,
            },
        }
    }

    #[test]
    fn test_defaults_use_configured_speed() {
        let options = Options::default();
        let params = build_parameters(&request(None, Some("D:")), &options).unwrap();
        assert_eq!(params.command(), Command::CompactDisc);
        assert_eq!(params.speed, Some(options.speed_for(MediaType::CdRom)));
        assert_eq!(params.filename.as_deref(), Some("out/game.bin"));
    }

    #[test]
    fn test_explicit_command_line_wins() {
        let req = request(Some(r#"dvd E "disc.iso" 4"#), None);
        let params = build_parameters(&req, &Options::default()).unwrap();
        assert_eq!(params.command(), Command::Dvd);
        assert_eq!(params.speed, Some(4));
    }

    #[test]
    fn test_missing_drive_is_an_error() {
        assert!(build_parameters(&request(None, None), &Options::default()).is_err());
    }
}
