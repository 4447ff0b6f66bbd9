//! Running DiscImageCreator.
//!
//! The child is awaited asynchronously and can be cancelled through a
//! `watch` channel. The exit code is only reported; whether the dump worked
//! is decided by checking its outputs.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use retro_dump_params::Parameters;
use tokio::sync::watch;

use crate::error::ExtractError;

/// Launches DiscImageCreator with a parameter set.
#[derive(Debug, Clone)]
pub struct DicRunner {
    program: PathBuf,
}

impl DicRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run one dump. Returns the exit code, `None` if the process was
    /// terminated by a signal.
    pub async fn run(
        &self,
        params: &Parameters,
        cancel: watch::Receiver<bool>,
    ) -> Result<Option<i32>, ExtractError> {
        let args = params.to_tokens()?;
        log::info!(
            "Running {} {}",
            self.program.display(),
            params.to_command_line()?
        );
        run_process(&self.program, &args, cancel).await
    }
}

/// Spawn `program` and wait for it, killing it if `cancel` turns true.
pub async fn run_process(
    program: &Path,
    args: &[String],
    mut cancel: watch::Receiver<bool>,
) -> Result<Option<i32>, ExtractError> {
    let mut child = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ExtractError::Spawn {
            program: program.display().to_string(),
            source,
        })?;
    log::debug!("Started {} (pid {:?})", program.display(), child.id());

    tokio::select! {
        status = child.wait() => {
            let status = status?;
            log::info!("{} exited with {}", program.display(), status);
            Ok(status.code())
        }
        _ = cancelled(&mut cancel) => {
            // The child may already be gone.
            if let Err(e) = child.kill().await {
                log::debug!("Kill after cancel failed: {}", e);
            }
            log::warn!("{} cancelled", program.display());
            Err(ExtractError::Cancelled)
        }
    }
}

/// Resolves once cancellation is requested. Never resolves if the sender
/// is dropped without cancelling.
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    if cancel.wait_for(|c| *c).await.is_err() {
        std::future::pending::<()>().await;
    }
}
