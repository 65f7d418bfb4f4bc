// src/action/mod.rs

//! The action itself: the ordered stages run for one CI step.
//!
//! 1. [`workdir`]: switch to `pre-local-workdir`.
//! 2. [`pre_local`]: run `pre-local-cmd`, possibly in the background.
//! 3. [`ssh`]: pre-sleep, connection check, main run, post-run.
//!
//! A stage failure is fatal (returned as `Err`) unless the matching
//! `allow-*-failure` input says otherwise. The caller decides what a fatal
//! error means for the process exit code.

pub mod pre_local;
pub mod ssh;
pub mod workdir;

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::InputConfig;
use crate::errors::Result;
use crate::exec::{ProcessSpawner, DEFAULT_RETRY_INTERVAL};
use crate::outputs::ActionOutputs;

pub use pre_local::{run_pre_local_cmd, BackgroundCommand};
pub use ssh::ssh_connection;
pub use workdir::set_pre_local_workdir;

/// Collaborators shared by all stages.
#[derive(Clone)]
pub struct ActionContext {
    pub spawner: Arc<dyn ProcessSpawner>,
    pub outputs: ActionOutputs,
    /// Pause between connection attempts during `pre-timeout`.
    pub retry_interval: Duration,
}

impl ActionContext {
    pub fn new(spawner: Arc<dyn ProcessSpawner>, outputs: ActionOutputs) -> Self {
        Self {
            spawner,
            outputs,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }

    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }
}

/// Run every stage in order.
pub async fn run_action(ctx: &ActionContext, cfg: &InputConfig) -> Result<()> {
    set_pre_local_workdir(cfg.pre_local.workdir.as_deref())?;

    let mut background = run_pre_local_cmd(ctx, &cfg.pre_local).await?;

    if let Some(bg) = background.as_mut() {
        bg.check().await?;
    }

    if let Err(e) = ssh_connection(ctx, &cfg.ssh).await {
        // A fatal ssh failure ends the action now; the background command
        // may never exit on its own.
        if let Some(mut bg) = background {
            bg.abort();
        }
        return Err(e);
    }

    if let Some(mut bg) = background {
        if !bg.is_finished() {
            info!("waiting for background pre-local-cmd to exit");
        }
        bg.wait().await?;
    }

    Ok(())
}

/// Record the outcome of a stage and decide whether it is fatal.
///
/// The `<output>` is always written before a fatal error is returned.
pub(crate) fn settle_stage(
    outputs: &ActionOutputs,
    output: &str,
    stage: &str,
    allow_failure: bool,
    result: Result<()>,
) -> Result<()> {
    if let Err(e) = outputs.set_bool(output, result.is_ok()) {
        warn!(output, error = %e, "failed to write output");
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if allow_failure => {
            error!(stage, allow_failure, "{stage}: {e}");
            Ok(())
        }
        Err(e) => {
            error!(stage, "{stage}: {e}");
            Err(e)
        }
    }
}
