// src/action/pre_local.rs

//! Local command run before connecting (`pre-local-cmd`).
//!
//! In async mode the command keeps running while the ssh stages execute,
//! typically to boot the machine that `pre-timeout` then waits for.

use anyhow::anyhow;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::PreLocalConfig;
use crate::errors::Result;
use crate::exec::{run_checked, spawn_checked};
use crate::outputs::output_names::PRE_LOCAL_CMD_SUCCESS;

use super::{settle_stage, ActionContext};

const STAGE: &str = "pre-local-cmd";

/// Handle to a pre-local command running in the background.
///
/// The task resolves to the already-settled stage result: `Err` only when the
/// command failed and failure is not allowed.
#[derive(Debug)]
pub struct BackgroundCommand {
    handle: Option<JoinHandle<Result<()>>>,
}

impl BackgroundCommand {
    fn new(handle: JoinHandle<Result<()>>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Return the stage result if the command has already exited; otherwise
    /// `Ok(())` without waiting.
    pub async fn check(&mut self) -> Result<()> {
        if !self.is_finished() {
            return Ok(());
        }
        self.wait().await
    }

    /// Stop supervising the command. Its task is cancelled, which kills the
    /// child process once the runtime drops it.
    pub fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("aborting background {STAGE}");
            handle.abort();
        }
    }

    /// Wait for the command to exit and return the stage result.
    ///
    /// Later calls return `Ok(())`.
    pub async fn wait(&mut self) -> Result<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(anyhow!("{STAGE} task failed: {join_err}").into()),
        }
    }
}

/// Run the configured pre-local command.
///
/// Returns the background handle in async mode, `None` when the command ran
/// to completion here or when none is configured.
pub async fn run_pre_local_cmd(
    ctx: &ActionContext,
    cfg: &PreLocalConfig,
) -> Result<Option<BackgroundCommand>> {
    let Some(cmd) = cfg.cmd.clone() else {
        debug!("no pre-local-cmd configured");
        return Ok(None);
    };

    info!(cmd = %cmd, run_async = cfg.run_async, "running pre-local-cmd");

    if cfg.run_async {
        let outputs = ctx.outputs.clone();
        let allow_failure = cfg.allow_failure;
        let handle = spawn_checked(ctx.spawner.clone(), cmd, move |result| {
            settle_stage(&outputs, PRE_LOCAL_CMD_SUCCESS, STAGE, allow_failure, result)
        });
        return Ok(Some(BackgroundCommand::new(handle)));
    }

    let result = run_checked(ctx.spawner.as_ref(), &cmd).await;
    settle_stage(
        &ctx.outputs,
        PRE_LOCAL_CMD_SUCCESS,
        STAGE,
        cfg.allow_failure,
        result,
    )?;
    Ok(None)
}
