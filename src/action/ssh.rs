// src/action/ssh.rs

//! The ssh stages: optional pre-sleep, connection check with retries, the
//! main remote command and the optional post-run command.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::SshConfig;
use crate::errors::{ActionError, Result};
use crate::exec::{pause, run_checked, RetryRunner};
use crate::outputs::output_names::{MAIN_RUN_SUCCESS, POST_RUN_SUCCESS};

use super::{settle_stage, ActionContext};

pub async fn ssh_connection(ctx: &ActionContext, cfg: &SshConfig) -> Result<()> {
    debug!(?cfg, "ssh_connection()");

    if cfg.pre_sleep > 0 {
        info!("sleep: {}s", cfg.pre_sleep);
        pause(Duration::from_secs(cfg.pre_sleep)).await;
    }

    if let Some(pre) = cfg.pre_command() {
        info!(pre_timeout = cfg.pre_timeout, cmd = %pre, "waiting for ssh to accept connections");

        let connected = RetryRunner::new(ctx.spawner.as_ref())
            .with_interval(ctx.retry_interval)
            .run(&pre, Duration::from_secs(cfg.pre_timeout))
            .await;

        if !connected {
            return Err(ActionError::ConnectTimeout {
                ssh_bin: cfg.ssh_bin.clone(),
                timeout: cfg.pre_timeout,
            });
        }
    }

    let main = cfg.main_command();
    let result = run_checked(ctx.spawner.as_ref(), &main).await;
    settle_stage(
        &ctx.outputs,
        MAIN_RUN_SUCCESS,
        "main-run",
        cfg.allow_run_failure,
        result,
    )?;

    if let Some(post) = cfg.post_command() {
        let result = run_checked(ctx.spawner.as_ref(), &post).await;
        settle_stage(
            &ctx.outputs,
            POST_RUN_SUCCESS,
            "post-run",
            cfg.allow_post_run_failure,
            result,
        )?;
    }

    Ok(())
}
