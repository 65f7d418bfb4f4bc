// src/lib.rs

pub mod action;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod outputs;

use std::sync::Arc;

use tracing::debug;

use crate::action::{run_action, ActionContext};
use crate::cli::CliArgs;
use crate::config::{load_and_validate, InputConfig, InputReader};
use crate::errors::Result;
use crate::exec::RealSpawner;
use crate::outputs::ActionOutputs;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - input loading and validation
/// - the real process spawner
/// - `GITHUB_OUTPUT` reporting
/// - the action stages
///
/// Exiting the process is left to the caller.
pub async fn run(args: CliArgs, reader: &dyn InputReader) -> Result<()> {
    let cfg = load_and_validate(reader)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let ctx = ActionContext::new(Arc::new(RealSpawner), ActionOutputs::from_env());
    run_action(&ctx, &cfg).await
}

/// Simple dry-run output: resolved inputs and the commands that would run.
fn print_dry_run(cfg: &InputConfig) {
    let pre = &cfg.pre_local;
    let ssh = &cfg.ssh;

    println!("ssh-action dry-run");
    if let Some(ref dir) = pre.workdir {
        println!("  workdir: {}", dir.display());
    }
    if let Some(ref cmd) = pre.cmd {
        println!("  pre-local-cmd: {cmd}");
        println!("      async: {}", pre.run_async);
        println!("      allow_failure: {}", pre.allow_failure);
    }
    println!();

    println!("ssh:");
    if ssh.pre_sleep > 0 {
        println!("  pre-sleep: {}s", ssh.pre_sleep);
    }
    if let Some(cmd) = ssh.pre_command() {
        println!("  connect check (retry for {}s): {cmd}", ssh.pre_timeout);
    }
    println!("  main: {}", ssh.main_command());
    println!("      allow_failure: {}", ssh.allow_run_failure);
    if let Some(cmd) = ssh.post_command() {
        println!("  post: {cmd}");
        println!("      allow_failure: {}", ssh.allow_post_run_failure);
    }

    debug!("dry-run complete (no execution)");
}
