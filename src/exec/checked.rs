// src/exec/checked.rs

//! One-shot command execution with the strict contract: a process that fails
//! to start or exits non-zero is an error.
//!
//! The retry runner in [`super::retry`] is the only caller allowed to turn
//! those failures into a plain boolean.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::errors::{ActionError, Result};

use super::backend::ProcessSpawner;
use super::command::CommandSpec;

/// Run `spec` to completion and fail unless it exits with status 0.
pub async fn run_checked(spawner: &dyn ProcessSpawner, spec: &CommandSpec) -> Result<()> {
    info!(cmd = %spec, "running command");

    let code = spawner
        .status(spec)
        .await
        .map_err(|source| ActionError::SpawnError {
            program: spec.program.clone(),
            source,
        })?;

    check_exit(spec, code)
}

/// Start `spec` in the background.
///
/// `on_close` is invoked exactly once, when the child terminates, with the
/// same result [`run_checked`] would have produced. Its return value is
/// handed back through the `JoinHandle`.
pub fn spawn_checked<F, R>(
    spawner: Arc<dyn ProcessSpawner>,
    spec: CommandSpec,
    on_close: F,
) -> JoinHandle<R>
where
    F: FnOnce(Result<()>) -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::spawn(async move {
        let result = run_checked(spawner.as_ref(), &spec).await;
        debug!(cmd = %spec, ok = result.is_ok(), "background command closed");
        on_close(result)
    })
}

fn check_exit(spec: &CommandSpec, code: i32) -> Result<()> {
    if code == 0 {
        return Ok(());
    }
    Err(ActionError::NonZeroExit {
        program: spec.program.clone(),
        args: spec.args.clone(),
        code,
    })
}
