// src/exec/backend.rs

//! Pluggable process spawner abstraction.
//!
//! Everything that runs an external program goes through a
//! [`ProcessSpawner`]. Production code uses [`RealSpawner`], which launches
//! OS processes with `tokio::process::Command`; tests provide their own
//! implementation that replays scripted exit codes without spawning anything.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::command::CommandSpec;

/// Future returned by [`ProcessSpawner::status`].
pub type SpawnFuture<'a> = Pin<Box<dyn Future<Output = io::Result<i32>> + Send + 'a>>;

/// Trait abstracting how a single command is run to completion.
pub trait ProcessSpawner: Send + Sync {
    /// Run `spec` and wait for it to terminate.
    ///
    /// - `Err(_)`: the process could not be started at all.
    /// - `Ok(code)`: the exit code, or `-1` if the child was killed by a
    ///   signal and has none.
    ///
    /// The child inherits the caller's stdin/stdout/stderr; nothing is
    /// captured.
    fn status<'a>(&'a self, spec: &'a CommandSpec) -> SpawnFuture<'a>;
}

/// Spawner backed by real OS processes.
#[derive(Debug, Clone, Default)]
pub struct RealSpawner;

impl ProcessSpawner for RealSpawner {
    fn status<'a>(&'a self, spec: &'a CommandSpec) -> SpawnFuture<'a> {
        Box::pin(async move {
            debug!(program = %spec.program, args = ?spec.args, "spawning process");

            let status = Command::new(&spec.program)
                .args(&spec.args)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .kill_on_drop(true)
                .status()
                .await?;

            let code = status.code().unwrap_or(-1);
            debug!(program = %spec.program, exit_code = code, "process exited");
            Ok(code)
        })
    }
}
