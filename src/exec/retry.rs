// src/exec/retry.rs

//! Retry-with-timeout command runner.
//!
//! Runs a command over and over until it exits 0 or the time budget is used
//! up. Attempts are strictly sequential; between two attempts the runner
//! pauses for a fixed interval (no backoff). The deadline is computed once,
//! when the run starts.
//!
//! Failure never escapes as an error: a command that cannot be started is
//! logged and counted as a failed attempt, and running out of time is
//! reported as `false`.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, error, info};

use super::backend::ProcessSpawner;
use super::command::CommandSpec;
use super::pause::pause;

/// Pause between two consecutive attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

pub struct RetryRunner<'a> {
    spawner: &'a dyn ProcessSpawner,
    interval: Duration,
}

impl<'a> RetryRunner<'a> {
    pub fn new(spawner: &'a dyn ProcessSpawner) -> Self {
        Self {
            spawner,
            interval: DEFAULT_RETRY_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run `spec` until it succeeds or `timeout` has elapsed.
    ///
    /// The first attempt is always made, even with a zero budget. After every
    /// failed attempt the runner pauses for the full interval and only then
    /// checks the deadline, so the total time spent can exceed `timeout` by
    /// up to one interval.
    ///
    /// A budget too large to represent as an instant has no deadline: the
    /// runner then keeps going until the command succeeds.
    pub async fn run(&self, spec: &CommandSpec, timeout: Duration) -> bool {
        let start = Instant::now();
        let deadline = start.checked_add(timeout);
        let mut attempt: u32 = 0;

        loop {
            attempt = attempt.saturating_add(1);

            match self.spawner.status(spec).await {
                Ok(0) => {
                    info!(
                        cmd = %spec,
                        attempt,
                        elapsed = ?start.elapsed(),
                        "command succeeded"
                    );
                    return true;
                }
                Ok(code) => {
                    debug!(cmd = %spec, attempt, exit_code = code, "attempt failed");
                }
                Err(err) => {
                    error!(
                        program = %spec.program,
                        attempt,
                        error = %err,
                        "error executing command"
                    );
                }
            }

            pause(self.interval).await;

            if deadline.is_some_and(|d| Instant::now() > d) {
                break;
            }
        }

        error!(attempts = attempt, "{}", timeout_message(&spec.program, timeout));
        false
    }
}

/// Convenience wrapper using the default one-second interval.
pub async fn run_with_retry(
    spawner: &dyn ProcessSpawner,
    spec: &CommandSpec,
    timeout: Duration,
) -> bool {
    RetryRunner::new(spawner).run(spec, timeout).await
}

fn timeout_message(program: &str, timeout: Duration) -> String {
    format!(
        "Command \"{program}\" did not complete successfully within the specified timeout ({}s).",
        timeout.as_secs_f64()
    )
}
