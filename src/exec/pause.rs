// src/exec/pause.rs

use std::time::Duration;

use tracing::debug;

/// Suspend the calling flow for roughly `duration`.
///
/// Uses the Tokio timer, so with a paused test clock this returns as soon as
/// the clock has been auto-advanced.
pub async fn pause(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    debug!(?duration, "pausing");
    tokio::time::sleep(duration).await;
}
