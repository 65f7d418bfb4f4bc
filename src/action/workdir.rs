// src/action/workdir.rs

use std::path::Path;

use tracing::{debug, info};

use crate::errors::{ActionError, Result};

/// Switch the process working directory to `workdir`, if one is configured.
pub fn set_pre_local_workdir(workdir: Option<&Path>) -> Result<()> {
    let Some(dir) = workdir else {
        debug!("no pre-local-workdir configured");
        return Ok(());
    };

    let old = std::env::current_dir()?;
    info!("old local working directory: {}", old.display());

    std::env::set_current_dir(dir).map_err(|e| {
        ActionError::InputError(format!(
            "cannot change working directory to '{}': {e}",
            dir.display()
        ))
    })?;

    info!(
        "new local working directory: {}",
        std::env::current_dir()?.display()
    );
    Ok(())
}
