// src/outputs.rs

//! Step outputs reported back to the CI runner.
//!
//! The runner passes a file path in `GITHUB_OUTPUT`; each output is appended
//! to it as a single `name=value` line. Every output this action sets is a
//! boolean, so values spanning several lines are refused.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::info;

use crate::errors::Result;

pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

pub mod output_names {
    pub const PRE_LOCAL_CMD_SUCCESS: &str = "pre-local-cmd-success";
    pub const MAIN_RUN_SUCCESS: &str = "main-run-success";
    pub const POST_RUN_SUCCESS: &str = "post-run-success";
}

#[derive(Debug, Clone, Default)]
pub struct ActionOutputs {
    path: Option<PathBuf>,
}

impl ActionOutputs {
    /// Outputs go to the file named by `GITHUB_OUTPUT`, if set.
    pub fn from_env() -> Self {
        let path = std::env::var_os(OUTPUT_FILE_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self { path }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Outputs are logged only.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        info!(output = name, value, "set output");

        if value.contains(['\n', '\r']) {
            return Err(anyhow!("output '{name}' must be a single line").into());
        }

        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{name}={value}")?;
        Ok(())
    }

    pub fn set_bool(&self, name: &str, value: bool) -> Result<()> {
        self.set(name, if value { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_line_per_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        let outputs = ActionOutputs::to_file(&path);

        outputs.set_bool("main-run-success", true).unwrap();
        outputs.set_bool("post-run-success", false).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "main-run-success=true\npost-run-success=false\n");
    }

    #[test]
    fn multiline_values_are_refused_without_touching_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        let outputs = ActionOutputs::to_file(&path);

        outputs.set_bool("main-run-success", true).unwrap();
        assert!(outputs.set("log", "a\nb").is_err());
        assert!(outputs.set("log", "a\r\nb").is_err());

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "main-run-success=true\n");
    }

    #[test]
    fn disabled_outputs_do_nothing() {
        let outputs = ActionOutputs::disabled();
        assert!(outputs.path().is_none());
        outputs.set("main-run-success", "false").unwrap();
    }
}
