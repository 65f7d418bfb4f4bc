// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("failed to start '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run the task:\n    cmd: {program}\n    args: {args:?}\n    exit-code: {code}")]
    NonZeroExit {
        program: String,
        args: Vec<String>,
        code: i32,
    },

    #[error("Failed to connect to ssh within {timeout}s, ssh_bin: {ssh_bin}")]
    ConnectTimeout { ssh_bin: String, timeout: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ActionError {
    /// Process exit code for this error.
    ///
    /// A failed child forwards its own code when it fits in a process exit
    /// status; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ActionError::NonZeroExit { code, .. } if (1..=255).contains(code) => *code,
            _ => 1,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ActionError>;
