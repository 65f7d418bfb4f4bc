// src/config/mod.rs

//! Input loading and validation.
//!
//! Responsibilities:
//! - Read named inputs from the environment or CLI overrides (`inputs.rs`).
//! - Define the raw and typed data model (`model.rs`).
//! - Parse booleans, numbers and shell-style word lists (`parse.rs`).
//! - Validate and resolve defaults (`validate.rs`, `loader.rs`).

pub mod inputs;
pub mod loader;
pub mod model;
pub mod parse;
pub mod validate;

pub use inputs::{EnvInputReader, InputReader, MapInputReader, input_env_name};
pub use loader::{load_and_validate, load_raw};
pub use model::{InputConfig, PreLocalConfig, RawInputs, SshConfig};
