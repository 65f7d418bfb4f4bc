// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] defines [`CommandSpec`], the program + arguments pair.
//! - [`backend`] provides the `ProcessSpawner` trait and the production
//!   `RealSpawner`, which tests replace with a scripted fake.
//! - [`checked`] runs commands with the strict one-shot contract (non-zero
//!   exit is an error), awaited or in the background.
//! - [`retry`] repeats a command until it succeeds or a time budget runs out.
//! - [`pause`] is the sleep used between retries and for `pre-sleep`.

pub mod backend;
pub mod checked;
pub mod command;
pub mod pause;
pub mod retry;

pub use backend::{ProcessSpawner, RealSpawner, SpawnFuture};
pub use checked::{run_checked, spawn_checked};
pub use command::CommandSpec;
pub use pause::pause;
pub use retry::{run_with_retry, RetryRunner, DEFAULT_RETRY_INTERVAL};
