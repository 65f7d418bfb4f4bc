// src/config/model.rs

use std::path::PathBuf;

use crate::exec::CommandSpec;

/// Names of the inputs the action reads.
pub mod input_names {
    pub const LOG_LEVEL: &str = "log-level";
    pub const PRE_LOCAL_WORKDIR: &str = "pre-local-workdir";
    pub const PRE_LOCAL_CMD: &str = "pre-local-cmd";
    pub const ALLOW_PRE_LOCAL_CMD_FAILURE: &str = "allow-pre-local-cmd-failure";
    pub const PRE_LOCAL_CMD_ASYNC: &str = "pre-local-cmd-async";
    pub const SSH_BIN: &str = "ssh-bin";
    pub const ARGS: &str = "args";
    pub const HOST: &str = "host";
    pub const PRE_EXIT_CMD: &str = "pre-exit-cmd";
    pub const PRE_SLEEP: &str = "pre-sleep";
    pub const PRE_TIMEOUT: &str = "pre-timeout";
    pub const RUN: &str = "run";
    pub const ALLOW_RUN_FAILURE: &str = "allow-run-failure";
    pub const POST_RUN: &str = "post-run";
    pub const ALLOW_POST_RUN_FAILURE: &str = "allow-post-run-failure";
}

pub const DEFAULT_SSH_BIN: &str = "ssh";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PRE_EXIT_CMD: &str = "exit";

/// Inputs exactly as read, before any parsing.
///
/// Every field is the trimmed input string; empty means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub pre_local_workdir: String,
    pub pre_local_cmd: String,
    pub allow_pre_local_cmd_failure: String,
    pub pre_local_cmd_async: String,
    pub ssh_bin: String,
    pub args: String,
    pub host: String,
    pub pre_exit_cmd: String,
    pub pre_sleep: String,
    pub pre_timeout: String,
    pub run: String,
    pub allow_run_failure: String,
    pub post_run: String,
    pub allow_post_run_failure: String,
}

/// Validated, typed inputs. Built from [`RawInputs`] via `TryFrom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub pre_local: PreLocalConfig,
    pub ssh: SshConfig,
}

/// Local preparation done before connecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreLocalConfig {
    /// Directory to switch to before anything else runs.
    pub workdir: Option<PathBuf>,
    /// Local command to run; `None` skips the stage.
    pub cmd: Option<CommandSpec>,
    /// Default `true`.
    pub allow_failure: bool,
    /// Run `cmd` in the background. Default `true`.
    pub run_async: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshConfig {
    pub ssh_bin: String,
    /// Extra arguments placed before the host.
    pub args: Vec<String>,
    pub host: String,
    /// Remote command used to check the connection during `pre_timeout`.
    pub pre_exit_cmd: Vec<String>,
    /// Seconds to wait before the first connection.
    pub pre_sleep: u64,
    /// Retry budget in seconds for the connection check; 0 disables it.
    pub pre_timeout: u64,
    /// Remote command for the main run; `None` opens a plain session.
    pub run: Option<String>,
    pub allow_run_failure: bool,
    pub post_run: Option<String>,
    pub allow_post_run_failure: bool,
}

impl SshConfig {
    /// `args… host`, shared by every ssh invocation.
    pub fn base_args(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.args.len() + 2);
        out.extend(self.args.iter().cloned());
        out.push(self.host.clone());
        out
    }

    /// Connection check: `ssh args… host pre-exit-cmd…`, only when a retry
    /// budget is configured.
    pub fn pre_command(&self) -> Option<CommandSpec> {
        if self.pre_timeout == 0 {
            return None;
        }
        let mut args = self.base_args();
        args.extend(self.pre_exit_cmd.iter().cloned());
        Some(CommandSpec::with_args(&self.ssh_bin, args))
    }

    /// `ssh args… host [run]`; `run` is passed as a single argument.
    pub fn main_command(&self) -> CommandSpec {
        let mut args = self.base_args();
        if let Some(run) = &self.run {
            args.push(run.clone());
        }
        CommandSpec::with_args(&self.ssh_bin, args)
    }

    /// `ssh args… host post-run`, when `post-run` is set.
    pub fn post_command(&self) -> Option<CommandSpec> {
        let post_run = self.post_run.as_ref()?;
        let mut args = self.base_args();
        args.push(post_run.clone());
        Some(CommandSpec::with_args(&self.ssh_bin, args))
    }
}
