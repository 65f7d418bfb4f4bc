// src/config/validate.rs

use std::path::PathBuf;

use crate::config::model::{
    InputConfig, PreLocalConfig, RawInputs, SshConfig, DEFAULT_HOST, DEFAULT_PRE_EXIT_CMD,
    DEFAULT_SSH_BIN, input_names as n,
};
use crate::config::parse::{
    non_empty, non_empty_or, parse_bool, parse_seconds, split_arg_lines, split_command,
    split_words,
};
use crate::errors::{ActionError, Result};

impl TryFrom<RawInputs> for InputConfig {
    type Error = ActionError;

    fn try_from(raw: RawInputs) -> std::result::Result<Self, Self::Error> {
        let pre_local = build_pre_local(&raw)?;
        let ssh = build_ssh(raw)?;
        validate_ssh(&ssh)?;
        Ok(InputConfig { pre_local, ssh })
    }
}

fn build_pre_local(raw: &RawInputs) -> Result<PreLocalConfig> {
    Ok(PreLocalConfig {
        workdir: non_empty(raw.pre_local_workdir.clone()).map(PathBuf::from),
        cmd: split_command(n::PRE_LOCAL_CMD, &raw.pre_local_cmd)?,
        allow_failure: parse_bool(
            n::ALLOW_PRE_LOCAL_CMD_FAILURE,
            &raw.allow_pre_local_cmd_failure,
            true,
        ),
        run_async: parse_bool(n::PRE_LOCAL_CMD_ASYNC, &raw.pre_local_cmd_async, true),
    })
}

fn build_ssh(raw: RawInputs) -> Result<SshConfig> {
    let args = split_arg_lines(n::ARGS, &raw.args)?;

    let pre_exit_cmd = split_words(
        n::PRE_EXIT_CMD,
        &non_empty_or(raw.pre_exit_cmd, DEFAULT_PRE_EXIT_CMD),
    )?;

    Ok(SshConfig {
        ssh_bin: non_empty_or(raw.ssh_bin, DEFAULT_SSH_BIN),
        args,
        host: non_empty_or(raw.host, DEFAULT_HOST),
        pre_exit_cmd,
        pre_sleep: parse_seconds(n::PRE_SLEEP, &raw.pre_sleep)?,
        pre_timeout: parse_seconds(n::PRE_TIMEOUT, &raw.pre_timeout)?,
        run: non_empty(raw.run),
        allow_run_failure: parse_bool(n::ALLOW_RUN_FAILURE, &raw.allow_run_failure, false),
        post_run: non_empty(raw.post_run),
        allow_post_run_failure: parse_bool(
            n::ALLOW_POST_RUN_FAILURE,
            &raw.allow_post_run_failure,
            true,
        ),
    })
}

fn validate_ssh(cfg: &SshConfig) -> Result<()> {
    // ssh would parse it as an option and then use the next word as the host.
    if cfg.host.starts_with('-') {
        return Err(ActionError::InputError(format!(
            "input '{}' must not start with '-' (got '{}')",
            n::HOST,
            cfg.host
        )));
    }
    if cfg.pre_exit_cmd.is_empty() {
        return Err(ActionError::InputError(format!(
            "input '{}' must contain at least one word",
            n::PRE_EXIT_CMD
        )));
    }
    Ok(())
}
