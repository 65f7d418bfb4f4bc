// src/config/loader.rs

use tracing::debug;

use crate::config::inputs::InputReader;
use crate::config::model::{InputConfig, RawInputs, input_names as n};
use crate::errors::Result;

/// Read every input the action knows about, without interpreting it.
pub fn load_raw(reader: &dyn InputReader) -> RawInputs {
    RawInputs {
        pre_local_workdir: reader.get(n::PRE_LOCAL_WORKDIR),
        pre_local_cmd: reader.get(n::PRE_LOCAL_CMD),
        allow_pre_local_cmd_failure: reader.get(n::ALLOW_PRE_LOCAL_CMD_FAILURE),
        pre_local_cmd_async: reader.get(n::PRE_LOCAL_CMD_ASYNC),
        ssh_bin: reader.get(n::SSH_BIN),
        args: reader.get(n::ARGS),
        host: reader.get(n::HOST),
        pre_exit_cmd: reader.get(n::PRE_EXIT_CMD),
        pre_sleep: reader.get(n::PRE_SLEEP),
        pre_timeout: reader.get(n::PRE_TIMEOUT),
        run: reader.get(n::RUN),
        allow_run_failure: reader.get(n::ALLOW_RUN_FAILURE),
        post_run: reader.get(n::POST_RUN),
        allow_post_run_failure: reader.get(n::ALLOW_POST_RUN_FAILURE),
    }
}

/// Read all inputs and turn them into a validated [`InputConfig`].
///
/// This is the entry point the rest of the application uses:
///
/// - applies defaults (`ssh`, `127.0.0.1`, `exit`, boolean defaults),
/// - splits `args`, `pre-exit-cmd` and `pre-local-cmd` shell-style,
/// - rejects malformed numbers and unbalanced quotes.
pub fn load_and_validate(reader: &dyn InputReader) -> Result<InputConfig> {
    let raw = load_raw(reader);
    debug!(?raw, "raw inputs");
    let config = InputConfig::try_from(raw)?;
    debug!(?config, "resolved inputs");
    Ok(config)
}
