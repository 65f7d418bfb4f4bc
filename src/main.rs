// src/main.rs

use std::process::ExitCode;

use ssh_action::config::model::input_names;
use ssh_action::config::{EnvInputReader, InputReader};
use ssh_action::errors::Result;
use ssh_action::{cli, logging, run};

// Return rather than `process::exit`: dropping the runtime kills a
// background pre-local-cmd that is still running.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ssh-action error: {err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

async fn run_main() -> Result<()> {
    let args = cli::parse();
    let reader = EnvInputReader::with_overrides(args.inputs.clone());
    logging::init_logging(args.log_level, &reader.get(input_names::LOG_LEVEL))?;
    run(args, &reader).await
}
