// tests/inputs.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use ssh_action::cli::CliArgs;
use ssh_action::config::{input_env_name, EnvInputReader, InputReader};
use ssh_action::errors::ActionError;
use ssh_action::exec::CommandSpec;
use ssh_action_test_utils::builders::InputsBuilder;
use ssh_action_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn defaults_when_nothing_is_set() -> TestResult {
    let cfg = InputsBuilder::new().try_config()?;

    assert_eq!(cfg.pre_local.workdir, None);
    assert_eq!(cfg.pre_local.cmd, None);
    assert!(cfg.pre_local.allow_failure);
    assert!(cfg.pre_local.run_async);

    assert_eq!(cfg.ssh.ssh_bin, "ssh");
    assert!(cfg.ssh.args.is_empty());
    assert_eq!(cfg.ssh.host, "127.0.0.1");
    assert_eq!(cfg.ssh.pre_exit_cmd, vec!["exit"]);
    assert_eq!(cfg.ssh.pre_sleep, 0);
    assert_eq!(cfg.ssh.pre_timeout, 0);
    assert_eq!(cfg.ssh.run, None);
    assert!(!cfg.ssh.allow_run_failure);
    assert_eq!(cfg.ssh.post_run, None);
    assert!(cfg.ssh.allow_post_run_failure);

    assert_eq!(
        cfg.ssh.main_command(),
        CommandSpec::with_args("ssh", ["127.0.0.1"])
    );
    Ok(())
}

#[test]
fn every_input_is_picked_up() -> TestResult {
    let cfg = InputsBuilder::new()
        .input("pre-local-workdir", "/srv/checkout")
        .input("pre-local-cmd", "qemu-system-x86_64 -hda 'disk image.qcow2'")
        .input("allow-pre-local-cmd-failure", "off")
        .input("pre-local-cmd-async", "ok")
        .input("ssh-bin", "/usr/local/bin/ssh")
        .input("args", "-i ~/.ssh/ci\n\n#-v\n-o 'UserKnownHostsFile /dev/null'")
        .input("host", "root@vm")
        .input("pre-exit-cmd", "true && exit")
        .input("pre-sleep", "2")
        .input("pre-timeout", "120")
        .input("run", "cargo test --workspace")
        .input("allow-run-failure", "TRUE")
        .input("post-run", "poweroff")
        .input("allow-post-run-failure", "n")
        .try_config()?;

    assert_eq!(cfg.pre_local.workdir, Some(PathBuf::from("/srv/checkout")));
    assert_eq!(
        cfg.pre_local.cmd,
        Some(CommandSpec::with_args(
            "qemu-system-x86_64",
            ["-hda", "disk image.qcow2"]
        ))
    );
    assert!(!cfg.pre_local.allow_failure);
    assert!(cfg.pre_local.run_async);

    assert_eq!(cfg.ssh.ssh_bin, "/usr/local/bin/ssh");
    assert_eq!(
        cfg.ssh.args,
        vec!["-i", "~/.ssh/ci", "-o", "UserKnownHostsFile /dev/null"]
    );
    assert_eq!(cfg.ssh.host, "root@vm");
    assert_eq!(cfg.ssh.pre_exit_cmd, vec!["true", "&&", "exit"]);
    assert_eq!(cfg.ssh.pre_sleep, 2);
    assert_eq!(cfg.ssh.pre_timeout, 120);
    assert_eq!(cfg.ssh.run.as_deref(), Some("cargo test --workspace"));
    assert!(cfg.ssh.allow_run_failure);
    assert_eq!(cfg.ssh.post_run.as_deref(), Some("poweroff"));
    assert!(!cfg.ssh.allow_post_run_failure);
    Ok(())
}

#[test]
fn negative_timeout_is_rejected() {
    let err = InputsBuilder::new()
        .input("pre-timeout", "-5")
        .try_config()
        .unwrap_err();

    match err {
        ActionError::InputError(msg) => assert!(msg.contains("pre-timeout")),
        other => panic!("expected InputError, got {other:?}"),
    }
}

#[test]
fn out_of_range_seconds_are_rejected() {
    for (name, value) in [
        ("pre-timeout", "18446744073709551615"),
        ("pre-sleep", "4294967296"),
    ] {
        let err = InputsBuilder::new().input(name, value).try_config().unwrap_err();
        match err {
            ActionError::InputError(msg) => assert!(msg.contains(name), "{msg}"),
            other => panic!("expected InputError for {name}, got {other:?}"),
        }
    }
}

#[test]
fn host_that_looks_like_an_option_is_rejected() {
    let res = InputsBuilder::new()
        .input("host", "-oProxyCommand=evil")
        .try_config();
    assert!(matches!(res, Err(ActionError::InputError(_))));
}

#[test]
fn unbalanced_quotes_in_args_are_rejected() {
    let res = InputsBuilder::new()
        .input("args", "-o \"User=ci")
        .try_config();
    assert!(matches!(res, Err(ActionError::InputError(_))));
}

#[test]
fn env_reader_follows_runner_convention() {
    let name = "ssh-action-test-env-lookup";
    let var = input_env_name(name);
    assert_eq!(var, "INPUT_SSH-ACTION-TEST-ENV-LOOKUP");

    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(&var, "  from-env  ") };

    let plain = EnvInputReader::new();
    assert_eq!(plain.get(name), "from-env");

    let overridden =
        EnvInputReader::with_overrides([(name.to_string(), "from-cli".to_string())]);
    assert_eq!(overridden.get(name), "from-cli");

    unsafe { std::env::remove_var(&var) };
    assert_eq!(plain.get(name), "");
}

#[tokio::test]
async fn dry_run_resolves_inputs_without_running() -> TestResult {
    init_tracing();
    let args = CliArgs::try_parse_from(["ssh-action", "--dry-run"])?;
    let reader = InputsBuilder::new()
        .input("ssh-bin", "ssh-action-definitely-not-a-program")
        .input("pre-timeout", "600")
        .input("run", "echo hi")
        .reader();

    // Would fail (or wait ten minutes) if anything were actually spawned.
    ssh_action::run(args, &reader).await?;
    Ok(())
}

#[tokio::test]
async fn dry_run_still_validates_inputs() -> TestResult {
    init_tracing();
    let args = CliArgs::try_parse_from(["ssh-action", "--dry-run"])?;
    let reader = InputsBuilder::new().input("pre-sleep", "soon").reader();

    let res = ssh_action::run(args, &reader).await;
    assert!(matches!(res, Err(ActionError::InputError(_))));
    Ok(())
}
