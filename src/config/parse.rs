// src/config/parse.rs

//! Parsing helpers turning raw input strings into typed values.

use tracing::warn;

use crate::errors::{ActionError, Result};
use crate::exec::CommandSpec;

/// Parse a boolean input.
///
/// Empty means `default`. Besides `true`/`false` (any case) a few common
/// spellings are accepted. Anything else falls back to `default` with a
/// warning.
pub fn parse_bool(name: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "true" | "y" | "yes" | "on" | "ok" => true,
        "false" | "n" | "no" | "off" | "err" => false,
        other => {
            warn!(input = name, value = other, default, "unrecognised boolean; using default");
            default
        }
    }
}

/// Parse a whole number of seconds. Empty means 0.
///
/// Values are bounded to `u32::MAX` seconds.
pub fn parse_seconds(name: &str, raw: &str) -> Result<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>().map(u64::from).map_err(|e| {
        ActionError::InputError(format!(
            "input '{name}' must be a whole number of seconds between 0 and {} (got '{raw}': {e})",
            u32::MAX
        ))
    })
}

/// `None` for blank input, otherwise the value unchanged.
pub fn non_empty(raw: String) -> Option<String> {
    match raw.trim() {
        "" => None,
        _ => Some(raw),
    }
}

/// `default` for blank input, otherwise the value unchanged.
pub fn non_empty_or(raw: String, default: &str) -> String {
    non_empty(raw).unwrap_or_else(|| default.to_string())
}

/// Split one shell-style word list, e.g. `-o "User=ci bot"`.
pub fn split_words(name: &str, raw: &str) -> Result<Vec<String>> {
    shlex::split(raw).ok_or_else(|| {
        ActionError::InputError(format!("input '{name}' has unbalanced quotes or a trailing escape: {raw}"))
    })
}

/// Split a multi-line argument list.
///
/// Blank lines and lines starting with `#` are dropped; each remaining line
/// is split shell-style, so one line may carry several arguments.
pub fn split_arg_lines(name: &str, raw: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        out.extend(split_words(name, line)?);
    }
    Ok(out)
}

/// Split a full command line into a [`CommandSpec`]. `None` for blank input.
pub fn split_command(name: &str, raw: &str) -> Result<Option<CommandSpec>> {
    let mut words = split_words(name, raw.trim())?.into_iter();
    let Some(program) = words.next() else {
        return Ok(None);
    };
    Ok(Some(CommandSpec::with_args(program, words)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_spellings() {
        assert!(parse_bool("x", "YES", false));
        assert!(parse_bool("x", "on", false));
        assert!(!parse_bool("x", "False", true));
        assert!(!parse_bool("x", "err", true));
        assert!(parse_bool("x", "", true));
        assert!(!parse_bool("x", "maybe", false));
    }

    #[test]
    fn seconds_reject_negative_and_garbage() {
        assert_eq!(parse_seconds("pre-timeout", "").unwrap(), 0);
        assert_eq!(parse_seconds("pre-timeout", " 30 ").unwrap(), 30);
        assert!(matches!(
            parse_seconds("pre-timeout", "-1"),
            Err(ActionError::InputError(_))
        ));
        assert!(parse_seconds("pre-sleep", "10s").is_err());
    }

    #[test]
    fn seconds_are_bounded_to_u32() {
        assert_eq!(
            parse_seconds("pre-timeout", "4294967295").unwrap(),
            u64::from(u32::MAX)
        );
        assert!(matches!(
            parse_seconds("pre-timeout", "4294967296"),
            Err(ActionError::InputError(_))
        ));
        assert!(matches!(
            parse_seconds("pre-timeout", "18446744073709551615"),
            Err(ActionError::InputError(_))
        ));
    }

    #[test]
    fn arg_lines_skip_comments_and_blanks() {
        let raw = "-p 2222\n\n  # comment\n-o \"StrictHostKeyChecking no\"\n-v";
        let args = split_arg_lines("args", raw).unwrap();
        assert_eq!(
            args,
            vec!["-p", "2222", "-o", "StrictHostKeyChecking no", "-v"]
        );
    }

    #[test]
    fn unbalanced_quotes_are_an_input_error() {
        let err = split_arg_lines("args", "-o 'broken").unwrap_err();
        assert!(err.to_string().contains("args"));
    }

    #[test]
    fn command_split() {
        let cmd = split_command("pre-local-cmd", "  ls -la -h ").unwrap().unwrap();
        assert_eq!(cmd.program, "ls");
        assert_eq!(cmd.args, vec!["-la", "-h"]);
        assert!(split_command("pre-local-cmd", "   ").unwrap().is_none());
    }
}
