// src/config/inputs.rs

//! Where named inputs come from.
//!
//! CI runners hand action inputs to the process as environment variables:
//! input `ssh-bin` arrives as `INPUT_SSH-BIN`. [`EnvInputReader`] reads that
//! convention and lets `--input NAME=VALUE` flags override it.

use std::collections::BTreeMap;

/// Resolve a named input to a string.
///
/// Missing inputs resolve to the empty string; values are trimmed.
pub trait InputReader {
    fn get(&self, name: &str) -> String;
}

/// Environment variable name for an input, e.g. `pre-timeout` ->
/// `INPUT_PRE-TIMEOUT`.
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.trim().to_uppercase().replace(' ', "_"))
}

/// Reads `INPUT_<NAME>` environment variables, with explicit overrides taking
/// precedence.
#[derive(Debug, Clone, Default)]
pub struct EnvInputReader {
    overrides: BTreeMap<String, String>,
}

impl EnvInputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(k, v)| (normalize_name(&k), v))
                .collect(),
        }
    }
}

impl InputReader for EnvInputReader {
    fn get(&self, name: &str) -> String {
        if let Some(v) = self.overrides.get(&normalize_name(name)) {
            return v.trim().to_string();
        }
        std::env::var(input_env_name(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

/// In-memory inputs, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapInputReader {
    values: BTreeMap<String, String>,
}

impl MapInputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.values.insert(normalize_name(name), value.into());
        self
    }
}

impl FromIterator<(String, String)> for MapInputReader {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (normalize_name(&k), v))
                .collect(),
        }
    }
}

impl InputReader for MapInputReader {
    fn get(&self, name: &str) -> String {
        self.values
            .get(&normalize_name(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_name_keeps_dashes_and_replaces_spaces() {
        assert_eq!(input_env_name("ssh-bin"), "INPUT_SSH-BIN");
        assert_eq!(input_env_name("my input"), "INPUT_MY_INPUT");
    }

    #[test]
    fn overrides_win_and_are_case_insensitive() {
        let reader = EnvInputReader::with_overrides([(
            "Host".to_string(),
            " example.org ".to_string(),
        )]);
        assert_eq!(reader.get("host"), "example.org");
    }

    #[test]
    fn map_reader_returns_empty_for_missing() {
        let mut reader = MapInputReader::new();
        reader.set("run", "uname -a");
        assert_eq!(reader.get("run"), "uname -a");
        assert_eq!(reader.get("post-run"), "");
    }
}
