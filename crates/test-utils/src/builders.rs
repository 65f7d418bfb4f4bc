#![allow(dead_code)]

use ssh_action::config::{load_and_validate, InputConfig, MapInputReader};
use ssh_action::errors::Result;

/// Builder for action inputs to simplify test setup.
///
/// ```ignore
/// let cfg = InputsBuilder::new()
///     .input("host", "10.0.0.2")
///     .input("run", "uname -a")
///     .config();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputsBuilder {
    reader: MapInputReader,
}

impl InputsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, name: &str, value: &str) -> Self {
        self.reader.set(name, value);
        self
    }

    pub fn reader(self) -> MapInputReader {
        self.reader
    }

    pub fn try_config(self) -> Result<InputConfig> {
        load_and_validate(&self.reader)
    }

    pub fn config(self) -> InputConfig {
        self.try_config()
            .expect("Failed to build valid inputs from builder")
    }
}
