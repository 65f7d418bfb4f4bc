// src/exec/command.rs

use std::fmt;

/// An external program plus its arguments.
///
/// Built once by the caller and handed to a [`ProcessSpawner`] by reference;
/// it is never mutated after construction.
///
/// [`ProcessSpawner`]: crate::exec::ProcessSpawner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Shell-quoted rendering, used for logs and `--dry-run`.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = std::iter::once(&self.program).chain(self.args.iter());
        for (i, part) in parts.enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match shlex::try_quote(part) {
                Ok(quoted) => f.write_str(&quoted)?,
                Err(_) => write!(f, "{part:?}")?,
            }
        }
        Ok(())
    }
}
