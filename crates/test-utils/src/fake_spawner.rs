use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

use ssh_action::exec::{CommandSpec, ProcessSpawner, SpawnFuture};

/// What a scripted process does when "spawned".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    /// The process runs and exits with this code.
    Exit(i32),
    /// The process cannot be started (`NotFound`).
    SpawnError,
    /// The process never exits, like a VM left running in the background.
    Hang,
}

/// A fake spawner that:
/// - records every command it was asked to run
/// - replays scripted outcomes per program name; the last scripted outcome
///   repeats once the script is used up
/// - reports `Exit(0)` for programs without a script.
///
/// Each call yields to the scheduler once, so background tasks get a chance
/// to run as they would with real processes.
#[derive(Debug, Default)]
pub struct FakeSpawner {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<I>(self, program: &str, outcomes: I) -> Self
    where
        I: IntoIterator<Item = Scripted>,
    {
        self.scripts
            .lock()
            .unwrap()
            .insert(program.to_string(), outcomes.into_iter().collect());
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times `program` was run.
    pub fn attempts(&self, program: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.program == program)
            .count()
    }

    fn next_outcome(&self, program: &str) -> Scripted {
        let mut scripts = self.scripts.lock().unwrap();
        match scripts.get_mut(program) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().copied().unwrap_or(Scripted::Exit(0)),
            None => Scripted::Exit(0),
        }
    }
}

impl ProcessSpawner for FakeSpawner {
    fn status<'a>(&'a self, spec: &'a CommandSpec) -> SpawnFuture<'a> {
        self.calls.lock().unwrap().push(spec.clone());
        let outcome = self.next_outcome(&spec.program);

        Box::pin(async move {
            tokio::task::yield_now().await;
            match outcome {
                Scripted::Exit(code) => Ok(code),
                Scripted::SpawnError => Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{}: command not found", spec.program),
                )),
                Scripted::Hang => std::future::pending().await,
            }
        })
    }
}
