//! In-memory [`CommandRunner`] for tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

use super::{CommandOutput, CommandRunner};
use crate::error::ToolError;

/// Answers commands from a table keyed by the full command line
/// (`"dict -d wn walk"`). Unknown commands succeed with empty output.
#[derive(Default)]
pub struct FakeRunner {
    outputs: HashMap<String, String>,
    missing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command_line: &str, stdout: &str) -> Self {
        self.outputs
            .insert(command_line.to_string(), stdout.to_string());
        self
    }

    /// Make every invocation of `program` fail to launch
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    /// Command lines seen so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, program: &str) -> bool {
        self.calls()
            .iter()
            .any(|call| call.split(' ').next() == Some(program))
    }

    fn record(&self, program: &str, args: &[&str]) -> Result<String, ToolError> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.lock().unwrap().push(line.clone());

        if self.missing.contains(program) {
            return Err(ToolError::Launch {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not installed"),
            });
        }
        Ok(line)
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ToolError> {
        let line = self.record(program, args)?;
        Ok(CommandOutput {
            stdout: self.outputs.get(&line).cloned().unwrap_or_default(),
            stderr: String::new(),
        })
    }

    fn spawn(&self, program: &str, args: &[&str]) -> Result<(), ToolError> {
        self.record(program, args).map(|_| ())
    }
}
