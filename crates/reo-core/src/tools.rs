use std::process::{Command, Stdio};
use std::sync::Arc;

use reo_config::Config;

use crate::error::ToolError;

#[cfg(any(test, feature = "test-util"))]
pub mod fake;

/// Captured result of a finished external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stdout followed by stderr, like a shell `2>&1`
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs external programs.
///
/// Calls block until the program exits. Implementations must not time out.
pub trait CommandRunner: Send + Sync {
    /// Run to completion and capture output
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ToolError>;

    /// Start without waiting, output discarded
    fn spawn(&self, program: &str, args: &[&str]) -> Result<(), ToolError>;
}

/// [`CommandRunner`] backed by `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ToolError> {
        tracing::debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::Launch {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            tracing::debug!("{} exited with {}", program, output.status);
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn spawn(&self, program: &str, args: &[&str]) -> Result<(), ToolError> {
        tracing::debug!("Spawning {} {:?}", program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ToolError::Launch {
                program: program.to_string(),
                source,
            })?;

        // Reap the child so it does not linger as a zombie
        let program = program.to_string();
        std::thread::spawn(move || {
            if let Err(e) = child.wait() {
                tracing::warn!("Waiting on {} failed: {}", program, e);
            }
        });

        Ok(())
    }
}

/// The external tools Reo talks to, configured from [`Config`]
#[derive(Clone)]
pub struct Tools {
    runner: Arc<dyn CommandRunner>,
    config: Config,
}

impl Tools {
    pub fn new(runner: Arc<dyn CommandRunner>, config: &Config) -> Self {
        Self {
            runner,
            config: config.clone(),
        }
    }

    fn voice_flag(&self) -> String {
        format!("-v{}", self.config.speech.voice)
    }

    /// `dict -d <db> <term>`
    pub fn define(&self, term: &str) -> Result<String, ToolError> {
        let database = self.config.dictionary.database.as_str();
        let output = self
            .runner
            .run(&self.config.tools.dict, &["-d", database, term])?;
        Ok(output.stdout)
    }

    /// `dict -m -d <db> -s <strategy> <term>`
    pub fn matches(&self, term: &str) -> Result<String, ToolError> {
        let database = self.config.dictionary.database.as_str();
        let strategy = self.config.dictionary.strategy.as_str();
        let output = self.runner.run(
            &self.config.tools.dict,
            &["-m", "-d", database, "-s", strategy, term],
        )?;
        Ok(output.stdout)
    }

    /// IPA transcription from espeak-ng, nothing is played
    pub fn ipa(&self, term: &str) -> Result<String, ToolError> {
        let voice = self.voice_flag();
        let output = self
            .runner
            .run(&self.config.tools.espeak, &[&voice, "--ipa", "-q", term])?;
        Ok(output.stdout)
    }

    /// Read `text` aloud in the background
    pub fn speak(&self, text: &str) -> Result<(), ToolError> {
        let voice = self.voice_flag();
        let speed = self.config.speech.speed.to_string();
        self.runner
            .spawn(&self.config.tools.espeak, &[&voice, "-s", &speed, text])
    }

    /// `fortune -a`, stderr included
    pub fn fortune(&self) -> Result<String, ToolError> {
        let output = self.runner.run(&self.config.tools.fortune, &["-a"])?;
        Ok(output.combined())
    }

    pub fn cowsay(&self, text: &str) -> Result<String, ToolError> {
        let output = self.runner.run(&self.config.tools.cowsay, &[text])?;
        Ok(output.combined())
    }

    /// Probe the dictionary with a known word, used to detect the WordNet release
    pub fn sample_definition(&self) -> Result<String, ToolError> {
        let database = self.config.dictionary.database.as_str();
        let output = self
            .runner
            .run(&self.config.tools.dict, &["-d", database, "test"])?;
        Ok(output.combined())
    }

    pub fn dict_version(&self) -> Result<String, ToolError> {
        let output = self.runner.run(&self.config.tools.dict, &["-V"])?;
        Ok(output.combined())
    }

    pub fn espeak_version(&self) -> Result<String, ToolError> {
        let output = self.runner.run(&self.config.tools.espeak, &["--version"])?;
        Ok(output.combined())
    }
}
