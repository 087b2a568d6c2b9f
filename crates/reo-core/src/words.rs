use std::fs;
use std::path::Path;

use rand::prelude::IndexedRandom;

/// Words available to the random word search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Read a newline separated list, skipping blank lines
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let list = Self::from_lines(&content);
        tracing::debug!(
            "Loaded {} words from {}",
            list.len(),
            path.as_ref().display()
        );
        Ok(list)
    }

    pub fn from_lines(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn choose(&self) -> Option<&str> {
        self.words.choose(&mut rand::rng()).map(String::as_str)
    }
}
