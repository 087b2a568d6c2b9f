//! User-authored definitions that replace the dictionary lookup.
//!
//! Each definition is a JSON file named after the lowercased term inside the
//! custom definitions folder. Markup fields use `<b>`, `<i>`, `<font>` and
//! `<br>` (or plain newlines) and are converted to the requested dialect.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CustomDefinitionError;
use crate::lookup::LookupResult;
use crate::markup::{self, MarkupDialect};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDefinition {
    /// Display form of the term, defaults to the searched text
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub pronunciation: String,
    pub definition: String,
    #[serde(default)]
    pub close: String,
}

impl CustomDefinition {
    pub fn into_result(self, searched: &str, dialect: MarkupDialect) -> LookupResult {
        LookupResult {
            term: self.term.unwrap_or_else(|| searched.to_string()),
            pronunciation: markup::for_dialect(&self.pronunciation, dialect),
            definition: markup::for_dialect(&self.definition, dialect),
            close: markup::for_dialect(&self.close, dialect),
            found: true,
            dialect,
        }
    }
}

pub struct CustomDefinitions {
    dir: PathBuf,
}

impl CustomDefinitions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, term: &str) -> PathBuf {
        let name = term.to_lowercase().replace(['/', '\\'], "_");
        self.dir.join(format!("{name}.json"))
    }

    /// `Ok(None)` when no custom definition exists for `term`
    pub fn load(&self, term: &str) -> Result<Option<CustomDefinition>, CustomDefinitionError> {
        let path = self.path_for(term);
        if !path.exists() {
            return Ok(None);
        }

        tracing::info!("Loading custom definition from {}", path.display());
        let data = fs::read_to_string(&path)?;
        let definition = serde_json::from_str(&data)?;
        Ok(Some(definition))
    }

    pub fn save(
        &self,
        term: &str,
        definition: &CustomDefinition,
    ) -> Result<PathBuf, CustomDefinitionError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(term);
        fs::write(&path, serde_json::to_string_pretty(definition)?)?;
        Ok(path)
    }
}
