use std::fmt;

use crate::tools::Tools;
use crate::transform::PREAMBLES;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordNetVersion {
    V3_0,
    V3_1,
}

impl WordNetVersion {
    pub fn release(&self) -> &'static str {
        match self {
            WordNetVersion::V3_0 => "WordNet Version 3.0 (2006)",
            WordNetVersion::V3_1 => "WordNet Version 3.1 (2011)",
        }
    }
}

impl fmt::Display for WordNetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordNetVersion::V3_0 => f.write_str("3.0"),
            WordNetVersion::V3_1 => f.write_str("3.1"),
        }
    }
}

/// Work out which WordNet release the dict server carries.
///
/// Assumes 3.1 when dict cannot be run at all.
pub fn detect_wordnet(tools: &Tools) -> Option<WordNetVersion> {
    let sample = match tools.sample_definition() {
        Ok(sample) => sample,
        Err(e) => {
            tracing::warn!("Error with dict: {}", e);
            return Some(WordNetVersion::V3_1);
        }
    };

    if sample.contains(PREAMBLES[1]) {
        Some(WordNetVersion::V3_1)
    } else if sample.contains(PREAMBLES[0]) {
        Some(WordNetVersion::V3_0)
    } else {
        None
    }
}

/// Human readable versions of Reo and every tool it depends on
pub fn version_report(tools: &Tools) -> String {
    let mut report = vec![format!("Reo - {VERSION}"), String::new()];

    if let Some(version) = detect_wordnet(tools) {
        report.push(format!("{} (Installed)", version.release()));
        report.push(String::new());
    }

    match tools.dict_version() {
        Ok(out) => report.push(out.trim().to_string()),
        Err(e) => report.push(format!("Looks like missing components. (dict)\n{e}")),
    }
    report.push(String::new());

    match tools.espeak_version() {
        Ok(out) => report.push(out.trim().to_string()),
        Err(e) => report.push(format!("You're missing a few components. (espeak-ng)\n{e}")),
    }

    report.join("\n")
}
