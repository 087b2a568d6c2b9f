use serde::{Deserialize, Serialize};

fn default_database() -> String {
    "wn".to_string()
}

fn default_strategy() -> String {
    "lev".to_string()
}

fn default_wordlist() -> String {
    "/usr/share/dict/words".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// dict database selector
    #[serde(default = "default_database")]
    pub database: String,
    /// Match strategy used for the similar words list
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Prefer user-authored definitions over the dict lookup
    #[serde(default)]
    pub custom_definitions: bool,
    /// One word per line, used by the random word search
    #[serde(default = "default_wordlist")]
    pub wordlist: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            strategy: default_strategy(),
            custom_definitions: false,
            wordlist: default_wordlist(),
        }
    }
}
