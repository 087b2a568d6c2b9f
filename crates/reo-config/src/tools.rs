use serde::{Deserialize, Serialize};

fn default_dict() -> String {
    "dict".to_string()
}

fn default_espeak() -> String {
    "espeak-ng".to_string()
}

fn default_fortune() -> String {
    "fortune".to_string()
}

fn default_cowsay() -> String {
    "cowsay".to_string()
}

/// Names (or paths) of the external binaries
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ToolsConfig {
    #[serde(default = "default_dict")]
    pub dict: String,
    #[serde(default = "default_espeak")]
    pub espeak: String,
    #[serde(default = "default_fortune")]
    pub fortune: String,
    #[serde(default = "default_cowsay")]
    pub cowsay: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            dict: default_dict(),
            espeak: default_espeak(),
            fortune: default_fortune(),
            cowsay: default_cowsay(),
        }
    }
}
