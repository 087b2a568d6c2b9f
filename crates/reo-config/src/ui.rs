use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Use colors readable on a dark background
    pub dark_font: bool,
    /// Search on every edit of the search entry
    pub live_search: bool,
}
