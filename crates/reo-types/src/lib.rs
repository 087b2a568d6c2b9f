use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged(UiSettings),
    /// Search request coming from the window
    Search {
        text: String,
        /// Re-run even if `text` equals the last searched term
        force: bool,
    },
    /// Search entry contents changed (live search)
    TextEdited(String),
    /// A cross-referenced word was clicked in the definition
    LinkActivated(String),
    RandomWord,
    Speak,
    Clear,
    PasteSearch,
    SelectionSearch,
    ShowResult(DisplayResult),
    ShowWelcome,
    SetSearchText(String),
    ShowError {
        title: String,
        message: String,
    },
    StatusUpdate(String),
    BackendReady,
    CloseWindow,
}

/// A run of text sharing one style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    /// CSS color name or `#rrggbb`, `None` for the default text color
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    /// Term searched when the span is clicked
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// A lookup projected for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayResult {
    pub term: String,
    pub pronunciation: String,
    /// Plain text, markup stripped
    pub definition: String,
    pub similar: Option<String>,
    /// Definition followed by the similar words block, styled
    pub body: Vec<StyledLine>,
    /// Whether the speak button makes sense for this result
    pub speakable: bool,
}

/// User toggles exposed in the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    pub dark_font: bool,
    pub live_search: bool,
    pub custom_definitions: bool,
}
