use crate::eggs;

/// What the last search was, owned by whoever drives the searches
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    last_term: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_term(&self) -> Option<&str> {
        self.last_term.as_deref()
    }

    /// Decide whether `text` should be searched and remember it if so.
    ///
    /// Repeating the previous search is skipped unless `force` is set or the
    /// text is one of the always re-run easter eggs.
    pub fn begin(&mut self, text: &str, force: bool) -> bool {
        let repeat = self.last_term.as_deref() == Some(text);
        if repeat && !force && !eggs::always_reruns(text) {
            return false;
        }

        self.last_term = Some(text.to_string());
        true
    }

    pub fn forget(&mut self) {
        self.last_term = None;
    }
}
