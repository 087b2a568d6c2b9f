use unicode_normalization::UnicodeNormalization;

/// Trimmed from both ends of a search term
const EDGE_CHARS: &[char] = &[
    '<', '>', '"', '-', '?', '`', '!', '[', ']', '(', ')', '{', '}', '/', '\\', ':', ';', ',', '*',
];

/// Removed anywhere in a search term
const BRACKETS: &[char] = &['(', ')', '<', '>', '[', ']'];

/// Clean user input into a term suitable for the lookup tools.
///
/// An empty return value means the input was nothing but punctuation.
pub fn sanitize(text: &str) -> String {
    let text: String = text.nfkc().collect();

    let text = text
        .trim()
        .trim_matches(EDGE_CHARS)
        .trim_end_matches('\'')
        .trim_start_matches('.');

    text.replace(BRACKETS, "")
}

/// Whether a sanitized term can be searched at all
pub fn is_searchable(term: &str) -> bool {
    !term.trim().is_empty()
}
