//! Rewrites raw `dict` output into styled definition markup.
//!
//! The rewrite is an ordered list of regex substitutions. Rules are not
//! commutative: the whitespace collapsing rules must run after the
//! part-of-speech rules, and the sentence color rules rely on the quote
//! shapes left behind by the rules before them.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{self, MarkupDialect};

/// Source banners printed by `dict` ahead of a WordNet entry
pub const PREAMBLES: [&str; 2] = [
    "1 definition found\n\nFrom WordNet (r) 3.0 (2006) [wn]:\n",
    "1 definition found\n\nFrom WordNet (r) 3.1 (2011) [wn]:\n",
];

/// Known bad line wrap in WordNet's entry for "thunder"
const WRAP_FIXUP: (&str, &str) = (
    "thunder started the sleeping",
    "thunder started, the sleeping",
);

const RULE_PATTERNS: [&str; 20] = [
    r"[ \t\r\f\v]+n\s+",
    r"[ \t\r\f\v]+adv\s+",
    r"[ \t\r\f\v]+adj\s+",
    r"[ \t\r\f\v]+v\s+",
    r"([-]+)\s+      \s+",
    r"\s+      \s+",
    r#""$"#,
    r"\s+(\d+):\D",
    r#"";\s*""#,
    r#"[;:]\s*""#,
    r#""\s+\["#,
    r"\[syn:",
    r"\[ant:",
    r"\}\]",
    r"\{([^{]*)\}",
    r#"";[ \t\r\f\v]*$"#,
    r#"";[ \t\r\f\v]+(.+)$"#,
    r#""[; \t\r\f\v]+(\(.+\))$"#,
    r#""\s*-+\s*(.+)\s*([<]*)"#,
    r";\s*$",
];

static RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(&format!("(?m){pattern}")).expect("valid rewrite rule"))
        .collect()
});

/// Escape text so the regex crate inserts it verbatim into a replacement
fn literal(text: &str) -> String {
    text.replace('$', "$$")
}

/// Replacement templates, index-aligned with [`RULE_PATTERNS`]
fn replacements(headword: &str, sentence_color: &str, word_color: &str) -> [String; 20] {
    let headword = literal(headword);
    let sentence = literal(sentence_color);
    let word = literal(word_color);
    let label = |pos: &str| format!("<b>{headword}</b> ~ <i>{pos}</i>:\n      ");

    [
        label("noun"),
        label("adverb"),
        label("adjective"),
        label("verb"),
        "${1}".to_string(),
        " ".to_string(),
        "</font>".to_string(),
        "\n  <b>${1}:  </b>".to_string(),
        format!("</font><b>;</b> <font color=\"{sentence}\">"),
        format!("\n        <font color=\"{sentence}\">"),
        "</font>[".to_string(),
        "\n        <i>Synonyms: ".to_string(),
        "\n        <i>Antonyms: ".to_string(),
        "}</i>".to_string(),
        format!("<font color=\"{word}\">${{1}}</font>"),
        "</font>".to_string(),
        "</font> ${1}".to_string(),
        "</font> ${1}".to_string(),
        "</font> - ${1}; ${2}".to_string(),
        String::new(),
    ]
}

/// Find how the dictionary echoes `term`, e.g. `"  Hello"`.
///
/// The term is used as a pattern as-is. When it is not a valid pattern, or
/// nothing matches, the bare term is used instead.
fn locate_headword(text: &str, term: &str) -> String {
    match Regex::new(&format!("(?i)  {term}")) {
        Ok(pattern) => match pattern.find(text) {
            Some(found) => found.as_str().to_string(),
            None => term.to_string(),
        },
        Err(e) => {
            tracing::debug!("Headword pattern for '{}' rejected: {}", term, e);
            term.to_string()
        }
    }
}

/// Format the definition printed by `dict` for display.
pub fn render_definition(
    raw: &str,
    term: &str,
    sentence_color: &str,
    word_color: &str,
    dialect: MarkupDialect,
) -> String {
    let mut definition = raw.to_string();
    for preamble in PREAMBLES {
        definition = definition.replace(preamble, "");
    }

    let mut definition = markup::escape(&definition);

    let headword = locate_headword(&definition, term);
    tracing::debug!("Searching {}", headword.trim());
    definition = definition.replacen(&format!("{headword}\n"), "", 1);

    let templates = replacements(&headword, sentence_color, word_color);
    for (rule, template) in RULES.iter().zip(templates.iter()) {
        definition = rule.replace_all(&definition, template.as_str()).into_owned();
    }

    if dialect == MarkupDialect::Pango {
        definition = definition
            .replace("<font color=\"", "<span foreground=\"")
            .replace("</font>", "</span>");
    }

    definition = definition.replace('`', "'");
    definition = definition.replace(WRAP_FIXUP.0, WRAP_FIXUP.1);

    match dialect {
        MarkupDialect::Html => definition.trim().replace('\n', "<br>"),
        MarkupDialect::Pango => definition.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALK: &str = "1 definition found\n\nFrom WordNet (r) 3.0 (2006) [wn]:\n\n  walk\n      v 1: use one's feet to advance\n";

    const QUICK: &str = "1 definition found\n\nFrom WordNet (r) 3.1 (2011) [wn]:\n\n  quick\n      adj 1: accomplished rapidly; \"a quick inspection\" [syn: {speedy}]\n";

    #[test]
    fn test_rule_table_compiles() {
        for pattern in RULE_PATTERNS {
            let compiled = Regex::new(&format!("(?m){pattern}"));
            assert!(compiled.is_ok(), "rule {pattern:?} failed: {compiled:?}");
        }
        assert_eq!(RULES.len(), RULE_PATTERNS.len());
    }

    #[test]
    fn test_preambles_removed() {
        for raw in [WALK, QUICK] {
            let html = render_definition(raw, "walk", "blue", "green", MarkupDialect::Html);
            let pango = render_definition(raw, "walk", "blue", "green", MarkupDialect::Pango);
            for out in [html, pango] {
                assert!(!out.contains("definition found"));
                assert!(!out.contains("From WordNet"));
            }
        }
    }

    #[test]
    fn test_verb_label_follows_headword() {
        let out = render_definition(WALK, "walk", "blue", "green", MarkupDialect::Html);
        assert_eq!(
            out,
            "<b>  walk</b> ~ <i>verb</i>:<br>  <b>1:  </b>use one's feet to advance"
        );
    }

    #[test]
    fn test_headword_keeps_dictionary_case() {
        let out = render_definition(WALK, "WALK", "blue", "green", MarkupDialect::Html);
        assert!(out.starts_with("<b>  walk</b> ~ <i>verb</i>"));
    }

    #[test]
    fn test_sentences_and_synonyms() {
        let out = render_definition(QUICK, "quick", "blue", "green", MarkupDialect::Html);
        assert!(out.starts_with("<b>  quick</b> ~ <i>adjective</i>:<br>"));
        assert!(out.contains("<b>1:  </b>accomplished rapidly<br>"));
        assert!(out.contains(r#"<font color="blue">a quick inspection</font>"#));
        assert!(out.contains(r#"<i>Synonyms:  <font color="green">speedy</font></i>"#));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_pango_dialect_uses_spans_and_newlines() {
        let out = render_definition(QUICK, "quick", "cyan", "lightgreen", MarkupDialect::Pango);
        assert!(out.contains(r#"<span foreground="cyan">a quick inspection</span>"#));
        assert!(out.contains(r#"<span foreground="lightgreen">speedy</span>"#));
        assert!(out.contains('\n'));
        assert!(!out.contains("<font"));
        assert!(!out.contains("<br>"));
    }

    #[test]
    fn test_markup_characters_escaped() {
        let raw = "  amp\n      n 1: the sign & or <amp> symbol\n";
        let out = render_definition(raw, "amp", "blue", "green", MarkupDialect::Pango);
        assert!(out.contains("the sign &amp; or &lt;amp&gt; symbol"));
    }

    #[test]
    fn test_missing_headword_falls_back_to_term() {
        let raw = "      n 1: something unrelated\n";
        let out = render_definition(raw, "absent", "blue", "green", MarkupDialect::Pango);
        assert!(out.starts_with("<b>absent</b> ~ <i>noun</i>:"));
    }

    #[test]
    fn test_invalid_pattern_term_falls_back() {
        let raw = "  c(\n      n 1: a programming language\n";
        let out = render_definition(raw, "c(", "blue", "green", MarkupDialect::Pango);
        assert!(out.starts_with("<b>c(</b> ~ <i>noun</i>"));
    }

    #[test]
    fn test_literal_fixups() {
        let raw = "  thunder\n      n 1: a deep rumble; `the thunder started the sleeping dogs'\n";
        let out = render_definition(raw, "thunder", "blue", "green", MarkupDialect::Pango);
        assert!(!out.contains('`'));
        assert!(out.contains("thunder started, the sleeping"));
    }
}
