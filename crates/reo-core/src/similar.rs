use regex::Regex;

/// Always answered with itself
const RECURSION: &str = "recursion";

/// Build the ordered substitution table for one term.
///
/// Term-stripping rules come before the whitespace-to-comma rule, otherwise
/// the term itself would end up in the list.
fn rules(term: &str) -> Vec<(String, &'static str)> {
    let t = regex::escape(&term.to_lowercase());

    vec![
        (r"\s+      \s+".to_string(), "  "),
        (format!(r#"(?i)  "*{t}"*$"#), ""),
        (format!(r"(?i)(.)  {t}  (.)"), "${1}  ${2}"),
        (format!(r#"(?i)wn: "*{t}"*  (.)"#), "${1}"),
        (format!(r#"(?i)(.)  "{t}"  (.)"#), "${1}  ${2}"),
        (r"\s*\n\s*".to_string(), "  "),
        (r"\s\s+".to_string(), ", "),
        (format!(r#"(?i)"+{t}"+"#), ""),
        ("wn:,*".to_string(), ""),
    ]
}

/// Format the `dict -m` output into a comma separated list of near matches.
pub fn render_similar(raw: &str, term: &str) -> String {
    if term.eq_ignore_ascii_case(RECURSION) {
        return RECURSION.to_string();
    }

    let mut list = raw.to_string();
    for (pattern, replacement) in rules(term) {
        match Regex::new(&pattern) {
            Ok(rule) => list = rule.replace_all(&list, replacement).trim().to_string(),
            Err(e) => tracing::warn!("Skipping similar words rule {}: {}", pattern, e),
        }
    }

    list.trim_end().to_string()
}
