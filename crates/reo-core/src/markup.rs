use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use reo_types::{StyledLine, StyledSpan};
use serde::{Deserialize, Serialize};

/// Rich-text flavor produced by the renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupDialect {
    /// HTML-like tags, `<br>` line breaks
    #[default]
    Html,
    /// Pango span markup, literal newlines
    Pango,
}

impl fmt::Display for MarkupDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupDialect::Html => f.write_str("html"),
            MarkupDialect::Pango => f.write_str("pango"),
        }
    }
}

impl FromStr for MarkupDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(MarkupDialect::Html),
            "pango" | "native" => Ok(MarkupDialect::Pango),
            other => Err(format!("unknown markup dialect: {other}")),
        }
    }
}

/// Colors used for example sentences and cross-referenced words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub sentence: String,
    pub word: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            sentence: "blue".to_string(),
            word: "green".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            sentence: "cyan".to_string(),
            word: "lightgreen".to_string(),
        }
    }

    pub fn for_dark_font(dark_font: bool) -> Self {
        if dark_font { Self::dark() } else { Self::light() }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// Escape `&`, `<` and `>`; quotes are left alone
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Rewrite font tags and line breaks into Pango spans.
///
/// Only handles the tags the renderers emit, it is not a general converter.
pub fn html_to_pango(text: &str) -> String {
    text.replace("<font color=\"", "<span foreground=\"")
        .replace("</font>", "</span>")
        .replace("<br>", "\n")
}

/// Convert text written with `<br>`/`<font>` tags (or raw newlines) to `dialect`
pub fn for_dialect(html: &str, dialect: MarkupDialect) -> String {
    match dialect {
        MarkupDialect::Html => html.replace('\n', "<br>"),
        MarkupDialect::Pango => html_to_pango(html),
    }
}

static BLOCK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</?p>").expect("valid block tag pattern"));
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z]+)([^>]*)>").expect("valid tag pattern"));
static COLOR_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:color|foreground)\s*=\s*"([^"]*)""#).expect("valid color attribute pattern")
});

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Drop all tags and decode the entities the renderers produce
pub fn to_plain(markup: &str) -> String {
    let text = BLOCK_TAG.replace_all(markup, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    decode_entities(&text)
}

#[derive(Debug, Clone, Default)]
struct Style {
    color: Option<String>,
    bold: bool,
    italic: bool,
    monospace: bool,
}

struct StyledBuilder<'a> {
    lines: Vec<StyledLine>,
    link_color: Option<&'a str>,
}

impl StyledBuilder<'_> {
    fn new_line(&mut self) {
        self.lines.push(StyledLine::default());
    }

    fn push_span(&mut self, text: &str, style: &Style, link: Option<String>) {
        if text.is_empty() {
            return;
        }
        let span = StyledSpan {
            text: text.to_string(),
            color: style.color.clone(),
            bold: style.bold,
            italic: style.italic,
            monospace: style.monospace,
            link,
        };
        if let Some(line) = self.lines.last_mut() {
            line.spans.push(span);
        }
    }

    fn is_link(&self, style: &Style) -> bool {
        match (self.link_color, style.color.as_deref()) {
            (Some(link), Some(color)) => link.eq_ignore_ascii_case(color),
            _ => false,
        }
    }

    /// Word lists like `  walks, walking` become one link per word
    fn push_links(&mut self, text: &str, style: &Style) {
        for (i, piece) in text.split(", ").enumerate() {
            if i > 0 {
                self.push_span(", ", style, None);
            }
            let word = piece.trim();
            if word.is_empty() {
                self.push_span(piece, style, None);
                continue;
            }
            let leading = &piece[..piece.len() - piece.trim_start().len()];
            let trailing = &piece[piece.trim_end().len()..];

            self.push_span(leading, style, None);
            self.push_span(word, style, Some(word.to_string()));
            self.push_span(trailing, style, None);
        }
    }

    fn push_text(&mut self, raw: &str, style: &Style) {
        let text = decode_entities(raw);
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.new_line();
            }
            if self.is_link(style) {
                self.push_links(segment, style);
            } else {
                self.push_span(segment, style, None);
            }
        }
    }
}

/// Split HTML or Pango markup into lines of styled runs.
///
/// Understands `b`, `i`, `tt`, `font color` and `span foreground`, with `br`,
/// `p` and raw newlines as line breaks. Text colored `link_color` is turned
/// into links.
pub fn to_styled(markup: &str, link_color: Option<&str>) -> Vec<StyledLine> {
    let mut builder = StyledBuilder {
        lines: vec![StyledLine::default()],
        link_color,
    };
    let mut style = Style::default();
    let mut open: Vec<(String, Style)> = Vec::new();
    let mut last = 0;

    for caps in TAG.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        builder.push_text(&markup[last..whole.start()], &style);
        last = whole.end();

        let closing = &caps[1] == "/";
        let name = caps[2].to_ascii_lowercase();

        match (name.as_str(), closing) {
            ("br", _) | ("p", true) => builder.new_line(),
            ("b" | "i" | "tt" | "font" | "span", false) => {
                open.push((name.clone(), style.clone()));
                match name.as_str() {
                    "b" => style.bold = true,
                    "i" => style.italic = true,
                    "tt" => style.monospace = true,
                    _ => {
                        if let Some(color) = COLOR_ATTR.captures(&caps[3]) {
                            style.color = Some(color[1].to_string());
                        }
                    }
                }
            }
            ("b" | "i" | "tt" | "font" | "span", true) => {
                if let Some(pos) = open.iter().rposition(|(tag, _)| *tag == name) {
                    style = open[pos].1.clone();
                    open.truncate(pos);
                }
            }
            _ => {}
        }
    }
    builder.push_text(&markup[last..], &style);

    builder.lines
}
