use reo_types::{DisplayResult, StyledLine};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::markup::{self, MarkupDialect, Palette};
use crate::similar::render_similar;
use crate::tools::Tools;
use crate::transform::render_definition;

pub const PRONUNCIATION_FAILED: &str = "Pronunciation processing failed. Report this as a bug.";

/// Everything shown for one search, already in markup form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub term: String,
    pub pronunciation: String,
    pub definition: String,
    /// Similar words block, empty when there is nothing to suggest
    pub close: String,
    pub found: bool,
    pub dialect: MarkupDialect,
}

impl LookupResult {
    /// Concatenate all blocks into a single markup string
    pub fn to_markup(&self) -> String {
        match self.dialect {
            MarkupDialect::Pango => {
                let data = format!(
                    "{}\n{}\n{}",
                    self.pronunciation.trim(),
                    self.definition,
                    self.close.trim()
                );
                markup::html_to_pango(&data).replace('&', "&amp;")
            }
            MarkupDialect::Html => {
                let data = format!(
                    "<p>{}</p><p>{}</p><p>{}</p>",
                    self.pronunciation,
                    self.definition,
                    self.close.trim()
                );
                data.replace('&', "&amp;").replace("  ", "&nbsp;&nbsp;")
            }
        }
    }

    /// Projection for the window: plain fields plus the styled body, with
    /// similar words in `palette.word` turned into links
    pub fn to_display(&self, speakable: bool, palette: &Palette) -> DisplayResult {
        let similar = markup::to_plain(&markup::html_to_pango(&self.close));
        let similar = similar.trim();

        let mut body = markup::to_styled(self.definition.trim_end(), Some(&palette.word));
        if !similar.is_empty() {
            body.push(StyledLine::default());
            body.extend(markup::to_styled(self.close.trim(), Some(&palette.word)));
        }

        DisplayResult {
            term: markup::to_plain(&self.term).trim().to_string(),
            pronunciation: markup::to_plain(&self.pronunciation).trim().to_string(),
            definition: markup::to_plain(&markup::html_to_pango(&self.definition))
                .trim()
                .to_string(),
            similar: (!similar.is_empty()).then(|| similar.to_string()),
            body,
            speakable,
        }
    }
}

/// Runs the dictionary, pronunciation and similar-words queries for a term
#[derive(Clone)]
pub struct Lookup {
    tools: Tools,
}

impl Lookup {
    pub fn new(tools: Tools) -> Self {
        Self { tools }
    }

    /// Look `term` up with every tool.
    ///
    /// Fails only when a tool cannot be launched; the caller should then keep
    /// whatever it was displaying before.
    pub fn lookup(
        &self,
        term: &str,
        palette: &Palette,
        dialect: MarkupDialect,
    ) -> Result<LookupResult, LookupError> {
        let raw_definition = self.tools.define(term)?;
        let raw_pronunciation = self.tools.ipa(term)?;
        let raw_close = self.tools.matches(term)?;

        let found = !raw_definition.is_empty();
        let definition = if found {
            render_definition(
                &raw_definition,
                term,
                &palette.sentence,
                &palette.word,
                dialect,
            )
        } else {
            tracing::info!("No definition found for '{}'", term);
            format!("Couldn't find definition for '{term}'.")
        };

        // Shown only alongside a definition, even though espeak-ng ran regardless
        let pronunciation = if found {
            let ipa = raw_pronunciation.trim().replace("\n ", " ");
            format!("<b>Pronunciation</b>: <b> /{ipa}/</b>")
        } else {
            PRONUNCIATION_FAILED.to_string()
        };

        let similar = render_similar(&raw_close, term);
        let close = if similar.trim().is_empty() {
            String::new()
        } else {
            let label = if found { "Similar Words" } else { "Did you mean" };
            format!(
                "<b>{label}</b>:<br><i><font color=\"{}\">  {similar}</font></i>",
                palette.word
            )
        };

        Ok(LookupResult {
            term: term.to_string(),
            pronunciation,
            definition,
            close,
            found,
            dialect,
        })
    }
}
