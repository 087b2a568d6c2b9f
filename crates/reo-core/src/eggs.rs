//! Literal inputs answered without a dictionary lookup.

use crate::info::{self, WordNetVersion};
use crate::lookup::LookupResult;
use crate::markup::{self, MarkupDialect, Palette};
use crate::tools::Tools;

const FORTUNE: &str = "fortune -a";
const COW_FORTUNE: &str = "cowfortune";
const REO: &str = "reo";
const WORDNET_META: [&str; 4] = [
    "00-database-allchars",
    "00-database-info",
    "00-database-short",
    "00-database-url",
];
const EXIT: [&str; 2] = ["crash now", "close now"];

const FORTUNE_FAIL: &str = "Easter Egg Fail!!! Install 'fortune' or 'fortunemod'.";
const COW_FORTUNE_FAIL: &str =
    "Easter Egg Fail!!! Install 'fortune' or 'fortunemod' and also 'cowsay'.";

/// Inputs that are searched again even when they equal the last term, and
/// that never offer speech playback
pub const ALWAYS_RERUN: [&str; 2] = [FORTUNE, COW_FORTUNE];

pub fn always_reruns(text: &str) -> bool {
    ALWAYS_RERUN.contains(&text)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EasterEgg {
    Fortune,
    CowFortune,
    Reo,
    /// One of the dict `00-database-*` metadata entries
    WordNetInfo(String),
}

/// What to do with a sanitized term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Egg(EasterEgg),
    Exit,
    Lookup(String),
}

impl Dispatch {
    /// Exact-match classification, checked before any lookup
    pub fn classify(term: &str) -> Self {
        match term {
            FORTUNE => Dispatch::Egg(EasterEgg::Fortune),
            COW_FORTUNE => Dispatch::Egg(EasterEgg::CowFortune),
            REO => Dispatch::Egg(EasterEgg::Reo),
            t if WORDNET_META.contains(&t) => Dispatch::Egg(EasterEgg::WordNetInfo(t.to_string())),
            t if EXIT.contains(&t) => Dispatch::Exit,
            t => Dispatch::Lookup(t.to_string()),
        }
    }
}

fn teletype(text: &str) -> String {
    format!("<tt>{}</tt>", markup::escape(text).replace('\n', "<br>"))
}

impl EasterEgg {
    /// Produce the canned result, running `fortune`/`cowsay` where needed.
    ///
    /// Missing novelty tools give a fixed message instead of an error.
    pub fn resolve(
        &self,
        tools: &Tools,
        palette: &Palette,
        dialect: MarkupDialect,
    ) -> LookupResult {
        let (term, pronunciation, definition, close) = match self {
            EasterEgg::Fortune => (
                "<tt>Some random adage</tt>".to_string(),
                "<tt>Courtesy of fortune</tt>".to_string(),
                fortune(tools),
                String::new(),
            ),
            EasterEgg::CowFortune => (
                "<tt>Some random adage from a cow</tt>".to_string(),
                "<tt>Courtesy of fortune and cowsay</tt>".to_string(),
                cow_fortune(tools),
                String::new(),
            ),
            EasterEgg::Reo => (
                "<tt>Reo</tt>".to_string(),
                "<tt>/ɹˈiːəʊ/</tt>".to_string(),
                "<tt><i>Japanese Word</i><br>  \
                 <b>1:</b> Name of this application, chosen kind of at random.<br>  \
                 <b>2:</b> Japanese word meaning 'Wise Center'</tt>"
                    .to_string(),
                format!(
                    "<tt> <b>Similar Words:</b><br> <i><font color=\"{}\">  ro, re, roe, redo, \
                     reno, oreo, ceo, leo, neo, rho, rio, reb, red, ref, rem, rep, res, ret, \
                     rev, rex</font></i></tt>",
                    palette.word
                ),
            ),
            EasterEgg::WordNetInfo(entry) => {
                let version = info::detect_wordnet(tools).unwrap_or(WordNetVersion::V3_1);
                (
                    format!("<tt>{entry}</tt>"),
                    String::new(),
                    format!("<tt> Running Reo with WordNet {version}</tt>"),
                    String::new(),
                )
            }
        };

        LookupResult {
            term,
            pronunciation,
            definition: markup::for_dialect(&definition, dialect),
            close: markup::for_dialect(&close, dialect),
            found: true,
            dialect,
        }
    }
}

fn fortune_text(tools: &Tools) -> Option<String> {
    match tools.fortune() {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("{}\n{}", FORTUNE_FAIL, e);
            None
        }
    }
}

fn fortune(tools: &Tools) -> String {
    teletype(&fortune_text(tools).unwrap_or_else(|| FORTUNE_FAIL.to_string()))
}

fn cow_fortune(tools: &Tools) -> String {
    let cow = fortune_text(tools).and_then(|text| match tools.cowsay(text.trim_end()) {
        Ok(cow) => Some(cow),
        Err(e) => {
            tracing::warn!("{}\n{}", COW_FORTUNE_FAIL, e);
            None
        }
    });

    teletype(&cow.unwrap_or_else(|| COW_FORTUNE_FAIL.to_string()))
}
