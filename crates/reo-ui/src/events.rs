use reo_types::{AppEvent, StyledLine, StyledSpan};
use slint::{Color, ComponentHandle, ModelRc, VecModel, Weak};

use crate::{LineItem, ReoWindow, SpanItem};

/// Resolve the color names and `#rrggbb` values the markup uses
fn parse_color(name: &str) -> Option<Color> {
    let rgb = match name.trim().to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "blue" => (0, 0, 255),
        "green" => (0, 128, 0),
        "cyan" => (0, 255, 255),
        "lightgreen" => (144, 238, 144),
        "gray" | "grey" => (128, 128, 128),
        hex => {
            let hex = hex.strip_prefix('#')?;
            if hex.len() != 6 {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            (channel(0)?, channel(2)?, channel(4)?)
        }
    };
    Some(Color::from_rgb_u8(rgb.0, rgb.1, rgb.2))
}

fn span_item(span: &StyledSpan) -> SpanItem {
    let color = span.color.as_deref().and_then(parse_color);
    if color.is_none() && span.color.is_some() {
        tracing::debug!("[SLINT] Unknown color {:?}", span.color);
    }

    SpanItem {
        text: span.text.as_str().into(),
        color: color.unwrap_or_default(),
        has_color: color.is_some(),
        bold: span.bold,
        italic: span.italic,
        monospace: span.monospace,
        link: span.link.as_deref().unwrap_or_default().into(),
    }
}

fn line_items(body: &[StyledLine]) -> Vec<LineItem> {
    body.iter()
        .map(|line| {
            let mut spans: Vec<SpanItem> = line.spans.iter().map(span_item).collect();
            // Empty layouts collapse, keep blank lines visible
            if spans.is_empty() {
                spans.push(SpanItem {
                    text: " ".into(),
                    ..Default::default()
                });
            }
            LineItem {
                spans: ModelRc::new(VecModel::from(spans)),
            }
        })
        .collect()
}

// Slint encodes arrows, function keys and the like in the private use area
fn is_special_key(c: char) -> bool {
    c.is_control() || c.is_whitespace() || ('\u{E000}'..='\u{F8FF}').contains(&c)
}

/// Keys that start a quick search: printable text only
pub fn is_quick_search_key(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(is_special_key)
}

/// Apply one backend event to the window.
///
/// Returns `false` once the window should stop listening.
pub fn handle_events(event: AppEvent, window_weak: Weak<ReoWindow>) -> bool {
    let Some(w) = window_weak.upgrade() else {
        return false;
    };

    match event {
        AppEvent::CloseWindow => {
            let _ = w.hide();
            slint::quit_event_loop().ok();
            return false;
        }
        AppEvent::ShowResult(result) => {
            tracing::debug!("[SLINT] Showing result for {}", result.term);
            let model = std::rc::Rc::new(VecModel::from(line_items(&result.body)));
            w.set_body(model.into());
            w.set_term(result.term.into());
            w.set_pronunciation(result.pronunciation.into());
            w.set_speak_visible(result.speakable);
            w.set_show_content(true);
            w.set_status("".into());
        }
        AppEvent::ShowWelcome => {
            w.set_term("".into());
            w.set_pronunciation("".into());
            w.set_body(ModelRc::default());
            w.set_speak_visible(false);
            w.set_show_content(false);
        }
        AppEvent::SetSearchText(text) => {
            w.set_search_text(text.into());
        }
        AppEvent::ShowError { title, message } => {
            tracing::debug!("[SLINT] Error: {}", title);
            w.set_status(format!("{title}: {message}").into());
        }
        AppEvent::StatusUpdate(status) => {
            w.set_status(status.into());
        }
        AppEvent::BackendReady => {
            tracing::debug!("[SLINT] Backend ready");
            w.set_ready(true);
        }
        _ => {}
    }

    true
}
