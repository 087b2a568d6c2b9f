use std::sync::Arc;

use kanal::AsyncSender;
use reo_core::sanitize::is_searchable;
use reo_core::{MarkupDialect, Palette, sanitize};
use reo_types::AppEvent;

use crate::search::{Resolution, resolve};
use crate::state::AppState;

const INVALID_INPUT: &str = "Invalid Input";
const INVALID_INPUT_MESSAGE: &str = "Reo thinks that your input was actually just a bunch of \
     useless characters. And so, an 'Invalid Input' error.";

/// Put `text` in the search box and search it as if it had been typed
pub async fn search_text(
    state: Arc<AppState>,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::SetSearchText(text.clone()))
        .await?;
    handle_search(state, text, false, false, app_to_ui_tx).await
}

/// Search `text` and push the outcome to the window.
///
/// `live` marks searches nobody explicitly asked for (typing, settings
/// changes), which never raise the invalid input error.
pub async fn handle_search(
    state: Arc<AppState>,
    text: String,
    force: bool,
    live: bool,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = text.trim();
    if text.is_empty() {
        state.session.lock().await.forget();
        app_to_ui_tx.send(AppEvent::ShowWelcome).await?;
        return Ok(());
    }

    if !state.session.lock().await.begin(text, force) {
        tracing::debug!("Skipping repeated search for '{}'", text);
        return Ok(());
    }

    let term = sanitize(text);
    if !is_searchable(&term) {
        // Nothing valid was searched, so the same input must error again
        state.session.lock().await.forget();
        if !live {
            app_to_ui_tx.send(AppEvent::ShowWelcome).await?;
            app_to_ui_tx
                .send(AppEvent::ShowError {
                    title: INVALID_INPUT.to_string(),
                    message: INVALID_INPUT_MESSAGE.to_string(),
                })
                .await?;
        }
        return Ok(());
    }

    let (palette, custom_enabled) = {
        let config = state.config.read().await;
        (
            Palette::for_dark_font(config.ui.dark_font),
            config.dictionary.custom_definitions,
        )
    };
    let tools = state.tools().await;
    let custom = custom_enabled.then(|| state.custom_definitions());

    tracing::info!("Searching for '{}'", term);
    let resolved = {
        let term = term.clone();
        let palette = palette.clone();
        tokio::task::spawn_blocking(move || {
            resolve(
                &term,
                tools,
                custom.as_ref(),
                &palette,
                MarkupDialect::Html,
            )
        })
        .await?
    };

    match resolved {
        Ok(Resolution::Show { result, speakable }) => {
            app_to_ui_tx
                .send(AppEvent::ShowResult(result.to_display(speakable, &palette)))
                .await?;
        }
        Ok(Resolution::Exit) => {
            tracing::info!("Exit requested through search");
            app_to_ui_tx.send(AppEvent::CloseWindow).await?;
        }
        Err(e) => {
            // Keep whatever is on screen
            tracing::warn!("Lookup for '{}' failed: {}", term, e);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Lookup failed: {e}")))
                .await?;
        }
    }

    Ok(())
}
