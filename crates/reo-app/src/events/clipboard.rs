use std::sync::Arc;

use kanal::AsyncSender;
use reo_io::clipboard;
use reo_types::AppEvent;

use super::search::search_text;
use crate::state::AppState;

pub async fn handle_paste_search(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = tokio::task::spawn_blocking(clipboard::clipboard_text).await?;
    search_from(state, text, "clipboard", app_to_ui_tx).await
}

pub async fn handle_selection_search(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = tokio::task::spawn_blocking(clipboard::selection_text).await?;
    search_from(state, text, "selection", app_to_ui_tx).await
}

/// Search text taken from the clipboard or the primary selection
pub async fn search_from(
    state: Arc<AppState>,
    text: anyhow::Result<String>,
    source: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match text {
        Ok(text) if clipboard::has_text(&text) => {
            tracing::debug!("Searching {} text: {} chars", source, text.len());
            search_text(state, text, app_to_ui_tx).await
        }
        Ok(_) => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Nothing to search in the {source}")))
                .await?;
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Reading the {} failed: {}", source, e);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Could not read the {source}")))
                .await?;
            Ok(())
        }
    }
}
