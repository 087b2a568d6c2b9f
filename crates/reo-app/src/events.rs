use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use reo_core::info;
use reo_types::AppEvent;

use crate::state::AppState;

pub mod clipboard;
pub mod random;
pub mod search;
pub mod settings;
pub mod speak;

use clipboard::{handle_paste_search, handle_selection_search};
use random::handle_random_word;
use search::{handle_search, search_text};
use settings::handle_config_changed;
use speak::handle_speak;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    startup(&state, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );
        if let Err(e) = handle_events(state.clone(), &app_to_ui_tx, event).await {
            tracing::error!("[EVENT_LOOP] Handler failed: {e:#}");
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("{e:#}")))
                .await?;
        }
    }
}

/// Check the dictionary once and tell the window it can start searching
async fn startup(state: &AppState, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let tools = state.tools().await;
    let version = tokio::task::spawn_blocking(move || info::detect_wordnet(&tools)).await?;

    match version {
        Some(version) => tracing::info!("Using WordNet {}", version),
        None => {
            tracing::warn!("Unknown WordNet release, definitions may render oddly");
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(
                    "Could not detect WordNet 3.0 or 3.1. \
                     Make sure dictd and the 'wn' database are installed."
                        .to_string(),
                ))
                .await?;
        }
    }

    app_to_ui_tx.send(AppEvent::ShowWelcome).await?;
    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    Ok(())
}

pub async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Search { text, force } => {
            handle_search(state, text, force, false, app_to_ui_tx).await?;
        }
        AppEvent::TextEdited(text) => {
            let live_search = state.config.read().await.ui.live_search;
            if live_search {
                handle_search(state, text, false, true, app_to_ui_tx).await?;
            }
        }
        AppEvent::LinkActivated(word) => {
            search_text(state, word, app_to_ui_tx).await?;
        }
        AppEvent::RandomWord => {
            handle_random_word(state, app_to_ui_tx).await?;
        }
        AppEvent::Speak => {
            handle_speak(state, app_to_ui_tx).await?;
        }
        AppEvent::Clear => {
            state.session.lock().await.forget();
            app_to_ui_tx.send(AppEvent::ShowWelcome).await?;
            app_to_ui_tx.send(AppEvent::SetSearchText(String::new())).await?;
        }
        AppEvent::PasteSearch => {
            handle_paste_search(state, app_to_ui_tx).await?;
        }
        AppEvent::SelectionSearch => {
            handle_selection_search(state, app_to_ui_tx).await?;
        }
        AppEvent::ConfigChanged(settings) => {
            handle_config_changed(state, settings, app_to_ui_tx).await?;
        }
        AppEvent::ShowResult(_)
        | AppEvent::ShowWelcome
        | AppEvent::SetSearchText(_)
        | AppEvent::ShowError { .. }
        | AppEvent::StatusUpdate(_)
        | AppEvent::BackendReady
        | AppEvent::CloseWindow => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
