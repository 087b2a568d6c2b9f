use std::sync::Arc;

use kanal::AsyncSender;
use reo_core::sanitize;
use reo_types::AppEvent;

use crate::state::AppState;

/// Read the last searched term aloud
pub async fn handle_speak(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let term = state.session.lock().await.last_term().map(sanitize);
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        tracing::debug!("Nothing to speak");
        return Ok(());
    };

    let tools = state.tools().await;
    if let Err(e) = tokio::task::spawn_blocking(move || tools.speak(&term)).await? {
        tracing::warn!("Speech playback failed: {}", e);
        app_to_ui_tx
            .send(AppEvent::StatusUpdate(
                "Speech playback is unavailable. Install espeak-ng.".to_string(),
            ))
            .await?;
    }

    Ok(())
}
