use std::sync::Arc;

use kanal::AsyncSender;
use reo_types::{AppEvent, UiSettings};

use super::search::handle_search;
use crate::state::AppState;

/// Apply window toggles, persist them and redraw the last search
pub async fn handle_config_changed(
    state: Arc<AppState>,
    settings: UiSettings,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Settings changed: {:?}", settings);
    state.config.write().await.apply_ui_settings(settings);

    // Only the toggles are written back, env overrides stay out of the profile
    let store = state.store.clone();
    let profile = state.profile.clone();
    let saved = tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let mut stored = store.load(&profile)?;
        stored.apply_ui_settings(settings);
        store.save(&profile, &stored)?;
        Ok(())
    })
    .await?;
    if let Err(e) = saved {
        tracing::warn!("Failed to save profile: {e:#}");
    }

    let last_term = state.session.lock().await.last_term().map(str::to_string);
    if let Some(text) = last_term {
        handle_search(state, text, true, true, app_to_ui_tx).await?;
    }

    Ok(())
}
