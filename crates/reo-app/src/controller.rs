use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender};
use reo_types::{AppEvent, UiSettings};
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the backend thread and the channels between it and the window
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Run the event loop on a tokio runtime in its own thread
    pub fn spawn_backend(&self) -> anyhow::Result<JoinHandle<()>> {
        let state = self.state.clone();
        let ui_to_app_rx = self.channels.ui_to_app.1.clone();
        let app_to_ui_tx = self.channels.app_to_ui.0.clone();
        let cancel = self.cancel_token.child_token();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("building the tokio runtime")?;

        std::thread::Builder::new()
            .name("reo-backend".into())
            .spawn(move || {
                runtime.block_on(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            tracing::info!("Backend shutdown requested");
                        }
                        result = event_loop(state, ui_to_app_rx, app_to_ui_tx) => {
                            if let Err(e) = result {
                                tracing::error!("event_loop exited: {e}");
                            }
                        }
                    }
                });
                // A hung tool must not keep the process alive
                runtime.shutdown_timeout(Duration::from_secs(1));
            })
            .context("spawning the backend thread")
    }

    /// Block on the Slint event loop until the window closes
    pub fn run_ui(&self, settings: UiSettings) -> anyhow::Result<()> {
        reo_ui::run_ui(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            settings,
            reo_core::info::VERSION,
        )
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
