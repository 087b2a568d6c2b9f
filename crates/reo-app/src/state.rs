use std::sync::Arc;

use reo_config::Config;
use reo_core::{CommandRunner, CustomDefinitions, SearchSession, Tools, WordList};
use tokio::sync::{Mutex, OnceCell, RwLock};

use crate::profile::ProfileStore;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: Mutex<SearchSession>,
    pub runner: Arc<dyn CommandRunner>,
    pub store: ProfileStore,
    /// Profile that settings changes are written back to
    pub profile: String,
    /// Loaded on the first random word request
    pub wordlist: OnceCell<WordList>,
}

impl AppState {
    pub fn new(
        config: Config,
        runner: Arc<dyn CommandRunner>,
        store: ProfileStore,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: Mutex::new(SearchSession::new()),
            runner,
            store,
            profile: profile.into(),
            wordlist: OnceCell::new(),
        }
    }

    /// Tools bound to a snapshot of the current config
    pub async fn tools(&self) -> Tools {
        let config = self.config.read().await;
        Tools::new(self.runner.clone(), &config)
    }

    pub fn custom_definitions(&self) -> CustomDefinitions {
        CustomDefinitions::new(self.store.cdef_dir())
    }
}
