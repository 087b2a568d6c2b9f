use std::sync::Arc;

use clap::Parser;
use reo_core::{CommandRunner, SystemRunner};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod cli;
pub mod controller;
pub mod events;
pub mod profile;
pub mod search;
pub mod state;


use self::cli::Cli;
use self::controller::AppController;
use self::profile::ProfileStore;
use self::state::AppState;

fn init_tracing(verbose: bool) {
    let filter = if verbose { "reo=debug" } else { "reo=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProfileStore::default_root()?,
    };
    let store = ProfileStore::new(root);
    store.init()?;

    let config = store.load(&cli.profile)?.with_env_overrides();
    tracing::debug!("Loaded profile {}: {:?}", cli.profile, config);

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);

    match cli.command {
        Some(command) => cli::run(command, config, runner, &store),
        None => {
            let settings = config.ui_settings();
            let state = Arc::new(AppState::new(config, runner, store, cli.profile));
            run_gui(state, settings)
        }
    }
}

fn run_gui(state: Arc<AppState>, settings: reo_types::UiSettings) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let backend = controller.spawn_backend()?;

    let result = controller.run_ui(settings);

    controller.shutdown();
    if backend.join().is_err() {
        tracing::error!("Backend thread panicked");
    }

    result
}
