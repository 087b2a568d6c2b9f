use std::sync::Arc;

use anyhow::Context;
use kanal::AsyncSender;
use reo_core::WordList;
use reo_types::AppEvent;

use super::search::search_text;
use crate::state::AppState;

pub async fn handle_random_word(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let path = state.config.read().await.dictionary.wordlist.clone();
    let word = state
        .wordlist
        .get_or_try_init(|| load_wordlist(path))
        .await?
        .choose()
        .map(str::to_string);

    match word {
        Some(word) => {
            tracing::info!("Random word: '{}'", word);
            search_text(state, word, app_to_ui_tx).await
        }
        None => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate("The word list is empty".to_string()))
                .await?;
            Ok(())
        }
    }
}

async fn load_wordlist(path: String) -> anyhow::Result<WordList> {
    let words = {
        let path = path.clone();
        tokio::task::spawn_blocking(move || WordList::load(path)).await?
    };
    words.with_context(|| format!("Could not read the word list at {path}"))
}
