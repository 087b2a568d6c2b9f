use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use reo_config::Config;
use reo_core::tools::fake::FakeRunner;
use reo_types::{AppEvent, DisplayResult, UiSettings};
use tempfile::TempDir;
use tokio::time::timeout;

use crate::events::clipboard::search_from;
use crate::events::event_loop;
use crate::profile::ProfileStore;
use crate::state::AppState;

const WALK: &str = "1 definition found\n\nFrom WordNet (r) 3.0 (2006) [wn]:\n\n  walk\n      v 1: use one's feet to advance; \"walk to the store\"\n";

fn walk_runner() -> FakeRunner {
    FakeRunner::new()
        .with_output("dict -d wn test", "1 definition found\n\nFrom WordNet (r) 3.0 (2006) [wn]:\n")
        .with_output("dict -d wn walk", WALK)
        .with_output("espeak-ng -ven-uk-rp --ipa -q walk", " wˈɔːk\n")
        .with_output("dict -m -d wn -s lev walk", "wn:  walk  walks\n")
        .with_output("fortune -a", "Fools rush in.\n")
}

struct Harness {
    to_app: AsyncSender<AppEvent>,
    from_app: AsyncReceiver<AppEvent>,
    runner: Arc<FakeRunner>,
    state: Arc<AppState>,
    _dir: TempDir,
}

impl Harness {
    async fn start(runner: FakeRunner, config: Config) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        store.init().unwrap();

        let runner = Arc::new(runner);
        let state = Arc::new(AppState::new(config, runner.clone(), store, "main"));

        let (to_app, ui_to_app_rx) = kanal::unbounded_async();
        let (app_to_ui_tx, from_app) = kanal::unbounded_async();
        tokio::spawn(event_loop(state.clone(), ui_to_app_rx, app_to_ui_tx));

        let harness = Self {
            to_app,
            from_app,
            runner,
            state,
            _dir: dir,
        };

        // Startup ends with BackendReady
        loop {
            if let AppEvent::BackendReady = harness.next().await {
                break;
            }
        }
        harness
    }

    async fn next(&self) -> AppEvent {
        timeout(Duration::from_secs(2), self.from_app.recv())
            .await
            .expect("timed out waiting for the backend")
            .expect("backend channel closed")
    }

    async fn send(&self, event: AppEvent) {
        self.to_app.send(event).await.unwrap();
    }

    async fn search(&self, text: &str, force: bool) {
        self.send(AppEvent::Search {
            text: text.to_string(),
            force,
        })
        .await;
    }

    async fn next_result(&self) -> DisplayResult {
        match self.next().await {
            AppEvent::ShowResult(result) => result,
            other => panic!("expected a result, got {other:?}"),
        }
    }

    fn count_calls(&self, command_line: &str) -> usize {
        self.runner
            .calls()
            .iter()
            .filter(|call| call.as_str() == command_line)
            .count()
    }
}

#[tokio::test]
async fn test_startup_announces_welcome_then_ready() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    let state = Arc::new(AppState::new(
        Config::default(),
        Arc::new(walk_runner()),
        store,
        "main",
    ));

    let (_to_app, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_to_ui_tx, from_app) = kanal::unbounded_async();
    tokio::spawn(event_loop(state, ui_to_app_rx, app_to_ui_tx));

    let first = timeout(Duration::from_secs(2), from_app.recv()).await.unwrap().unwrap();
    let second = timeout(Duration::from_secs(2), from_app.recv()).await.unwrap().unwrap();
    assert!(matches!(first, AppEvent::ShowWelcome));
    assert!(matches!(second, AppEvent::BackendReady));
}

#[tokio::test]
async fn test_unknown_wordnet_is_reported() {
    let runner = FakeRunner::new().with_output("dict -d wn test", "no definitions found");
    let dir = tempfile::tempdir().unwrap();
    let state = Arc::new(AppState::new(
        Config::default(),
        Arc::new(runner),
        ProfileStore::new(dir.path()),
        "main",
    ));

    let (_to_app, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_to_ui_tx, from_app) = kanal::unbounded_async();
    tokio::spawn(event_loop(state, ui_to_app_rx, app_to_ui_tx));

    let first = timeout(Duration::from_secs(2), from_app.recv()).await.unwrap().unwrap();
    match first {
        AppEvent::StatusUpdate(status) => assert!(status.contains("WordNet")),
        other => panic!("expected a status update, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_shows_plain_result() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("walk", false).await;

    let result = harness.next_result().await;
    assert_eq!(result.term, "walk");
    assert!(result.pronunciation.contains("/wˈɔːk/"));
    assert!(result.definition.contains("walk to the store"));
    assert!(!result.definition.contains('<'));
    assert!(result.similar.unwrap().contains("walks"));
    assert!(result.speakable);
}

#[tokio::test]
async fn test_repeated_search_is_skipped_unless_forced() {
    let harness = Harness::start(walk_runner(), Config::default()).await;

    harness.search("walk", false).await;
    harness.next_result().await;
    harness.search("walk", false).await;
    harness.search("walk", true).await;
    harness.next_result().await;

    assert_eq!(harness.count_calls("dict -d wn walk"), 2);
}

#[tokio::test]
async fn test_fortune_always_reruns_without_speech() {
    let harness = Harness::start(walk_runner(), Config::default()).await;

    harness.search("fortune -a", false).await;
    let first = harness.next_result().await;
    harness.search("fortune -a", false).await;
    let second = harness.next_result().await;

    assert!(!first.speakable);
    assert!(second.definition.contains("Fools rush in."));
    assert_eq!(harness.count_calls("fortune -a"), 2);
    assert!(!harness.runner.called("espeak-ng"));
}

#[tokio::test]
async fn test_invalid_input_error() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("  !?!  ", false).await;

    assert!(matches!(harness.next().await, AppEvent::ShowWelcome));
    match harness.next().await {
        AppEvent::ShowError { title, .. } => assert_eq!(title, "Invalid Input"),
        other => panic!("expected an error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_repeated_invalid_input_errors_every_time() {
    let harness = Harness::start(walk_runner(), Config::default()).await;

    for _ in 0..2 {
        harness.search("!?!", false).await;
        assert!(matches!(harness.next().await, AppEvent::ShowWelcome));
        assert!(matches!(harness.next().await, AppEvent::ShowError { .. }));
    }
    assert_eq!(harness.state.session.lock().await.last_term(), None);
}

#[tokio::test]
async fn test_whitespace_search_shows_welcome() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("walk", false).await;
    harness.next_result().await;

    harness.search(" \t\n ", false).await;
    assert!(matches!(harness.next().await, AppEvent::ShowWelcome));

    // The blank search reset the session, so the same term runs again
    harness.search("walk", false).await;
    harness.next_result().await;
    assert_eq!(harness.count_calls("dict -d wn walk"), 2);
}

#[tokio::test]
async fn test_surrounding_whitespace_is_not_a_new_term() {
    let harness = Harness::start(walk_runner(), Config::default()).await;

    harness.search("walk", false).await;
    harness.next_result().await;
    harness.search("  walk ", false).await;
    harness.search("fortune -a", false).await;
    harness.next_result().await;

    assert_eq!(harness.count_calls("dict -d wn walk"), 1);
    assert_eq!(
        harness.state.session.lock().await.last_term(),
        Some("fortune -a")
    );
}

#[tokio::test]
async fn test_live_search_is_silent_on_invalid_input() {
    let mut config = Config::default();
    config.ui.live_search = true;
    let harness = Harness::start(walk_runner(), config).await;

    harness.send(AppEvent::TextEdited("!!".to_string())).await;
    harness.send(AppEvent::TextEdited("walk".to_string())).await;

    assert_eq!(harness.next_result().await.term, "walk");
}

#[tokio::test]
async fn test_edits_ignored_without_live_search() {
    let harness = Harness::start(walk_runner(), Config::default()).await;

    harness.send(AppEvent::TextEdited("walk".to_string())).await;
    harness.search("fortune -a", false).await;

    harness.next_result().await;
    assert!(!harness.runner.called("espeak-ng"));
}

#[tokio::test]
async fn test_empty_search_shows_welcome() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("walk", false).await;
    harness.next_result().await;
    harness.search("", false).await;

    assert!(matches!(harness.next().await, AppEvent::ShowWelcome));
}

#[tokio::test]
async fn test_clear_forgets_last_term() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("walk", false).await;
    harness.next_result().await;

    harness.send(AppEvent::Clear).await;
    assert!(matches!(harness.next().await, AppEvent::ShowWelcome));
    match harness.next().await {
        AppEvent::SetSearchText(text) => assert!(text.is_empty()),
        other => panic!("expected the search box to be cleared, got {other:?}"),
    }

    harness.search("walk", false).await;
    harness.next_result().await;
    assert_eq!(harness.count_calls("dict -d wn walk"), 2);
}

#[tokio::test]
async fn test_close_now_closes_window() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("close now", false).await;

    assert!(matches!(harness.next().await, AppEvent::CloseWindow));
}

#[tokio::test]
async fn test_speak_last_term() {
    let harness = Harness::start(walk_runner(), Config::default()).await;

    // Nothing searched yet, nothing spoken
    harness.send(AppEvent::Speak).await;
    harness.search("walk", false).await;
    harness.next_result().await;
    harness.send(AppEvent::Speak).await;
    harness.send(AppEvent::Clear).await;
    harness.next().await;

    assert_eq!(harness.count_calls("espeak-ng -ven-uk-rp -s 120 walk"), 1);
}

#[tokio::test]
async fn test_failed_lookup_keeps_display() {
    let harness = Harness::start(walk_runner().missing("espeak-ng"), Config::default()).await;
    harness.search("walk", false).await;

    match harness.next().await {
        AppEvent::StatusUpdate(status) => assert!(status.starts_with("Lookup failed")),
        other => panic!("expected a status update, got {other:?}"),
    }
}

#[tokio::test]
async fn test_settings_change_reruns_and_persists() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("walk", false).await;
    harness.next_result().await;

    let settings = UiSettings {
        dark_font: true,
        live_search: false,
        custom_definitions: false,
    };
    harness.send(AppEvent::ConfigChanged(settings)).await;
    harness.next_result().await;

    assert_eq!(harness.count_calls("dict -d wn walk"), 2);
    assert!(harness.state.config.read().await.ui.dark_font);
    assert!(harness.state.store.load("main").unwrap().ui.dark_font);
}

#[tokio::test]
async fn test_custom_definitions_toggle() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    std::fs::write(
        harness.state.store.cdef_dir().join("walk.json"),
        r#"{ "definition": "my own walk" }"#,
    )
    .unwrap();

    harness.search("walk", false).await;
    assert!(harness.next_result().await.definition.contains("walk to the store"));

    let settings = UiSettings {
        custom_definitions: true,
        ..Default::default()
    };
    harness.send(AppEvent::ConfigChanged(settings)).await;

    assert_eq!(harness.next_result().await.definition, "my own walk");
    assert_eq!(harness.count_calls("dict -d wn walk"), 1);
}

#[tokio::test]
async fn test_clipboard_text_is_searched() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    let (tx, rx) = kanal::unbounded_async();

    search_from(harness.state.clone(), Ok("walk".to_string()), "clipboard", &tx)
        .await
        .unwrap();

    match rx.recv().await.unwrap() {
        AppEvent::SetSearchText(text) => assert_eq!(text, "walk"),
        other => panic!("expected the search box to be filled, got {other:?}"),
    }
    assert!(matches!(rx.recv().await.unwrap(), AppEvent::ShowResult(_)));
}

#[tokio::test]
async fn test_empty_clipboard_reports_status() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    let (tx, rx) = kanal::unbounded_async();

    search_from(harness.state.clone(), Ok("  \n".to_string()), "clipboard", &tx)
        .await
        .unwrap();
    search_from(
        harness.state.clone(),
        Err(anyhow::anyhow!("no display")),
        "selection",
        &tx,
    )
    .await
    .unwrap();

    match rx.recv().await.unwrap() {
        AppEvent::StatusUpdate(status) => assert_eq!(status, "Nothing to search in the clipboard"),
        other => panic!("expected a status update, got {other:?}"),
    }
    match rx.recv().await.unwrap() {
        AppEvent::StatusUpdate(status) => assert_eq!(status, "Could not read the selection"),
        other => panic!("expected a status update, got {other:?}"),
    }
}

#[tokio::test]
async fn test_result_body_follows_dark_font() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("walk", false).await;
    let light = harness.next_result().await;

    let settings = UiSettings {
        dark_font: true,
        ..Default::default()
    };
    harness.send(AppEvent::ConfigChanged(settings)).await;
    let dark = harness.next_result().await;

    assert_eq!(light.definition, dark.definition);
    assert_ne!(light.body, dark.body);
}

#[tokio::test]
async fn test_link_searches_word() {
    let harness = Harness::start(walk_runner(), Config::default()).await;
    harness.search("walk", false).await;
    let result = harness.next_result().await;

    let link = result
        .body
        .iter()
        .flat_map(|line| &line.spans)
        .find_map(|span| span.link.clone())
        .unwrap();
    assert_eq!(link, "walks");

    harness.send(AppEvent::LinkActivated(link)).await;
    match harness.next().await {
        AppEvent::SetSearchText(text) => assert_eq!(text, "walks"),
        other => panic!("expected the search box to be filled, got {other:?}"),
    }
    harness.next_result().await;
    assert_eq!(harness.count_calls("dict -d wn walks"), 1);
}

#[tokio::test]
async fn test_random_word_is_searched() {
    let mut words = tempfile::NamedTempFile::new().unwrap();
    writeln!(words, "\nwalk\n").unwrap();
    let mut config = Config::default();
    config.dictionary.wordlist = words.path().display().to_string();
    let harness = Harness::start(walk_runner(), config).await;

    harness.send(AppEvent::RandomWord).await;
    match harness.next().await {
        AppEvent::SetSearchText(text) => assert_eq!(text, "walk"),
        other => panic!("expected the search box to be filled, got {other:?}"),
    }
    assert_eq!(harness.next_result().await.term, "walk");
    assert_eq!(harness.state.wordlist.get().map(|words| words.len()), Some(1));
}

#[tokio::test]
async fn test_missing_word_list_reports_status() {
    let mut config = Config::default();
    config.dictionary.wordlist = "/nonexistent/reo/words".to_string();
    let harness = Harness::start(walk_runner(), config).await;

    harness.send(AppEvent::RandomWord).await;
    match harness.next().await {
        AppEvent::StatusUpdate(status) => {
            assert!(status.starts_with("Could not read the word list at /nonexistent/reo/words"))
        }
        other => panic!("expected a status update, got {other:?}"),
    }
    assert!(harness.state.wordlist.get().is_none());
}
