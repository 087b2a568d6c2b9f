use kanal::{AsyncReceiver, AsyncSender};
use reo_types::{AppEvent, UiSettings};
use slint::ComponentHandle;

pub mod events;

slint::include_modules!();

/// Forward an event to the backend without blocking the UI thread
fn send_to_app(tx: &AsyncSender<AppEvent>, event: AppEvent) {
    let tx = tx.clone();
    if let Err(e) = slint::spawn_local(async move {
        if let Err(e) = tx.send(event).await {
            tracing::error!("[SLINT] Failed to send event to app: {}", e);
        }
    }) {
        tracing::error!("[SLINT] Failed to schedule send: {}", e);
    }
}

/// Build the window and run the Slint event loop on the current thread.
///
/// Returns once the window is closed or the backend asks to quit.
pub fn run_ui(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    settings: UiSettings,
    version: &str,
) -> anyhow::Result<()> {
    let window = ReoWindow::new()?;

    window.set_version(version.into());

    window.set_dark_font(settings.dark_font);
    window.set_live_search(settings.live_search);
    window.set_custom_definitions(settings.custom_definitions);

    {
        let tx = ui_to_app_tx.clone();
        window.on_search(move |text| {
            send_to_app(
                &tx,
                AppEvent::Search {
                    text: text.to_string(),
                    force: false,
                },
            );
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_edited(move |text| send_to_app(&tx, AppEvent::TextEdited(text.to_string())));
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_speak(move || send_to_app(&tx, AppEvent::Speak));
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_clear(move || send_to_app(&tx, AppEvent::Clear));
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_paste_search(move || send_to_app(&tx, AppEvent::PasteSearch));
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_selection_search(move || send_to_app(&tx, AppEvent::SelectionSearch));
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_link_clicked(move |word| {
            send_to_app(&tx, AppEvent::LinkActivated(word.to_string()));
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_random_word(move || send_to_app(&tx, AppEvent::RandomWord));
    }

    window.on_is_printable(|text| events::is_quick_search_key(&text));

    {
        let tx = ui_to_app_tx.clone();
        window.on_settings_changed(move |dark_font, live_search, custom_definitions| {
            send_to_app(
                &tx,
                AppEvent::ConfigChanged(UiSettings {
                    dark_font,
                    live_search,
                    custom_definitions,
                }),
            );
        });
    }

    // Backend events are applied from the Slint event loop, never from the
    // backend threads directly
    let window_weak = window.as_weak();
    slint::spawn_local(async move {
        while let Ok(event) = app_to_ui_rx.recv().await {
            if !events::handle_events(event, window_weak.clone()) {
                break;
            }
        }
        tracing::debug!("[SLINT] Backend channel closed");
    })?;

    window.run()?;

    Ok(())
}
