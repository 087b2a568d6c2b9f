use arboard::Clipboard;

/// Text currently on the regular clipboard
pub fn clipboard_text() -> Result<String, anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

/// Text currently selected anywhere on screen.
///
/// Uses the X11/Wayland primary selection on Linux and the regular clipboard
/// elsewhere.
#[cfg(target_os = "linux")]
pub fn selection_text() -> Result<String, anyhow::Error> {
    use arboard::{GetExtLinux, LinuxClipboardKind};

    let mut clipboard = Clipboard::new()?;
    let text = clipboard
        .get()
        .clipboard(LinuxClipboardKind::Primary)
        .text()?;
    Ok(clean_selection(&text))
}

#[cfg(not(target_os = "linux"))]
pub fn selection_text() -> Result<String, anyhow::Error> {
    tracing::debug!("No primary selection on this platform, using clipboard");
    Ok(clean_selection(&clipboard_text()?))
}

/// Undo the hard wrapping picked up when selecting text from the definition view
pub fn clean_selection(text: &str) -> String {
    text.replace("         ", "").replace('\n', "")
}

/// Whether clipboard text is worth searching
pub fn has_text(text: &str) -> bool {
    !text.trim().is_empty()
}
