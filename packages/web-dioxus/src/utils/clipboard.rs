//! Clipboard access for the copy-reply control.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    /// No async clipboard in this context (non-secure origin, old
    /// browser, or a non-browser build).
    #[error("Clipboard unavailable")]
    Unavailable,

    /// The browser refused the write (permissions, document focus).
    #[error("Clipboard write failed")]
    WriteFailed,
}

/// Write `text` to the system clipboard.
#[cfg(target_arch = "wasm32")]
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();

    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|_| ClipboardError::WriteFailed)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_text(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable)
}
