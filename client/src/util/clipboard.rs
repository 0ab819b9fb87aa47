//! System clipboard writes.

/// Failure writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `value` to the system clipboard.
///
/// # Errors
///
/// `Unavailable` when there is no clipboard (or no browser), `Rejected` when
/// the browser refuses the write (permissions, insecure context).
pub async fn write_text(value: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let clipboard = web_sys::window()
            .and_then(|w| w.navigator().clipboard())
            .ok_or(ClipboardError::Unavailable)?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(value))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
        Err(ClipboardError::Unavailable)
    }
}
