//! Clipboard output. Copying is best-effort: a headless session has no
//! clipboard, and the declaration has already been printed by then.

use tracing::{debug, warn};

/// Returns whether the text reached the clipboard.
pub fn copy(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            debug!(bytes = text.len(), "copied declaration to clipboard");
            true
        }
        Err(e) => {
            warn!("could not copy to clipboard: {e}");
            false
        }
    }
}
