//! Yes/no confirmation capability.
//!
//! The dialog is a trait so UI code and tests decide how a question gets
//! answered; the browser implementation blocks on the native dialog.

pub trait ConfirmPrompt {
    /// Ask the user a yes/no question, `true` meaning "proceed".
    fn confirm(&self, message: &str) -> bool;
}

/// Native browser dialog via `window.confirm`.
///
/// Answers `false` when no window is available or the call fails.
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        if let Some(win) = web_sys::window() {
            win.confirm_with_message(message).unwrap_or(false)
        } else {
            false
        }
    }
}
