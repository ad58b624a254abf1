//! The screen's UI collaborators: toasts, clipboard and confirmation prompts.
//!
//! Each is a trait so the host environment can plug in its own implementation; the
//! in-memory ones here back the demo binary and the tests.

pub mod clipboard;
pub mod confirm;
pub mod notifier;

pub use clipboard::*;
pub use confirm::*;
pub use notifier::*;

use std::sync::Arc;

/// Everything the screen needs from the host UI.
#[derive(Clone)]
pub struct Surface {
    pub notifier: Arc<dyn Notifier>,
    pub clipboard: Arc<dyn Clipboard>,
    pub confirm: Arc<dyn Confirm>,
}

impl Surface {
    pub fn new(
        notifier: impl Notifier + 'static,
        clipboard: impl Clipboard + 'static,
        confirm: impl Confirm + 'static,
    ) -> Self {
        Self {
            notifier: Arc::new(notifier),
            clipboard: Arc::new(clipboard),
            confirm: Arc::new(confirm),
        }
    }
}
