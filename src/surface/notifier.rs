//! Fire-and-forget toasts.

use std::fmt::Display;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl Display for ToastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Info => f.write_str("info"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One transient message shown to the seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// The notification surface. No return value, no acknowledgment.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);

    fn success(&self, message: &str) {
        self.notify(Toast::new(ToastLevel::Success, message));
    }

    fn info(&self, message: &str) {
        self.notify(Toast::new(ToastLevel::Info, message));
    }

    fn error(&self, message: &str) {
        self.notify(Toast::new(ToastLevel::Error, message));
    }
}

/// Writes toasts to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => warn!(level = %toast.level, "{}", toast.message),
            _ => info!(level = %toast.level, "{}", toast.message),
        }
    }
}

/// Keeps every toast in memory, in the order shown.
///
/// Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Toasts of one level.
    pub fn of_level(&self, level: ToastLevel) -> Vec<Toast> {
        self.toasts()
            .into_iter()
            .filter(|toast| toast.level == level)
            .collect()
    }

    pub fn errors(&self) -> Vec<Toast> {
        self.of_level(ToastLevel::Error)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order_and_levels() {
        let notifier = RecordingNotifier::new();
        let shared = notifier.clone();

        notifier.success("saved");
        shared.error("failed");
        notifier.info("fyi");

        let levels: Vec<ToastLevel> = notifier.toasts().iter().map(|t| t.level).collect();
        assert_eq!(
            levels,
            vec![ToastLevel::Success, ToastLevel::Error, ToastLevel::Info]
        );
        assert_eq!(notifier.errors(), vec![Toast::new(ToastLevel::Error, "failed")]);
    }
}
