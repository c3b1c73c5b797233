//! Notifier Port (Driven Port)
//!
//! Replaces the app-wide alert dialog context with an injected service.

use parking_lot::Mutex;
use serde::Serialize;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
}

impl Notice {
    /// Success notice.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Failure notice.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Port for showing notices to the user.
pub trait NotifierPort: Send + Sync {
    /// Show a notice. Fire-and-forget.
    fn notify(&self, notice: Notice);
}

/// Notifier that keeps every notice in memory.
///
/// Used by tests and by the command-line shell, which prints them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices shown so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Most recent notice.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }

    /// Remove and return all notices.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(kind = ?notice.kind, title = %notice.title, "Notice shown");
        self.notices.lock().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::success("a", "first"));
        notifier.notify(Notice::error("b", "second"));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message, "first");
        assert_eq!(notifier.last().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn drain_empties() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::success("ok", "done"));
        assert_eq!(notifier.drain().len(), 1);
        assert!(notifier.notices().is_empty());
        assert!(notifier.last().is_none());
    }
}
