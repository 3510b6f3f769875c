//! Notifications
//!
//! Transient, fire-and-forget user messages. Handlers build a
//! [`NotificationEvent`] and hand it to a [`NotificationSink`]; the sink owns
//! display and dismissal from then on.

mod toaster;

pub use toaster::*;

use std::fmt;

/// Notification kind, drives the toast icon and accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single notification, built at the moment a handler fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

impl NotificationEvent {
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    /// Attach a secondary line of text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One-way destination for notifications
///
/// Delivery is attempted immediately; nothing is reported back to the caller.
pub trait NotificationSink {
    fn notify(&mut self, event: NotificationEvent);
}

/// Recording sink, keeps every event in emission order
impl NotificationSink for Vec<NotificationEvent> {
    fn notify(&mut self, event: NotificationEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(NotificationEvent::success("a").kind, NotificationKind::Success);
        assert_eq!(NotificationEvent::error("a").kind, NotificationKind::Error);
        assert_eq!(NotificationEvent::info("a").kind, NotificationKind::Info);
    }

    #[test]
    fn test_description_is_optional() {
        let plain = NotificationEvent::info("Heads up");
        assert_eq!(plain.description, None);

        let detailed = plain.with_description("More detail");
        assert_eq!(detailed.title, "Heads up");
        assert_eq!(detailed.description.as_deref(), Some("More detail"));
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<NotificationEvent> = Vec::new();
        sink.notify(NotificationEvent::info("first"));
        sink.notify(NotificationEvent::error("second"));
        let titles: Vec<&str> = sink.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }
}
