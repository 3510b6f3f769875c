//! Showcase Controller
//!
//! Page state and the actions behind each showcase button. Kept free of
//! GPUI types so the behavior can be exercised without a window.

use tracing::debug;

use crate::notifications::{NotificationEvent, NotificationSink};

/// Shown in the dialog body before anything is typed
pub const EMPTY_TEXT_FALLBACK: &str = "nothing yet";

pub const PRIMARY_ACTION_TITLE: &str = "Action completed!";
pub const PRIMARY_ACTION_DESCRIPTION: &str = "Your request was processed successfully.";
pub const DIALOG_ACTION_TITLE: &str = "Dialog action";
pub const ERROR_ACTION_TITLE: &str = "Something went wrong";
pub const INFO_ACTION_TITLE: &str = "Just FYI";

/// The page's only mutable state: the email field's current text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseState {
    text: String,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text; returns false when the value is unchanged
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.text == value {
            return false;
        }
        self.text = value;
        true
    }

    /// Body line of the dialog for the current text
    pub fn dialog_message(&self) -> String {
        let entered = if self.text.is_empty() {
            EMPTY_TEXT_FALLBACK
        } else {
            self.text.as_str()
        };
        format!("Dialog content goes here. You entered: {entered}")
    }
}

/// Button actions of the showcase page
///
/// Every action emits exactly one notification and leaves the page state alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowcaseController;

impl ShowcaseController {
    pub fn new() -> Self {
        Self
    }

    /// "Show Toast"
    pub fn on_primary_action(&self, sink: &mut dyn NotificationSink) {
        debug!("Primary action");
        sink.notify(
            NotificationEvent::success(PRIMARY_ACTION_TITLE)
                .with_description(PRIMARY_ACTION_DESCRIPTION),
        );
    }

    /// "Save changes" inside the dialog; the dialog stays open
    pub fn on_dialog_confirm(&self, sink: &mut dyn NotificationSink) {
        debug!("Dialog confirm");
        sink.notify(NotificationEvent::info(DIALOG_ACTION_TITLE));
    }

    /// "Error Toast"
    pub fn on_error_action(&self, sink: &mut dyn NotificationSink) {
        debug!("Error action");
        sink.notify(NotificationEvent::error(ERROR_ACTION_TITLE));
    }

    /// "Info Toast"
    pub fn on_info_action(&self, sink: &mut dyn NotificationSink) {
        debug!("Info action");
        sink.notify(NotificationEvent::info(INFO_ACTION_TITLE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationKind;

    fn sink() -> Vec<NotificationEvent> {
        Vec::new()
    }

    #[test]
    fn test_initial_text_is_empty() {
        let state = ShowcaseState::new();
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_set_text_replaces_unconditionally() {
        let mut state = ShowcaseState::new();
        assert!(state.set_text("first"));
        assert!(state.set_text(""));
        assert_eq!(state.text(), "");
        let long = "x".repeat(10_000);
        assert!(state.set_text(long.clone()));
        assert_eq!(state.text(), long);
    }

    #[test]
    fn test_set_text_is_idempotent() {
        let mut state = ShowcaseState::new();
        assert!(state.set_text("a@b.com"));
        let snapshot = state.clone();
        assert!(!state.set_text("a@b.com"));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_dialog_message_fallback() {
        let state = ShowcaseState::new();
        assert_eq!(
            state.dialog_message(),
            "Dialog content goes here. You entered: nothing yet"
        );
    }

    #[test]
    fn test_dialog_message_echoes_text() {
        for text in ["a@b.com", " ", "nothing yet", "多字节"] {
            let mut state = ShowcaseState::new();
            state.set_text(text);
            assert_eq!(
                state.dialog_message(),
                format!("Dialog content goes here. You entered: {text}")
            );
        }
    }

    #[test]
    fn test_primary_action() {
        let mut events = sink();
        ShowcaseController::new().on_primary_action(&mut events);
        assert_eq!(
            events,
            vec![NotificationEvent {
                kind: NotificationKind::Success,
                title: "Action completed!".to_string(),
                description: Some("Your request was processed successfully.".to_string()),
            }]
        );
    }

    #[test]
    fn test_dialog_confirm() {
        let mut events = sink();
        ShowcaseController::new().on_dialog_confirm(&mut events);
        assert_eq!(events, vec![NotificationEvent::info("Dialog action")]);
    }

    #[test]
    fn test_error_and_info_are_independent() {
        let controller = ShowcaseController::new();
        let mut events = sink();

        controller.on_error_action(&mut events);
        assert_eq!(events, vec![NotificationEvent::error("Something went wrong")]);

        controller.on_info_action(&mut events);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], NotificationEvent::info("Just FYI"));
        assert_eq!(
            events.iter().filter(|e| e.kind == NotificationKind::Error).count(),
            1
        );
    }

    #[test]
    fn test_actions_leave_text_alone() {
        let controller = ShowcaseController::new();
        let mut state = ShowcaseState::new();
        state.set_text("a@b.com");
        let mut events = sink();

        controller.on_primary_action(&mut events);
        controller.on_dialog_confirm(&mut events);
        controller.on_error_action(&mut events);
        controller.on_info_action(&mut events);

        assert_eq!(events.len(), 4);
        assert_eq!(state.text(), "a@b.com");
    }

    #[test]
    fn test_email_then_dialog_scenario() {
        let controller = ShowcaseController::new();
        let mut state = ShowcaseState::new();
        let mut events = sink();

        assert_eq!(state.text(), "");
        state.set_text("a@b.com");
        assert_eq!(state.text(), "a@b.com");
        assert_eq!(
            state.dialog_message(),
            "Dialog content goes here. You entered: a@b.com"
        );

        controller.on_dialog_confirm(&mut events);
        assert_eq!(events, vec![NotificationEvent::info("Dialog action")]);
        assert_eq!(state.text(), "a@b.com");
    }
}
