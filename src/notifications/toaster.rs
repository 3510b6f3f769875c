//! Toaster
//!
//! On-screen notification sink. Keeps a bounded stack of toasts in the
//! bottom-right corner; each toast expires after a fixed duration or when
//! its close button is clicked.

use std::time::Duration;

use gpui::{
    App, ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{NotificationEvent, NotificationKind, NotificationSink};
use crate::constants::{DEFAULT_TOAST_DURATION_SECS, DEFAULT_TOAST_MAX_VISIBLE, TOAST_WIDTH};
use crate::helpers::BoundedDeque;
use crate::theme::Palette;

/// Persisted toast preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    /// Maximum toasts on screen; the oldest is dropped on overflow
    pub max_visible: usize,
    /// Seconds before a toast dismisses itself
    pub duration_secs: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_TOAST_MAX_VISIBLE,
            duration_secs: DEFAULT_TOAST_DURATION_SECS,
        }
    }
}

impl ToastSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Raise zero values to 1; a zero-sized or zero-lived toaster shows nothing
    pub fn clamped(self) -> Self {
        Self {
            max_visible: self.max_visible.max(1),
            duration_secs: self.duration_secs.max(1),
        }
    }
}

/// Toast identifier, unique for the lifetime of a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub event: NotificationEvent,
}

/// Bounded FIFO of visible toasts
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: BoundedDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: BoundedDeque::new(max_visible),
            next_id: 0,
        }
    }

    /// Add a toast, evicting the oldest one when full
    pub fn push(&mut self, event: NotificationEvent) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        if let Some(evicted) = self.toasts.push(Toast { id, event }) {
            debug!(toast = evicted.id.0, "Toast evicted");
        }
        id
    }

    /// Remove a toast; returns false when it is already gone
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.toasts.set_capacity(max_visible);
    }

    /// Toasts from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Toast layer view
pub struct Toaster {
    queue: ToastQueue,
    duration: Duration,
}

impl Toaster {
    pub fn new(settings: ToastSettings) -> Self {
        let settings = settings.clamped();
        Self {
            queue: ToastQueue::new(settings.max_visible),
            duration: settings.duration(),
        }
    }

    /// Apply changed preferences to the live queue
    pub fn apply_settings(&mut self, settings: ToastSettings, cx: &mut Context<Self>) {
        let settings = settings.clamped();
        self.queue.set_max_visible(settings.max_visible);
        self.duration = settings.duration();
        cx.notify();
    }

    /// Show a notification and schedule its expiry
    pub fn push(&mut self, event: NotificationEvent, cx: &mut Context<Self>) {
        info!(kind = %event.kind, title = %event.title, "Notification");
        let id = self.queue.push(event);
        let duration = self.duration;

        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            this.update(cx, |toaster, cx| toaster.dismiss(id, cx)).ok();
        })
        .detach();

        cx.notify();
    }

    pub fn dismiss(&mut self, id: ToastId, cx: &mut Context<Self>) {
        if self.queue.dismiss(id) {
            cx.notify();
        }
    }

    fn render_toast(
        &self,
        toast: Toast,
        palette: Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let Toast { id, event } = toast;
        let (icon, accent) = match event.kind {
            NotificationKind::Success => (IconName::CircleCheck, palette.success),
            NotificationKind::Error => (IconName::CircleX, palette.destructive),
            NotificationKind::Info => (IconName::Info, palette.info),
        };

        div()
            .id(("toast", id.0 as usize))
            .w(px(TOAST_WIDTH))
            .p_4()
            .flex()
            .items_start()
            .gap_3()
            .bg(palette.card)
            .border_1()
            .border_color(palette.border)
            .rounded_md()
            .shadow_lg()
            .child(Icon::new(icon).text_color(accent))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(palette.foreground)
                            .child(event.title),
                    )
                    .when_some(event.description, |el, description| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(palette.muted_foreground)
                                .child(description),
                        )
                    }),
            )
            .child(
                div()
                    .id(("toast-close", id.0 as usize))
                    .size(px(20.0))
                    .rounded_sm()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(palette.muted_foreground)
                    .cursor_pointer()
                    .hover(|s| s.bg(palette.muted))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.dismiss(id, cx);
                    }))
                    .child("×"),
            )
    }
}

impl Render for Toaster {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Palette::get(cx);
        let toasts: Vec<Toast> = self.queue.iter().cloned().collect();

        let mut stack = div().flex().flex_col().gap_2();
        for toast in toasts {
            stack = stack.child(self.render_toast(toast, palette, cx));
        }
        stack
    }
}

/// Adapter handing notifications from any handler to the toaster entity
pub struct ToasterSink<'a> {
    toaster: &'a Entity<Toaster>,
    cx: &'a mut App,
}

impl<'a> ToasterSink<'a> {
    pub fn new(toaster: &'a Entity<Toaster>, cx: &'a mut App) -> Self {
        Self { toaster, cx }
    }
}

impl NotificationSink for ToasterSink<'_> {
    fn notify(&mut self, event: NotificationEvent) {
        self.toaster
            .update(&mut *self.cx, |toaster, cx| toaster.push(event, cx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(NotificationEvent::info("a"));
        let b = queue.push(NotificationEvent::info("b"));
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut queue = ToastQueue::new(2);
        queue.push(NotificationEvent::info("one"));
        queue.push(NotificationEvent::info("two"));
        queue.push(NotificationEvent::info("three"));

        let titles: Vec<&str> = queue.iter().map(|t| t.event.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::new(3);
        let first = queue.push(NotificationEvent::success("first"));
        let second = queue.push(NotificationEvent::error("second"));

        assert!(queue.dismiss(first));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|t| t.id), Some(second));
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut queue = ToastQueue::new(3);
        let id = queue.push(NotificationEvent::info("x"));
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::new(1);
        let a = queue.push(NotificationEvent::info("a"));
        queue.dismiss(a);
        let b = queue.push(NotificationEvent::info("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_shrinking_keeps_newest() {
        let mut queue = ToastQueue::new(3);
        queue.push(NotificationEvent::info("a"));
        queue.push(NotificationEvent::info("b"));
        queue.push(NotificationEvent::info("c"));
        queue.set_max_visible(1);
        let titles: Vec<&str> = queue.iter().map(|t| t.event.title.as_str()).collect();
        assert_eq!(titles, vec!["c"]);
    }

    #[test]
    fn test_default_settings() {
        let settings = ToastSettings::default();
        assert_eq!(settings.max_visible, DEFAULT_TOAST_MAX_VISIBLE);
        assert_eq!(settings.duration(), Duration::from_secs(DEFAULT_TOAST_DURATION_SECS));
    }

    #[test]
    fn test_clamped_settings_keep_toasts_visible() {
        let settings = ToastSettings {
            max_visible: 0,
            duration_secs: 0,
        }
        .clamped();
        assert_eq!(settings.max_visible, 1);
        assert_eq!(settings.duration(), Duration::from_secs(1));

        let mut queue = ToastQueue::new(settings.max_visible);
        queue.push(NotificationEvent::success("kept"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_clamped_leaves_valid_settings_alone() {
        let settings = ToastSettings {
            max_visible: 5,
            duration_secs: 10,
        };
        assert_eq!(settings.clamped(), settings);
    }
}
