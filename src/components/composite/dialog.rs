//! Dialog Component
//!
//! A modal dialog assembled from slots:
//!
//! ```text
//! Dialog
//! ├── DialogTrigger        always rendered, opens on click
//! └── DialogContent        rendered over a backdrop while open
//!     ├── DialogHeader
//!     │   ├── DialogTitle
//!     │   └── DialogDescription
//!     ├── body children
//!     └── DialogFooter
//! ```
//!
//! Open/closed state lives in a [`DialogState`] entity that only the dialog
//! reads and writes. Slot contents are rebuilt by the owner on every render,
//! so the body always shows the owner's current state.

use gpui::{
    AnyElement, App, ClickEvent, ElementId, Entity, FontWeight, InteractiveElement, IntoElement,
    MouseDownEvent, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window, anchored, deferred, div, point, prelude::*, px,
};
use tracing::debug;

use crate::constants::{DIALOG_MAX_WIDTH, DIALOG_MIN_WIDTH};
use crate::theme::{Palette, Typography};

/// Visibility of one dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    open: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true if the dialog was closed before
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Returns true if the dialog was open before
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

fn set_open(state: &Entity<DialogState>, open: bool, cx: &mut App) {
    state.update(cx, |state, cx| {
        let changed = if open { state.open() } else { state.close() };
        if changed {
            debug!(open, "Dialog visibility changed");
            cx.notify();
        }
    });
}

/// Element that opens the dialog when clicked
pub struct DialogTrigger {
    child: AnyElement,
}

impl DialogTrigger {
    pub fn new(child: impl IntoElement) -> Self {
        Self {
            child: child.into_any_element(),
        }
    }
}

/// Dialog title
#[derive(IntoElement)]
pub struct DialogTitle {
    text: SharedString,
}

impl DialogTitle {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for DialogTitle {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .text_size(px(Typography::TEXT_LG))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(Palette::get(cx).foreground)
            .child(self.text)
    }
}

/// Secondary text under the title
#[derive(IntoElement)]
pub struct DialogDescription {
    text: SharedString,
}

impl DialogDescription {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for DialogDescription {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .text_sm()
            .text_color(Palette::get(cx).muted_foreground)
            .child(self.text)
    }
}

/// Title and description block
#[derive(IntoElement, Default)]
pub struct DialogHeader {
    title: Option<DialogTitle>,
    description: Option<DialogDescription>,
}

impl DialogHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: DialogTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: DialogDescription) -> Self {
        self.description = Some(description);
        self
    }
}

impl RenderOnce for DialogHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1p5()
            .when_some(self.title, |el, title| el.child(title))
            .when_some(self.description, |el, description| el.child(description))
    }
}

/// Right-aligned row of actions
#[derive(IntoElement, Default)]
pub struct DialogFooter {
    children: Vec<AnyElement>,
}

impl DialogFooter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentElement for DialogFooter {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for DialogFooter {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_row()
            .justify_end()
            .gap_2()
            .children(self.children)
    }
}

/// Panel shown while the dialog is open
#[derive(Default)]
pub struct DialogContent {
    header: Option<DialogHeader>,
    children: Vec<AnyElement>,
    footer: Option<DialogFooter>,
}

impl DialogContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: DialogHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn footer(mut self, footer: DialogFooter) -> Self {
        self.footer = Some(footer);
        self
    }
}

impl ParentElement for DialogContent {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

/// Modal dialog
#[derive(IntoElement)]
pub struct Dialog {
    id: ElementId,
    state: Entity<DialogState>,
    trigger: Option<DialogTrigger>,
    content: DialogContent,
}

impl Dialog {
    /// Create a dialog driven by `state`
    pub fn new(id: impl Into<ElementId>, state: &Entity<DialogState>) -> Self {
        Self {
            id: id.into(),
            state: state.clone(),
            trigger: None,
            content: DialogContent::new(),
        }
    }

    pub fn trigger(mut self, trigger: DialogTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn content(mut self, content: DialogContent) -> Self {
        self.content = content;
        self
    }

    fn render_panel(
        content: DialogContent,
        state: Entity<DialogState>,
        palette: Palette,
    ) -> impl IntoElement {
        let close_state = state.clone();

        div()
            .id("dialog-content")
            .occlude()
            .relative()
            .min_w(px(DIALOG_MIN_WIDTH))
            .max_w(px(DIALOG_MAX_WIDTH))
            .p_6()
            .flex()
            .flex_col()
            .gap_4()
            .bg(palette.card)
            .border_1()
            .border_color(palette.border)
            .rounded_lg()
            .shadow_lg()
            .on_mouse_down_out(move |_event: &MouseDownEvent, _window, cx| {
                set_open(&state, false, cx);
            })
            .when_some(content.header, |el, header| el.child(header))
            .child(
                div()
                    .text_sm()
                    .text_color(palette.foreground)
                    .children(content.children),
            )
            .when_some(content.footer, |el, footer| el.child(footer))
            .child(
                div()
                    .id("dialog-close")
                    .absolute()
                    .top_4()
                    .right_4()
                    .size(px(20.0))
                    .rounded_sm()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(palette.muted_foreground)
                    .cursor_pointer()
                    .hover(|s| s.bg(palette.muted))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        set_open(&close_state, false, cx);
                    })
                    .child("×"),
            )
    }
}

impl RenderOnce for Dialog {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let is_open = self.state.read(cx).is_open();
        let palette = Palette::get(cx);
        let viewport = window.viewport_size();
        let open_state = self.state.clone();

        div()
            .when_some(self.trigger, |el, trigger| {
                el.child(
                    div()
                        .id(self.id)
                        .flex()
                        .on_click(move |_event: &ClickEvent, _window, cx| {
                            set_open(&open_state, true, cx);
                        })
                        .child(trigger.child),
                )
            })
            .when(is_open, |el| {
                el.child(
                    deferred(
                        anchored().position(point(px(0.), px(0.))).child(
                            div()
                                .id("dialog-overlay")
                                .occlude()
                                .w(viewport.width)
                                .h(viewport.height)
                                .bg(palette.overlay)
                                .flex()
                                .items_center()
                                .justify_center()
                                .child(Self::render_panel(self.content, self.state, palette)),
                        ),
                    )
                    .with_priority(1),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!DialogState::new().is_open());
    }

    #[test]
    fn test_open_close_report_changes() {
        let mut state = DialogState::new();
        assert!(state.open());
        assert!(state.is_open());
        assert!(!state.open());

        assert!(state.close());
        assert!(!state.is_open());
        assert!(!state.close());
    }
}
