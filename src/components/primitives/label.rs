//! Label Component

use gpui::{
    App, ElementId, FocusHandle, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*,
};

use crate::theme::Palette;

/// A form label, optionally bound to the field it describes
///
/// When bound, clicking the label moves focus into the field.
#[derive(IntoElement)]
pub struct Label {
    text: SharedString,
    target: Option<(ElementId, FocusHandle)>,
    muted: bool,
}

impl Label {
    /// Create a new label
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            target: None,
            muted: false,
        }
    }

    /// Bind the label to a focusable field
    pub fn html_for(mut self, id: impl Into<ElementId>, focus: FocusHandle) -> Self {
        self.target = Some((id.into(), focus));
        self
    }

    /// Render in the secondary text color
    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }
}

impl RenderOnce for Label {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Palette::get(cx);
        let color = if self.muted {
            palette.muted_foreground
        } else {
            palette.foreground
        };

        let base = div()
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(color)
            .child(self.text);

        match self.target {
            Some((id, focus)) => base
                .id(id)
                .cursor_pointer()
                .on_click(move |_event, window, _cx| window.focus(&focus))
                .into_any_element(),
            None => base.into_any_element(),
        }
    }
}
