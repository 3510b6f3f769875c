//! Alert Component
//!
//! Static callout box with an icon, a title, and a description.

use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::*,
};
use gpui_component::{Icon, IconName};

use crate::theme::Palette;

/// Alert variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

/// Callout container
#[derive(IntoElement)]
pub struct Alert {
    variant: AlertVariant,
    icon: Option<IconName>,
    children: Vec<AnyElement>,
}

impl Alert {
    pub fn new() -> Self {
        Self {
            variant: AlertVariant::Default,
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Alert {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Alert {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Palette::get(cx);
        let (text_color, border_color) = match self.variant {
            AlertVariant::Default => (palette.foreground, palette.border),
            AlertVariant::Destructive => (palette.destructive, palette.destructive),
        };

        div()
            .w_full()
            .px_4()
            .py_3()
            .flex()
            .items_start()
            .gap_3()
            .bg(palette.card)
            .border_1()
            .border_color(border_color)
            .rounded_lg()
            .text_color(text_color)
            .when_some(self.icon, |el, icon| el.child(Icon::new(icon).text_color(text_color)))
            .child(div().flex_1().flex().flex_col().gap_1().children(self.children))
    }
}

/// Alert heading line
#[derive(IntoElement)]
pub struct AlertTitle {
    text: SharedString,
}

impl AlertTitle {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for AlertTitle {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .child(self.text)
    }
}

/// Alert body text
#[derive(IntoElement)]
pub struct AlertDescription {
    text: SharedString,
}

impl AlertDescription {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for AlertDescription {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .text_sm()
            .text_color(Palette::get(cx).muted_foreground)
            .child(self.text)
    }
}
