//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::Palette;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid primary action
    #[default]
    Default,
    /// Solid red, for destructive actions
    Destructive,
    /// Bordered, transparent background
    Outline,
    /// Muted solid background
    Secondary,
    /// No background until hovered
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Resolved colors for one variant: background, text, hover background, border
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub bg: gpui::Rgba,
    pub text: gpui::Rgba,
    pub hover_bg: gpui::Rgba,
    pub border: Option<gpui::Rgba>,
}

impl ButtonVariant {
    /// Colors for this variant under the given palette
    pub fn colors(self, palette: &Palette) -> ButtonColors {
        let transparent = gpui::rgba(0x00000000);
        match self {
            ButtonVariant::Default => ButtonColors {
                bg: palette.primary,
                text: palette.primary_foreground,
                hover_bg: with_alpha(palette.primary, 0.9),
                border: None,
            },
            ButtonVariant::Destructive => ButtonColors {
                bg: palette.destructive,
                text: palette.destructive_foreground,
                hover_bg: with_alpha(palette.destructive, 0.9),
                border: None,
            },
            ButtonVariant::Outline => ButtonColors {
                bg: palette.background,
                text: palette.foreground,
                hover_bg: palette.accent,
                border: Some(palette.input),
            },
            ButtonVariant::Secondary => ButtonColors {
                bg: palette.secondary,
                text: palette.secondary_foreground,
                hover_bg: with_alpha(palette.secondary, 0.8),
                border: None,
            },
            ButtonVariant::Ghost => ButtonColors {
                bg: transparent,
                text: palette.foreground,
                hover_bg: palette.accent,
                border: None,
            },
        }
    }
}

fn with_alpha(color: gpui::Rgba, alpha: f32) -> gpui::Rgba {
    gpui::Rgba { a: alpha, ..color }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Default,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a destructive button
    pub fn destructive(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Destructive)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = self.variant.colors(&Palette::get(cx));

        let (padding_x, height, font_size) = match self.size {
            ButtonSize::Small => (px(12.0), px(32.0), px(13.0)),
            ButtonSize::Medium => (px(16.0), px(36.0), px(14.0)),
            ButtonSize::Large => (px(32.0), px(40.0), px(14.0)),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .flex_none()
            .h(height)
            .px(padding_x)
            .bg(colors.bg)
            .text_color(colors.text)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_md()
            .when_some(colors.border, |el, border| el.border_1().border_color(border))
            .child(self.label);

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element.cursor_pointer().hover(|s| s.bg(colors.hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_uses_primary() {
        let palette = Palette::light();
        let colors = ButtonVariant::default().colors(&palette);
        assert_eq!(colors.bg, palette.primary);
        assert_eq!(colors.text, palette.primary_foreground);
        assert!(colors.border.is_none());
    }

    #[test]
    fn test_outline_has_border() {
        let palette = Palette::dark();
        let colors = ButtonVariant::Outline.colors(&palette);
        assert_eq!(colors.border, Some(palette.input));
    }

    #[test]
    fn test_destructive_uses_destructive() {
        let palette = Palette::light();
        let colors = ButtonVariant::Destructive.colors(&palette);
        assert_eq!(colors.bg, palette.destructive);
        assert!(colors.hover_bg.a < 1.0);
    }
}
