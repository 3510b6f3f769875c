//! Title Bar Component
//!
//! Custom title bar with branding, theme toggle, and language toggle.

use crate::assets::CustomIconName;
use crate::components::{Button, ButtonSize, Label};
use crate::states::{GalleryStore, LOCALES, LocaleAction, ThemeAction, i18n_title_bar, next_locale};
use gpui::{Context, Window, prelude::*};
use gpui_component::{Icon, TitleBar, h_flex};

/// Title bar component
pub struct GalleryTitleBar;

impl GalleryTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }
}

impl Render for GalleryTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (is_dark, locale) = match cx.try_global::<GalleryStore>() {
            Some(store) => {
                let state = store.read(cx);
                (state.theme().is_dark(), state.locale().to_string())
            }
            None => (false, "en".to_string()),
        };

        let (theme_action, theme_key) = if is_dark {
            (ThemeAction::Light, "light_mode")
        } else {
            (ThemeAction::Dark, "dark_mode")
        };

        let next = next_locale(&locale);
        let next_name = LOCALES
            .iter()
            .find(|(code, _)| *code == next)
            .map_or(next, |(_, name)| *name);
        let locale_action = LocaleAction::from_code(next).unwrap_or(LocaleAction::En);

        TitleBar::new()
            // Left side - app name/logo
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_2()
                    .pl_4()
                    .child(Icon::from(CustomIconName::Logo))
                    .child(Label::new(i18n_title_bar(cx, "app_name"))),
            )
            // Right side - appearance toggles
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(
                        Button::ghost("theme-toggle", i18n_title_bar(cx, theme_key))
                            .size(ButtonSize::Small)
                            .on_click(move |_, window, cx| {
                                window.dispatch_action(Box::new(theme_action), cx);
                            }),
                    )
                    .child(
                        Button::ghost("locale-toggle", next_name)
                            .size(ButtonSize::Small)
                            .on_click(move |_, window, cx| {
                                window.dispatch_action(Box::new(locale_action), cx);
                            }),
                    ),
            )
    }
}
