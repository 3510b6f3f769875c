//! Theme - Colors and Typography
//!
//! The active [`Palette`] is installed as a GPUI global and swapped when
//! the theme mode changes.

pub mod colors;
pub mod typography;

pub use colors::Palette;
pub use typography::Typography;

use gpui::App;
use gpui_component::{Theme, ThemeMode};

/// Switch both the kit palette and the `gpui_component` theme
pub fn apply_theme(mode: ThemeMode, cx: &mut App) {
    cx.set_global(Palette::for_mode(mode));
    Theme::change(mode, None, cx);
    tracing::debug!(dark = mode.is_dark(), "Theme applied");
}
