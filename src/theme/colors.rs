//! Colors - Bunwind Theme Colors

use gpui::{App, Global, Rgba, rgb, rgba};
use gpui_component::ThemeMode;

/// Bunwind color palette, one instance per theme mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window background
    pub background: Rgba,
    /// Default text
    pub foreground: Rgba,
    /// Card / dialog / toast surface
    pub card: Rgba,
    /// Secondary surface and hover background
    pub muted: Rgba,
    /// Secondary text
    pub muted_foreground: Rgba,
    /// Default border
    pub border: Rgba,
    /// Input border
    pub input: Rgba,
    /// Focus ring
    pub ring: Rgba,
    /// Primary action background
    pub primary: Rgba,
    /// Primary action text
    pub primary_foreground: Rgba,
    /// Secondary action background
    pub secondary: Rgba,
    /// Secondary action text
    pub secondary_foreground: Rgba,
    /// Hover background for outline/ghost buttons
    pub accent: Rgba,
    /// Destructive action background
    pub destructive: Rgba,
    /// Destructive action text
    pub destructive_foreground: Rgba,
    /// Success indicator
    pub success: Rgba,
    /// Info indicator
    pub info: Rgba,
    /// Modal backdrop
    pub overlay: Rgba,
}

impl Global for Palette {}

impl Palette {
    /// Light palette
    pub fn light() -> Self {
        Self {
            background: rgb(0xffffff),
            foreground: rgb(0x09090b),
            card: rgb(0xffffff),
            muted: rgb(0xf4f4f5),
            muted_foreground: rgb(0x71717a),
            border: rgb(0xe4e4e7),
            input: rgb(0xe4e4e7),
            ring: rgb(0x18181b),
            primary: rgb(0x18181b),
            primary_foreground: rgb(0xfafafa),
            secondary: rgb(0xf4f4f5),
            secondary_foreground: rgb(0x18181b),
            accent: rgb(0xf4f4f5),
            destructive: rgb(0xef4444),
            destructive_foreground: rgb(0xfafafa),
            success: rgb(0x16a34a),
            info: rgb(0x2563eb),
            overlay: rgba(0x000000cc),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            background: rgb(0x09090b),
            foreground: rgb(0xfafafa),
            card: rgb(0x09090b),
            muted: rgb(0x27272a),
            muted_foreground: rgb(0xa1a1aa),
            border: rgb(0x27272a),
            input: rgb(0x27272a),
            ring: rgb(0xd4d4d8),
            primary: rgb(0xfafafa),
            primary_foreground: rgb(0x18181b),
            secondary: rgb(0x27272a),
            secondary_foreground: rgb(0xfafafa),
            accent: rgb(0x27272a),
            destructive: rgb(0x7f1d1d),
            destructive_foreground: rgb(0xfafafa),
            success: rgb(0x22c55e),
            info: rgb(0x3b82f6),
            overlay: rgba(0x000000cc),
        }
    }

    /// Palette for a theme mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() { Self::dark() } else { Self::light() }
    }

    /// Read the active palette, falling back to light before one is installed
    pub fn get(cx: &App) -> Self {
        cx.try_global::<Palette>().copied().unwrap_or_else(Self::light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), Palette::light());
        assert_eq!(Palette::for_mode(ThemeMode::Dark), Palette::dark());
        assert_ne!(Palette::light().background, Palette::dark().background);
    }
}
