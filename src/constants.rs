//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Showcase page maximum content width
pub const PAGE_MAX_WIDTH: f32 = 768.0;

/// Form field maximum width (label + input column)
pub const FIELD_MAX_WIDTH: f32 = 384.0;

/// Dialog content width constraints
pub const DIALOG_MIN_WIDTH: f32 = 400.0;
pub const DIALOG_MAX_WIDTH: f32 = 512.0;

/// Toast layout
pub const TOAST_WIDTH: f32 = 356.0;
pub const TOAST_MARGIN: f32 = 16.0;

/// Toast defaults (overridable in settings)
pub const DEFAULT_TOAST_MAX_VISIBLE: usize = 3;
pub const DEFAULT_TOAST_DURATION_SECS: u64 = 4;

/// Settings and log file names
pub const SETTINGS_FILE_NAME: &str = "bunwind-gallery.toml";
pub const LOG_FILE_PREFIX: &str = "bunwind-gallery.log";
