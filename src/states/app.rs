//! Application State
//!
//! Persisted preferences (theme, locale, window bounds, toast behavior) and
//! the global store that hands them out.

use crate::constants::SETTINGS_FILE_NAME;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::notifications::ToastSettings;
use crate::states::LOCALES;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(LocaleAction::En),
            "zh" => Some(LocaleAction::Zh),
            _ => None,
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

/// Location of the settings file in the platform config directory
pub fn settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
}

/// Map a BCP-47 style tag ("zh-CN", "en_US") onto a supported locale
pub fn normalize_locale(tag: &str) -> Option<&'static str> {
    let language = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    LOCALES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(code, _)| *code)
}

fn detect_system_locale() -> Option<&'static str> {
    normalize_locale(&Locale::current().to_string())
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryAppState {
    locale: Option<String>,
    theme: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    #[serde(default)]
    toast: ToastSettings,
}

impl GalleryAppState {
    /// Load state from the settings file in the config directory
    pub fn try_load() -> Result<Self> {
        Self::load_from(&settings_path()?)
    }

    /// Load state from `path`; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading settings file");
        let value = match fs::read_to_string(path) {
            Ok(value) => value,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut state = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str::<Self>(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse settings file");
                e
            })?
        };

        let toast = state.toast.clamped();
        if toast != state.toast {
            warn!(
                max_visible = state.toast.max_visible,
                duration_secs = state.toast.duration_secs,
                "Toast settings out of range, raised to minimum"
            );
            state.toast = toast;
        }

        // Detect system locale if not set or unsupported
        let configured = state.locale.as_deref().and_then(normalize_locale);
        state.locale = configured
            .or_else(detect_system_locale)
            .map(str::to_string);

        Ok(state)
    }

    /// Write state to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        fs::write(path, value)?;
        Ok(())
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> ThemeMode {
        match self.theme.as_deref() {
            Some(DARK_THEME_MODE) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    pub fn toast(&self) -> ToastSettings {
        self.toast
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        let value = if theme.is_dark() {
            DARK_THEME_MODE
        } else {
            LIGHT_THEME_MODE
        };
        self.theme = Some(value.to_string());
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<GalleryStore>()`
#[derive(Clone)]
pub struct GalleryStore {
    app_state: Entity<GalleryAppState>,
}

impl GalleryStore {
    /// Create a new global store
    pub fn new(app_state: Entity<GalleryAppState>) -> Self {
        Self { app_state }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<GalleryAppState> {
        self.app_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a GalleryAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut GalleryAppState, &mut Context<GalleryAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }

}

impl Global for GalleryStore {}

// ==================== Persistence ====================

/// Save app state to the settings file
pub fn save_app_state(state: &GalleryAppState) -> Result<()> {
    state.save_to(&settings_path()?)
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut GalleryAppState, &App) + 'static,
{
    let store = cx.global::<GalleryStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, px, size};
    use std::time::Duration;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en-US"), Some("en"));
        assert_eq!(normalize_locale("zh_CN"), Some("zh"));
        assert_eq!(normalize_locale("ZH"), Some("zh"));
        assert_eq!(normalize_locale("fr-FR"), None);
        assert_eq!(normalize_locale(""), None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = GalleryAppState::load_from(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(state.theme(), ThemeMode::Light);
        assert_eq!(state.toast(), ToastSettings::default());
        assert!(state.bounds().is_none());
        assert!(LOCALES.iter().any(|(code, _)| *code == state.locale()));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "locale = \"zh\"\n\n[toast]\nduration_secs = 9\n").expect("write");

        let state = GalleryAppState::load_from(&path).expect("load");
        assert_eq!(state.locale(), "zh");
        assert_eq!(state.toast().duration(), Duration::from_secs(9));
        assert_eq!(state.toast().max_visible, ToastSettings::default().max_visible);
    }

    #[test]
    fn test_zero_toast_settings_are_raised() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "[toast]\nmax_visible = 0\nduration_secs = 0\n").expect("write");

        let state = GalleryAppState::load_from(&path).expect("load");
        assert_eq!(state.toast().max_visible, 1);
        assert_eq!(state.toast().duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "theme = [").expect("write");
        assert!(GalleryAppState::load_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load_preserves_choices() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);

        let bounds = Bounds::new(point(px(120.0), px(80.0)), size(px(960.0), px(760.0)));

        let mut state = GalleryAppState::new();
        state.set_theme(ThemeMode::Dark);
        state.set_locale("zh");
        state.set_bounds(bounds);
        state.save_to(&path).expect("save");

        let loaded = GalleryAppState::load_from(&path).expect("load");
        assert_eq!(loaded.theme(), ThemeMode::Dark);
        assert_eq!(loaded.locale(), "zh");
        assert_eq!(loaded.bounds(), Some(&bounds));
    }

    #[test]
    fn test_locale_action_codes() {
        for action in [LocaleAction::En, LocaleAction::Zh] {
            assert_eq!(LocaleAction::from_code(action.code()), Some(action));
        }
        assert_eq!(LocaleAction::from_code("de"), None);
    }
}
