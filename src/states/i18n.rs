//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::GalleryStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Supported locales as (code, display name)
pub const LOCALES: [(&str, &str); 2] = [("en", "English"), ("zh", "中文")];

fn current_locale(cx: &App) -> String {
    match cx.try_global::<GalleryStore>() {
        Some(store) => store.read(cx).locale().to_string(),
        None => "en".to_string(),
    }
}

/// Get translated string from "showcase" namespace
pub fn i18n_showcase(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("showcase.{key}"), locale = locale.as_str()).to_string().into()
}

/// Get translated string from "title_bar" namespace
pub fn i18n_title_bar(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("title_bar.{key}"), locale = locale.as_str()).to_string().into()
}

/// The locale after `current` in [`LOCALES`], wrapping around
pub fn next_locale(current: &str) -> &'static str {
    let index = LOCALES
        .iter()
        .position(|(code, _)| *code == current)
        .map_or(0, |i| (i + 1) % LOCALES.len());
    LOCALES[index].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_locale_cycles() {
        assert_eq!(next_locale("en"), "zh");
        assert_eq!(next_locale("zh"), "en");
    }

    #[test]
    fn test_next_locale_unknown_starts_over() {
        assert_eq!(next_locale("fr"), "en");
    }

    const KEYS: &[&str] = &[
        "title_bar.app_name",
        "title_bar.dark_mode",
        "title_bar.light_mode",
        "showcase.title",
        "showcase.ui_section",
        "showcase.email_label",
        "showcase.email_placeholder",
        "showcase.show_toast",
        "showcase.web_section",
        "showcase.alert_title",
        "showcase.alert_description",
        "showcase.open_dialog",
        "showcase.dialog_title",
        "showcase.dialog_description",
        "showcase.save_changes",
        "showcase.error_toast",
        "showcase.info_toast",
        "showcase.registry_section",
        "showcase.family_primitive",
        "showcase.family_dialog",
        "showcase.family_alert",
    ];

    #[test]
    fn test_translations_exist_for_all_locales() {
        for (code, _) in LOCALES {
            for key in KEYS {
                let value = t!(*key, locale = code);
                assert!(!value.contains(key), "missing {key} for {code}");
            }
        }
    }
}
