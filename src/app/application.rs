//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, point, px, size,
};
use gpui_component::{Root, ThemeMode};
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::helpers::is_development;
use crate::states::{
    GalleryAppState, GalleryStore, LocaleAction, ThemeAction, update_app_state_and_save,
};
use crate::theme::apply_theme;

actions!(bunwind_gallery, [Quit]);

fn load_app_state() -> GalleryAppState {
    GalleryAppState::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Failed to load settings, using defaults");
        GalleryAppState::new()
    })
}

fn register_actions(cx: &mut App) {
    cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);
    cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => ThemeMode::Light,
            ThemeAction::Dark => ThemeMode::Dark,
        };
        info!(dark = mode.is_dark(), "Theme changed");
        apply_theme(mode, cx);
        update_app_state_and_save(cx, "set_theme", move |state, _| state.set_theme(mode));
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let code = action.code();
        info!(locale = code, "Locale changed");
        update_app_state_and_save(cx, "set_locale", move |state, _| state.set_locale(code));
    });
}

/// Run the Bunwind Gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        register_actions(cx);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Load persisted settings and install globals
        let app_state = load_app_state();
        let theme = app_state.theme();
        let toast = app_state.toast();
        let saved_bounds = app_state.bounds().copied();
        info!(
            locale = app_state.locale(),
            dark = theme.is_dark(),
            development = is_development(),
            "Settings loaded"
        );

        let app_state = cx.new(|_| app_state);
        cx.set_global(GalleryStore::new(app_state));
        apply_theme(theme, cx);

        // Create main window
        let bounds = saved_bounds.unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Bunwind Gallery")),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(toast, window, cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
