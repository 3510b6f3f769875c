//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the title bar, the
//! showcase page, and the toast layer floating above both.

use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window,
    div, prelude::*, px,
};
use tracing::{error, info};

use crate::constants::TOAST_MARGIN;
use crate::features::showcase::ShowcasePage;
use crate::notifications::{ToastSettings, Toaster};
use crate::states::{GalleryStore, save_app_state};
use crate::theme::Palette;
use crate::views::GalleryTitleBar;

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<GalleryTitleBar>,
    page: Entity<ShowcasePage>,
    toaster: Entity<Toaster>,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(toast: ToastSettings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let toaster = cx.new(|_| Toaster::new(toast));
        let page = cx.new(|cx| ShowcasePage::new(toaster.clone(), window, cx));
        let title_bar = cx.new(|cx| GalleryTitleBar::new(window, cx));

        let mut subscriptions = Vec::new();

        // Re-render on settings changes and keep the toaster in sync
        if let Some(store) = cx.try_global::<GalleryStore>() {
            let app_state = store.app_state();
            subscriptions.push(cx.observe(&app_state, |this, state, cx| {
                let toast = state.read(cx).toast();
                this.toaster
                    .update(cx, |toaster, cx| toaster.apply_settings(toast, cx));
                cx.notify();
            }));
        }

        // Remember where the window was when it closes
        window.on_window_should_close(cx, |window, cx| {
            let bounds = window.bounds();
            if let Some(store) = cx.try_global::<GalleryStore>().cloned() {
                store.update(cx, |state, _| state.set_bounds(bounds));
                match save_app_state(store.read(cx)) {
                    Ok(()) => info!("Window bounds saved"),
                    Err(e) => error!(error = %e, "Failed to save window bounds"),
                }
            }
            true
        });

        Self {
            title_bar,
            page,
            toaster,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Palette::get(cx);

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(palette.background)
            .text_color(palette.foreground)
            .child(self.title_bar.clone())
            .child(div().flex_1().min_h_0().child(self.page.clone()))
            .child(
                div()
                    .absolute()
                    .bottom(px(TOAST_MARGIN))
                    .right(px(TOAST_MARGIN))
                    .child(self.toaster.clone()),
            )
    }
}
