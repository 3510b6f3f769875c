//! Showcase Page
//!
//! Tour of the component kit: an email field echoed into a dialog, toast
//! buttons, an alert, and the list of published components.

use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, Focusable, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled,
    Subscription, Window, div, prelude::*, px,
};
use gpui_component::IconName;
use gpui_component::input::{InputEvent, InputState};

use crate::components::utils::{field, palette};
use crate::components::{
    Alert, AlertDescription, AlertTitle, Button, ComponentFamily, ComponentName, Dialog,
    DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogState, DialogTitle,
    DialogTrigger, Input, Label,
};
use crate::constants::PAGE_MAX_WIDTH;
use crate::features::showcase::controller::{ShowcaseController, ShowcaseState};
use crate::notifications::{NotificationSink, Toaster, ToasterSink};
use crate::states::{GalleryStore, i18n_showcase};
use crate::theme::{Palette, Typography};

/// Showcase page component
pub struct ShowcasePage {
    state: ShowcaseState,
    controller: ShowcaseController,
    email_input: Entity<InputState>,
    dialog: Entity<DialogState>,
    toaster: Entity<Toaster>,
    _subscriptions: Vec<Subscription>,
}

impl ShowcasePage {
    pub fn new(toaster: Entity<Toaster>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let placeholder = i18n_showcase(cx, "email_placeholder");
        let email_input = Input::state(placeholder, window, cx);
        let dialog = cx.new(|_| DialogState::new());

        let mut subscriptions = Vec::new();

        // Mirror the email field into page state
        subscriptions.push(cx.subscribe(&email_input, |this, input, event: &InputEvent, cx| {
            if matches!(event, InputEvent::Change) {
                let value = input.read(cx).value().to_string();
                this.on_text_change(value, cx);
            }
        }));

        // Redraw when the dialog opens or closes
        subscriptions.push(cx.observe(&dialog, |_this, _dialog, cx| cx.notify()));

        // Redraw on locale/theme changes
        if let Some(store) = cx.try_global::<GalleryStore>() {
            let app_state = store.app_state();
            subscriptions.push(cx.observe(&app_state, |_this, _state, cx| cx.notify()));
        }

        Self {
            state: ShowcaseState::new(),
            controller: ShowcaseController::new(),
            email_input,
            dialog,
            toaster,
            _subscriptions: subscriptions,
        }
    }

    /// Store a new email value; unchanged values do not trigger a redraw
    pub fn on_text_change(&mut self, value: String, cx: &mut Context<Self>) {
        if self.state.set_text(value) {
            cx.notify();
        }
    }

    /// Run a controller action against the toaster
    fn emit(
        &self,
        cx: &mut Context<Self>,
        action: impl FnOnce(&ShowcaseController, &mut dyn NotificationSink),
    ) {
        let toaster = self.toaster.clone();
        let mut sink = ToasterSink::new(&toaster, cx);
        action(&self.controller, &mut sink);
    }

    fn render_section(title: SharedString, palette: Palette) -> Div {
        div().mb_8().flex().flex_col().child(
            div()
                .mb_4()
                .text_size(px(Typography::TEXT_XL))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(palette.foreground)
                .child(title),
        )
    }

    fn render_ui_package(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let email_focus = self.email_input.read(cx).focus_handle(cx);

        Self::render_section(i18n_showcase(cx, "ui_section"), palette).child(
            div()
                .flex()
                .flex_col()
                .items_start()
                .gap_4()
                .child(field(
                    Label::new(i18n_showcase(cx, "email_label"))
                        .html_for("email-label", email_focus),
                    Input::new(&self.email_input),
                ))
                .child(
                    Button::new("show-toast", i18n_showcase(cx, "show_toast")).on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.emit(cx, |controller, sink| controller.on_primary_action(sink));
                        },
                    )),
                ),
        )
    }

    fn render_dialog(&self, cx: &mut Context<Self>) -> impl IntoElement {
        Dialog::new("example-dialog", &self.dialog)
            .trigger(DialogTrigger::new(Button::outline(
                "open-dialog",
                i18n_showcase(cx, "open_dialog"),
            )))
            .content(
                DialogContent::new()
                    .header(
                        DialogHeader::new()
                            .title(DialogTitle::new(i18n_showcase(cx, "dialog_title")))
                            .description(DialogDescription::new(i18n_showcase(
                                cx,
                                "dialog_description",
                            ))),
                    )
                    .child(div().py_4().child(self.state.dialog_message()))
                    .footer(
                        DialogFooter::new().child(
                            Button::new("save-changes", i18n_showcase(cx, "save_changes")).on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.emit(cx, |controller, sink| {
                                        controller.on_dialog_confirm(sink)
                                    });
                                }),
                            ),
                        ),
                    ),
            )
    }

    fn render_web_package(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        Self::render_section(i18n_showcase(cx, "web_section"), palette).child(
            div()
                .flex()
                .flex_col()
                .items_start()
                .gap_6()
                .child(
                    Alert::new()
                        .icon(IconName::Info)
                        .child(AlertTitle::new(i18n_showcase(cx, "alert_title")))
                        .child(AlertDescription::new(i18n_showcase(cx, "alert_description"))),
                )
                .child(self.render_dialog(cx))
                .child(
                    div()
                        .flex()
                        .gap_4()
                        .child(
                            Button::destructive("error-toast", i18n_showcase(cx, "error_toast"))
                                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.emit(cx, |controller, sink| {
                                        controller.on_error_action(sink)
                                    });
                                })),
                        )
                        .child(
                            Button::outline("info-toast", i18n_showcase(cx, "info_toast")).on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.emit(cx, |controller, sink| {
                                        controller.on_info_action(sink)
                                    });
                                }),
                            ),
                        ),
                ),
        )
    }

    fn render_registry(&self, palette: Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let families = [
            (ComponentFamily::Primitive, "family_primitive"),
            (ComponentFamily::Dialog, "family_dialog"),
            (ComponentFamily::Alert, "family_alert"),
        ];

        let mut list = div().flex().flex_col().gap_3();
        for (family, key) in families {
            let names = ComponentName::in_family(family).map(|name| {
                div()
                    .px_2()
                    .py_0p5()
                    .rounded_md()
                    .bg(palette.muted)
                    .text_xs()
                    .text_color(palette.foreground)
                    .child(name.as_str())
            });

            list = list.child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1p5()
                    .child(Label::new(i18n_showcase(cx, key)).muted())
                    .child(div().flex().flex_wrap().gap_2().children(names)),
            );
        }

        Self::render_section(i18n_showcase(cx, "registry_section"), palette).child(list)
    }
}

impl Render for ShowcasePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = palette(cx);

        div()
            .id("showcase-page")
            .size_full()
            .overflow_y_scroll()
            .bg(palette.background)
            .child(
                div()
                    .w_full()
                    .max_w(px(PAGE_MAX_WIDTH))
                    .mx_auto()
                    .p_8()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .mb_8()
                            .text_size(px(Typography::TEXT_3XL))
                            .font_weight(FontWeight::BOLD)
                            .text_color(palette.foreground)
                            .child(i18n_showcase(cx, "title")),
                    )
                    .child(self.render_ui_package(palette, cx))
                    .child(self.render_web_package(palette, cx))
                    .child(self.render_registry(palette, cx)),
            )
    }
}
