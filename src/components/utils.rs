//! Shared helpers for building screens out of the kit

use gpui::{App, Div, IntoElement, ParentElement, Styled, div, px};

use crate::constants::FIELD_MAX_WIDTH;
use crate::theme::Palette;

/// Active palette for the current theme mode
pub fn palette(cx: &App) -> Palette {
    Palette::get(cx)
}

/// Label stacked over its control, capped at form width
pub fn field(label: impl IntoElement, control: impl IntoElement) -> Div {
    div()
        .w_full()
        .max_w(px(FIELD_MAX_WIDTH))
        .flex()
        .flex_col()
        .gap_1p5()
        .child(label)
        .child(control)
}
