//! Input Component
//!
//! Single-line text field. Editing, selection, and clipboard handling come
//! from `gpui_component`'s [`InputState`]; this element only sizes it to the
//! kit's form layout. The owner keeps the state entity and subscribes to
//! [`InputEvent::Change`](gpui_component::input::InputEvent) for updates.

use gpui::{App, AppContext, Context, Entity, IntoElement, RenderOnce, SharedString, Styled, Window};
use gpui_component::input::{Input as InputField, InputState};

/// A text input bound to an [`InputState`]
#[derive(IntoElement)]
pub struct Input {
    state: Entity<InputState>,
}

impl Input {
    /// Create an input rendering the given state
    pub fn new(state: &Entity<InputState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Create the backing state entity with a placeholder
    pub fn state<V: 'static>(
        placeholder: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<V>,
    ) -> Entity<InputState> {
        let placeholder = placeholder.into();
        cx.new(|cx| InputState::new(window, cx).placeholder(placeholder))
    }
}

impl RenderOnce for Input {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        InputField::new(&self.state).w_full()
    }
}
