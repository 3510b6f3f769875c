//! State Management Layer
//!
//! Application-wide state held in GPUI entities and reached through the
//! [`GalleryStore`] global:
//!
//! ```text
//! UI Action → update_app_state_and_save → State Update → persist → refresh windows
//! ```

mod app;
mod i18n;

pub use app::*;
pub use i18n::*;
