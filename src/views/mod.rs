//! View Components
//!
//! Window chrome for the gallery.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TitleBar                              [theme] [language]   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │                     Showcase page                           │
//! │                                                             │
//! │                                              ┌──────────┐   │
//! │                                              │  toasts  │   │
//! └──────────────────────────────────────────────┴──────────┴───┘
//! ```

mod title_bar;

pub use title_bar::*;
