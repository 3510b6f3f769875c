//! Composite Components
//!
//! Multi-part components built from primitives: the dialog family and the
//! alert family.

pub mod alert;
pub mod dialog;
