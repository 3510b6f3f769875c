//! Primitive Components
//!
//! Basic building blocks: buttons, text inputs, and labels.

pub mod button;
pub mod input;
pub mod label;
