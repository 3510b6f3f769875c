//! Showcase - interactive tour of the component kit

pub mod controller;
pub mod page;

pub use controller::{ShowcaseController, ShowcaseState};
pub use page::ShowcasePage;
