//! Bunwind Gallery Library
//!
//! This crate provides the Bunwind UI component kit together with the
//! showcase application that exercises it: a single page wiring the kit's
//! primitives to local state, a modal dialog, and toast notifications.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod features;
pub mod helpers;
pub mod logging;
pub mod notifications;
pub mod states;
pub mod theme;
pub mod views;
