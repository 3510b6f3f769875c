//! Bunwind Gallery - Main Entry Point
//!
//! Native showcase for the Bunwind UI component kit.

use bunwind_gallery::app::application::run_app;
use bunwind_gallery::logging;

fn main() {
    // Keep the file writer alive until the app exits
    let _log_guard = logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Bunwind Gallery...");

    run_app();
}
