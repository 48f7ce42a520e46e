//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod clock;
pub mod format;
pub mod signals;

// Re-export main items
pub use clock::Clock;
pub use format::{format_hms, hms_to_seconds};
pub use signals::shutdown_signal;
