//! Multitimer - A state-managed HTTP server for multiple named timers
//!
//! This library hosts a bounded collection of countdown and stopwatch
//! timers, each with start/pause/resume/reset/mute controls, a periodic
//! display tick, and an exactly-once completion notification.

pub mod api;
pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use utils::shutdown_signal;
