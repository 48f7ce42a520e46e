//! State management module
//!
//! This module contains the timer state machine, the bounded registry
//! that owns every timer, and the shared application state.

pub mod app_state;
pub mod error;
pub mod registry;
pub mod timer;

// Re-export main types
pub use app_state::{AppState, TimerSnapshot};
pub use error::TimerError;
pub use registry::{TimerRegistry, TimerSpec};
pub use timer::{Timer, TimerId, TimerKind, TimerPhase};
