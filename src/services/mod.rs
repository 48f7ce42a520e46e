//! External collaborator seams
//!
//! This module contains the interfaces the core calls out through:
//! display rendering and completion notification. Concrete audio or
//! native-notification backends would plug in here.

pub mod notify;
pub mod render;

// Re-export main items
pub use notify::{CompletionEvent, CompletionNotifier, EventNotifier};
pub use render::{RenderSink, TimerDisplay, WatchRender};
