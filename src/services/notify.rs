//! Completion notifier contract
//!
//! Concrete collaborators (chime, native notification, accessible
//! banner) sit behind `CompletionNotifier`; the tick loop invokes it
//! exactly once per countdown completion and never depends on delivery
//! succeeding.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Completion record published to API-side observers
#[derive(Debug, Clone, Serialize)]
pub struct CompletionEvent {
    pub label: String,
    pub muted: bool,
    pub finished_at: DateTime<Utc>,
}

/// Invoked exactly once when a countdown reaches zero while running
pub trait CompletionNotifier {
    fn on_timer_complete(&self, label: &str, muted: bool);
}

/// Default notifier: accessible log banner plus a broadcast event
///
/// The mute flag suppresses only the chime; the completion notice
/// itself is always delivered, as the fallback path when no native
/// notification channel is available.
pub struct EventNotifier {
    events: broadcast::Sender<CompletionEvent>,
}

impl EventNotifier {
    pub fn new(events: broadcast::Sender<CompletionEvent>) -> Self {
        Self { events }
    }
}

impl CompletionNotifier for EventNotifier {
    fn on_timer_complete(&self, label: &str, muted: bool) {
        if !muted {
            debug!("Chime requested for \"{}\"", label);
        }
        info!("Time's up: \"{}\" has finished", label);

        let event = CompletionEvent {
            label: label.to_string(),
            muted,
            finished_at: Utc::now(),
        };
        if self.events.send(event).is_err() {
            debug!("No completion event subscribers");
        }
    }
}
