//! Monotonic millisecond clock

use std::time::Instant;

/// Monotonic clock anchored at process start
///
/// Timer arithmetic works in plain milliseconds since this origin, which
/// keeps the state machine free of `Instant` handling and lets tests feed
/// explicit instants.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock origin
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
