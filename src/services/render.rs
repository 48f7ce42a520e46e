//! Rendering collaborator seam
//!
//! The tick loop pushes one formatted value per timer per tick through
//! `RenderSink`; the shipped sink batches a tick into a frame and
//! publishes it on a watch channel for whatever front end is attached.

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::state::timer::TimerId;

/// One timer's formatted display value for the current tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerDisplay {
    pub id: TimerId,
    pub formatted: String,
}

/// Receiver of per-tick `(id, "HH:MM:SS")` display values
pub trait RenderSink {
    fn display(&mut self, id: TimerId, formatted: String);
}

/// Batches a tick's displays into a frame on a watch channel
pub struct WatchRender {
    frame: Vec<TimerDisplay>,
    tx: watch::Sender<Vec<TimerDisplay>>,
}

impl WatchRender {
    pub fn new(tx: watch::Sender<Vec<TimerDisplay>>) -> Self {
        Self {
            frame: Vec::new(),
            tx,
        }
    }

    /// Publish the accumulated frame and start the next one
    pub fn flush(&mut self) {
        let frame = std::mem::take(&mut self.frame);
        if self.tx.send(frame).is_err() {
            debug!("No display frame subscribers");
        }
    }
}

impl RenderSink for WatchRender {
    fn display(&mut self, id: TimerId, formatted: String) {
        self.frame.push(TimerDisplay { id, formatted });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_batch_per_flush() {
        let (tx, rx) = watch::channel(Vec::new());
        let mut sink = WatchRender::new(tx);
        sink.display(1, "00:00:05".to_string());
        sink.display(2, "00:00:09".to_string());
        sink.flush();
        let frame = rx.borrow().clone();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[0].id, 1);
        assert_eq!(frame[1].formatted, "00:00:09");

        sink.flush();
        assert!(rx.borrow().is_empty());
    }
}
