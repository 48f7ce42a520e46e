//! Main application state management

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tracing::info;

use crate::services::{CompletionEvent, TimerDisplay};
use crate::utils::{format_hms, Clock};

use super::error::TimerError;
use super::registry::{TimerRegistry, TimerSpec};
use super::timer::{Timer, TimerId, TimerKind, TimerPhase};

/// Point-in-time view of one timer, as handed to API clients
#[derive(Debug, Clone, Serialize)]
pub struct TimerSnapshot {
    pub id: TimerId,
    pub kind: TimerKind,
    pub label: String,
    pub phase: TimerPhase,
    pub target_seconds: u64,
    pub muted: bool,
    pub display_seconds: u64,
    pub display: String,
}

impl TimerSnapshot {
    fn capture(timer: &Timer, now_ms: u64) -> Self {
        let display_seconds = timer.display_seconds(now_ms);
        Self {
            id: timer.id(),
            kind: timer.kind(),
            label: timer.label().to_string(),
            phase: timer.phase(),
            target_seconds: timer.target_seconds(),
            muted: timer.is_muted(),
            display_seconds,
            display: format_hms(display_seconds),
        }
    }
}

/// Main application state shared between the API and the tick task
#[derive(Debug)]
pub struct AppState {
    /// All timer instances, exclusively owned here
    pub registry: Mutex<TimerRegistry>,
    /// Monotonic clock all timer operations read from
    pub clock: Clock,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    pub tick_ms: u64,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Per-tick display frames for the rendering collaborator
    pub display_tx: watch::Sender<Vec<TimerDisplay>>,
    /// Keep one receiver alive to prevent channel closure
    pub _display_rx: watch::Receiver<Vec<TimerDisplay>>,
    /// Completion events for API-side observers
    pub completion_tx: broadcast::Sender<CompletionEvent>,
}

impl AppState {
    /// Create a new AppState with an empty registry
    pub fn new(port: u16, host: String, max_timers: usize, tick_ms: u64) -> Self {
        let (display_tx, display_rx) = watch::channel(Vec::new());
        let (completion_tx, _) = broadcast::channel(100);

        Self {
            registry: Mutex::new(TimerRegistry::new(max_timers)),
            clock: Clock::new(),
            start_time: Instant::now(),
            port,
            host,
            tick_ms,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            display_tx,
            _display_rx: display_rx,
            completion_tx,
        }
    }

    /// Current instant on the shared monotonic clock
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Create a timer, rejecting at the capacity bound
    pub fn create_timer(&self, spec: TimerSpec) -> Result<TimerSnapshot, TimerError> {
        let mut registry = self.lock_registry()?;
        let now = self.now_ms();
        let snapshot = registry
            .create(spec)
            .map(|timer| TimerSnapshot::capture(timer, now))?;
        drop(registry);

        info!("Created timer {} (\"{}\")", snapshot.id, snapshot.label);
        self.record_action("create");
        Ok(snapshot)
    }

    /// Apply a user action to one timer and return its new snapshot
    pub fn with_timer<F>(
        &self,
        id: TimerId,
        action: &str,
        f: F,
    ) -> Result<TimerSnapshot, TimerError>
    where
        F: FnOnce(&mut Timer, u64) -> Result<(), TimerError>,
    {
        let mut registry = self.lock_registry()?;
        let now = self.now_ms();
        let timer = registry.get_mut(id).ok_or(TimerError::NotFound(id))?;
        f(timer, now)?;
        let snapshot = TimerSnapshot::capture(timer, now);
        drop(registry);

        self.record_action(action);
        Ok(snapshot)
    }

    pub fn start_timer(&self, id: TimerId) -> Result<TimerSnapshot, TimerError> {
        self.with_timer(id, "start", |timer, now| timer.start(now))
    }

    pub fn pause_timer(&self, id: TimerId) -> Result<TimerSnapshot, TimerError> {
        self.with_timer(id, "pause", |timer, now| {
            timer.pause(now);
            Ok(())
        })
    }

    pub fn resume_timer(&self, id: TimerId) -> Result<TimerSnapshot, TimerError> {
        self.with_timer(id, "resume", |timer, now| {
            timer.resume(now);
            Ok(())
        })
    }

    pub fn reset_timer(&self, id: TimerId) -> Result<TimerSnapshot, TimerError> {
        self.with_timer(id, "reset", |timer, _now| {
            timer.reset();
            Ok(())
        })
    }

    pub fn toggle_mute(&self, id: TimerId) -> Result<TimerSnapshot, TimerError> {
        self.with_timer(id, "mute", |timer, _now| {
            timer.toggle_mute();
            Ok(())
        })
    }

    /// Remove a timer; idempotent, returns whether it existed
    pub fn remove_timer(&self, id: TimerId) -> Result<bool, TimerError> {
        let mut registry = self.lock_registry()?;
        let removed = registry.remove(id);
        drop(registry);

        if removed {
            info!("Removed timer {}", id);
            self.record_action("remove");
        }
        Ok(removed)
    }

    /// Snapshot every timer in insertion order
    pub fn snapshots(&self) -> Result<Vec<TimerSnapshot>, TimerError> {
        let registry = self.lock_registry()?;
        let now = self.now_ms();
        Ok(registry
            .iter()
            .map(|timer| TimerSnapshot::capture(timer, now))
            .collect())
    }

    /// Snapshot a single timer
    pub fn snapshot(&self, id: TimerId) -> Result<TimerSnapshot, TimerError> {
        let registry = self.lock_registry()?;
        let now = self.now_ms();
        registry
            .get(id)
            .map(|timer| TimerSnapshot::capture(timer, now))
            .ok_or(TimerError::NotFound(id))
    }

    pub fn timer_count(&self) -> Result<usize, TimerError> {
        Ok(self.lock_registry()?.len())
    }

    pub fn max_timers(&self) -> Result<usize, TimerError> {
        Ok(self.lock_registry()?.capacity())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn lock_registry(&self) -> Result<std::sync::MutexGuard<'_, TimerRegistry>, TimerError> {
        self.registry
            .lock()
            .map_err(|e| TimerError::Internal(format!("Failed to lock registry: {}", e)))
    }
}
