//! Timer state machine with pause-aware time accounting
//!
//! All operations take an explicit `now_ms` so the arithmetic stays
//! deterministic under test; the live clock read happens in the
//! application layer. Elapsed/remaining values are always derived from
//! absolute instants, never from per-tick deltas, so a late or missed
//! tick causes no drift.

use serde::{Deserialize, Serialize};

use super::error::TimerError;

/// Registry key, assigned monotonically at creation
pub type TimerId = u64;

/// Counting direction of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    /// Counts down from a fixed target duration to zero
    Countdown,
    /// Counts up from zero with no target
    Stopwatch,
}

/// Lifecycle phase of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

/// A single countdown or stopwatch
///
/// Out-of-order actions (pause while idle, resume while running) are
/// harmless no-ops; the only fallible operation is starting a countdown
/// with a zero duration.
#[derive(Debug, Clone)]
pub struct Timer {
    id: TimerId,
    kind: TimerKind,
    label: String,
    target_seconds: u64,
    phase: TimerPhase,
    started_at_ms: Option<u64>,
    ends_at_ms: Option<u64>,
    paused_at_ms: Option<u64>,
    paused_accum_ms: u64,
    muted: bool,
    completion_signaled: bool,
}

impl Timer {
    pub fn new(id: TimerId, kind: TimerKind, label: String, target_seconds: u64) -> Self {
        Self {
            id,
            kind,
            label,
            target_seconds,
            phase: TimerPhase::Idle,
            started_at_ms: None,
            ends_at_ms: None,
            paused_at_ms: None,
            paused_accum_ms: 0,
            muted: false,
            completion_signaled: false,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target_seconds(&self) -> u64 {
        self.target_seconds
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn completion_signaled(&self) -> bool {
        self.completion_signaled
    }

    /// Enter Running, re-initializing all timing fields
    ///
    /// No-op while already Running. Starting from Finished re-initializes
    /// the same way a reset-then-start would.
    pub fn start(&mut self, now_ms: u64) -> Result<(), TimerError> {
        if self.phase == TimerPhase::Running {
            return Ok(());
        }
        if self.kind == TimerKind::Countdown && self.target_seconds == 0 {
            return Err(TimerError::InvalidDuration);
        }
        self.phase = TimerPhase::Running;
        self.started_at_ms = Some(now_ms);
        self.ends_at_ms = match self.kind {
            TimerKind::Countdown => Some(now_ms + self.target_seconds * 1000),
            TimerKind::Stopwatch => None,
        };
        self.paused_at_ms = None;
        self.paused_accum_ms = 0;
        self.completion_signaled = false;
        Ok(())
    }

    /// Freeze a running timer; no-op in any other phase
    pub fn pause(&mut self, now_ms: u64) {
        if self.phase != TimerPhase::Running {
            return;
        }
        self.phase = TimerPhase::Paused;
        self.paused_at_ms = Some(now_ms);
    }

    /// Continue a paused timer, folding the pause gap into the accumulator
    pub fn resume(&mut self, now_ms: u64) {
        if self.phase != TimerPhase::Paused {
            return;
        }
        if let Some(paused_at) = self.paused_at_ms.take() {
            self.paused_accum_ms += now_ms.saturating_sub(paused_at);
        }
        self.phase = TimerPhase::Running;
    }

    /// Unconditionally return to Idle
    ///
    /// Keeps `kind`, `label`, `target_seconds` and the mute flag.
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.started_at_ms = None;
        self.ends_at_ms = None;
        self.paused_at_ms = None;
        self.paused_accum_ms = 0;
        self.completion_signaled = false;
    }

    /// Flip the mute flag; timing is unaffected
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Whole seconds to display for this timer at `now_ms`
    ///
    /// Pure query. A stopwatch floors its elapsed time (partial seconds
    /// under-report) while a countdown ceils its remaining time (never
    /// shows zero before the true deadline). The asymmetry is intended.
    pub fn display_seconds(&self, now_ms: u64) -> u64 {
        if self.phase == TimerPhase::Idle {
            return self.idle_seconds();
        }
        let Some(started_at) = self.started_at_ms else {
            return self.idle_seconds();
        };
        let effective_now = match self.phase {
            TimerPhase::Paused => self.paused_at_ms.unwrap_or(now_ms),
            _ => now_ms,
        };
        match self.kind {
            TimerKind::Stopwatch => effective_now
                .saturating_sub(started_at)
                .saturating_sub(self.paused_accum_ms)
                / 1000,
            TimerKind::Countdown => {
                let Some(ends_at) = self.ends_at_ms else {
                    return self.idle_seconds();
                };
                let remaining_ms =
                    ends_at as i64 - effective_now as i64 + self.paused_accum_ms as i64;
                if remaining_ms <= 0 {
                    0
                } else {
                    ((remaining_ms + 999) / 1000) as u64
                }
            }
        }
    }

    /// True iff this is a running countdown whose remaining time, with
    /// paused time credited back, has reached zero
    ///
    /// Always false for stopwatches and for non-Running phases.
    pub fn is_complete(&self, now_ms: u64) -> bool {
        if self.kind != TimerKind::Countdown || self.phase != TimerPhase::Running {
            return false;
        }
        match self.ends_at_ms {
            Some(ends_at) => {
                ends_at as i64 - now_ms as i64 + self.paused_accum_ms as i64 <= 0
            }
            None => false,
        }
    }

    /// Latch the finished phase; called by the tick loop exactly once per run
    pub fn mark_finished(&mut self) {
        self.phase = TimerPhase::Finished;
        self.completion_signaled = true;
    }

    fn idle_seconds(&self) -> u64 {
        match self.kind {
            TimerKind::Countdown => self.target_seconds,
            TimerKind::Stopwatch => 0,
        }
    }
}
