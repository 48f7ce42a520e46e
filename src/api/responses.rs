//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{TimerKind, TimerSnapshot};
use crate::utils::hms_to_seconds;

/// Creation request body for POST /timers
///
/// Hours are clamped to 0-99 and minutes/seconds to 0-59 before the
/// total duration is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimerRequest {
    pub kind: TimerKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub hours: u64,
    #[serde(default)]
    pub minutes: u64,
    #[serde(default)]
    pub seconds: u64,
}

impl CreateTimerRequest {
    /// Total requested duration in whole seconds
    pub fn total_seconds(&self) -> u64 {
        hms_to_seconds(self.hours, self.minutes, self.seconds)
    }
}

/// Response for endpoints that act on a single timer
#[derive(Debug, Clone, Serialize)]
pub struct TimerResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl TimerResponse {
    pub fn new(status: &str, message: String, timer: TimerSnapshot) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Error body for rejected requests
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Response for GET /timers
#[derive(Debug, Clone, Serialize)]
pub struct TimerListResponse {
    pub timers: Vec<TimerSnapshot>,
    pub count: usize,
    pub capacity: usize,
}

/// Response for DELETE /timers/:id
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub status: String,
    pub message: String,
    pub removed: bool,
    pub timestamp: DateTime<Utc>,
}

impl RemoveResponse {
    pub fn new(id: u64, removed: bool) -> Self {
        let message = if removed {
            format!("Timer {} removed", id)
        } else {
            format!("Timer {} was not present", id)
        };
        Self {
            status: "ok".to_string(),
            message,
            removed,
            timestamp: Utc::now(),
        }
    }
}

/// Server status response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub timer_count: usize,
    pub capacity: usize,
    pub tick_ms: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
