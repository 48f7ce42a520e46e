//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::state::{AppState, TimerError, TimerId, TimerKind, TimerSnapshot, TimerSpec};

use super::responses::{
    CreateTimerRequest, ErrorResponse, HealthResponse, RemoveResponse, StatusResponse,
    TimerListResponse, TimerResponse,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn reject(err: TimerError) -> ApiError {
    let code = match err {
        TimerError::InvalidDuration => StatusCode::UNPROCESSABLE_ENTITY,
        TimerError::CapacityExceeded(_) => StatusCode::CONFLICT,
        TimerError::NotFound(_) => StatusCode::NOT_FOUND,
        TimerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if code == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Internal error: {}", err);
    }
    (code, Json(ErrorResponse::new(err.to_string())))
}

fn acted(action: &str, snapshot: TimerSnapshot) -> Json<TimerResponse> {
    let message = format!("Timer {} {}", snapshot.id, action);
    Json(TimerResponse::new("ok", message, snapshot))
}

/// Handle POST /timers - Create a new timer
pub async fn create_timer_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTimerRequest>,
) -> Result<(StatusCode, Json<TimerResponse>), ApiError> {
    let target_seconds = request.total_seconds();
    if request.kind == TimerKind::Countdown && target_seconds == 0 {
        warn!("Rejected countdown creation with zero duration");
        return Err(reject(TimerError::InvalidDuration));
    }

    let spec = TimerSpec {
        kind: request.kind,
        label: request.label,
        target_seconds,
    };
    match state.create_timer(spec) {
        Ok(snapshot) => {
            let message = format!("Timer {} created", snapshot.id);
            Ok((
                StatusCode::CREATED,
                Json(TimerResponse::new("created", message, snapshot)),
            ))
        }
        Err(e) => {
            warn!("Timer creation rejected: {}", e);
            Err(reject(e))
        }
    }
}

/// Handle GET /timers - List all timers in insertion order
pub async fn list_timers_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerListResponse>, ApiError> {
    let timers = state.snapshots().map_err(reject)?;
    let capacity = state.max_timers().map_err(reject)?;
    Ok(Json(TimerListResponse {
        count: timers.len(),
        capacity,
        timers,
    }))
}

/// Handle GET /timers/:id - Single timer snapshot
pub async fn get_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<TimerResponse>, ApiError> {
    match state.snapshot(id) {
        Ok(snapshot) => Ok(acted("snapshot", snapshot)),
        Err(e) => Err(reject(e)),
    }
}

/// Handle POST /timers/:id/start
pub async fn start_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<TimerResponse>, ApiError> {
    match state.start_timer(id) {
        Ok(snapshot) => {
            info!("Timer {} started", id);
            Ok(acted("started", snapshot))
        }
        Err(e) => {
            warn!("Start rejected for timer {}: {}", id, e);
            Err(reject(e))
        }
    }
}

/// Handle POST /timers/:id/pause
pub async fn pause_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<TimerResponse>, ApiError> {
    match state.pause_timer(id) {
        Ok(snapshot) => Ok(acted("paused", snapshot)),
        Err(e) => Err(reject(e)),
    }
}

/// Handle POST /timers/:id/resume
pub async fn resume_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<TimerResponse>, ApiError> {
    match state.resume_timer(id) {
        Ok(snapshot) => Ok(acted("resumed", snapshot)),
        Err(e) => Err(reject(e)),
    }
}

/// Handle POST /timers/:id/reset
pub async fn reset_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<TimerResponse>, ApiError> {
    match state.reset_timer(id) {
        Ok(snapshot) => Ok(acted("reset", snapshot)),
        Err(e) => Err(reject(e)),
    }
}

/// Handle POST /timers/:id/mute - Toggle the mute flag
pub async fn mute_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<TimerResponse>, ApiError> {
    match state.toggle_mute(id) {
        Ok(snapshot) => {
            let action = if snapshot.muted { "muted" } else { "unmuted" };
            Ok(acted(action, snapshot))
        }
        Err(e) => Err(reject(e)),
    }
}

/// Handle DELETE /timers/:id - Idempotent removal
pub async fn delete_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<RemoveResponse>, ApiError> {
    match state.remove_timer(id) {
        Ok(removed) => Ok(Json(RemoveResponse::new(id, removed))),
        Err(e) => Err(reject(e)),
    }
}

/// Handle GET /status - Return current server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let timer_count = state.timer_count().map_err(reject)?;
    let capacity = state.max_timers().map_err(reject)?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer_count,
        capacity,
        tick_ms: state.tick_ms,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
