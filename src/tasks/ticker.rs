//! Display tick background task
//!
//! The scheduler pass itself is a pure synchronous function so the
//! timing behavior can be tested with explicit instants; the tokio
//! interval task is only the driver. Because every timer derives its
//! value from absolute instants, a delayed or skipped tick causes no
//! drift.

use std::{sync::Arc, time::Duration};

use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::services::{CompletionNotifier, EventNotifier, RenderSink, WatchRender};
use crate::state::{AppState, TimerRegistry};
use crate::utils::format_hms;

/// One scheduler pass over the registry
///
/// Forwards every timer's formatted display value to the sink, then
/// latches completion and invokes the notifier exactly once per run.
/// Never removes timers and never fails; invalid-duration conditions
/// can only arise at explicit `start` calls, not here.
pub fn tick_registry(
    registry: &mut TimerRegistry,
    now_ms: u64,
    sink: &mut dyn RenderSink,
    notifier: &dyn CompletionNotifier,
) {
    for timer in registry.iter_mut() {
        sink.display(timer.id(), format_hms(timer.display_seconds(now_ms)));

        if timer.is_complete(now_ms) && !timer.completion_signaled() {
            timer.mark_finished();
            debug!("Timer {} (\"{}\") reached zero", timer.id(), timer.label());
            notifier.on_timer_complete(timer.label(), timer.is_muted());
        }
    }
}

/// Background task driving the scheduler pass at the configured period
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting display tick task ({}ms period)", state.tick_ms);

    let mut sink = WatchRender::new(state.display_tx.clone());
    let notifier = EventNotifier::new(state.completion_tx.clone());
    let mut interval = tokio::time::interval(Duration::from_millis(state.tick_ms.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        match state.registry.lock() {
            Ok(mut registry) => {
                let now = state.now_ms();
                tick_registry(&mut registry, now, &mut sink, &notifier);
            }
            Err(e) => {
                error!("Failed to lock registry for tick: {}", e);
            }
        }
        // publish outside the lock
        sink.flush();
    }
}
