//! Handler timing metrics.
//!
//! A `Timer` guard measures wall-clock time from construction to drop and
//! records it into a global per-handler registry. The drop hook means the
//! observation happens even when a handler returns early with an error.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static HANDLER_STATS: Lazy<DashMap<&'static str, HandlerStats>> = Lazy::new(DashMap::new);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandlerStats {
    pub hits: u64,
    pub total_micros: u64,
    pub max_micros: u64,
}

/// Drop guard timing one handler invocation.
pub struct Timer {
    handler: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(handler: &'static str) -> Self {
        Self {
            handler,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        record(self.handler, self.start.elapsed());
    }
}

pub fn record(handler: &'static str, duration: Duration) {
    let micros = duration.as_micros() as u64;

    let mut entry = HANDLER_STATS.entry(handler).or_default();
    entry.hits += 1;
    entry.total_micros += micros;
    entry.max_micros = entry.max_micros.max(micros);

    log::debug!("metrics: '{}' took {}us", handler, micros);
}

/// Snapshot of recorded stats for one handler.
pub fn stats(handler: &str) -> Option<HandlerStats> {
    HANDLER_STATS.get(handler).map(|s| s.clone())
}

/// Clear all recorded stats. Test helper.
pub fn reset() {
    HANDLER_STATS.clear();
}
