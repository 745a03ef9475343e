//! Request logging settings shared with the request hoop.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use crate::config::logging::LoggingConfig;

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(1_000);

pub(super) fn apply(config: &LoggingConfig) {
    let threshold = u64::try_from(config.slow_request_threshold().as_millis()).unwrap_or(u64::MAX);

    SLOW_REQUEST_THRESHOLD_MS.store(threshold, Ordering::Relaxed);
}

pub(super) fn slow_request_threshold() -> Duration {
    Duration::from_millis(SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed))
}

/// Whether a request that took `elapsed` should be reported as slow.
pub(super) fn is_slow(elapsed: Duration) -> bool {
    elapsed > slow_request_threshold()
}
