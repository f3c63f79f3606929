//! Logging utilities for choros.
//!
//! This module provides structured logging helpers so classification runs
//! are searchable and analyzable when the library is embedded in a larger
//! rendering service.

use std::time::Instant;
use tracing::{debug, info};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(operation = operation, "Starting operation");

    let result = f();

    info!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log detailed information about a classification run
pub fn log_classification_stats(
    scheme: &str,
    colormap: &str,
    sample_count: usize,
    valid_count: usize,
    class_count: usize,
    duration_ms: f64,
) {
    info!(
        operation = "classify",
        scheme = scheme,
        colormap = colormap,
        samples = sample_count,
        valid = valid_count,
        invalid = sample_count - valid_count,
        classes = class_count,
        duration_ms = duration_ms,
        "Classification run complete"
    );
}
