/*!
 * Structured Tracing
 * Subscriber setup and timed spans using the tracing crate
 */

use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

/// Environment variable selecting JSON output
pub const TRACE_JSON_ENV: &str = "COLLECTIONS_TRACE_JSON";

fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

/// Install the global subscriber, failing if one is already set
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - COLLECTIONS_TRACE_JSON: Enable JSON output (default: false)
pub fn try_init_tracing() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?;
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
        info!("Structured tracing initialized");
    }
    Ok(())
}

/// Install the global subscriber; a second call is a no-op
pub fn init_tracing() {
    if let Err(e) = try_init_tracing() {
        debug!(error = %e, "tracing already initialized");
    }
}

/// Timed span around a batch of collection operations
///
/// Records the elapsed time and processed item count when dropped.
pub struct PhaseSpan {
    span: tracing::Span,
    start: Instant,
    items: u64,
}

impl PhaseSpan {
    pub fn new(phase: &'static str) -> Self {
        let span = span!(
            Level::INFO,
            "phase",
            phase,
            items_processed = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        debug!(parent: &span, phase, "phase started");

        Self {
            span,
            start: Instant::now(),
            items: 0,
        }
    }

    /// Add to the processed item count
    pub fn add_items(&mut self, count: u64) {
        self.items += count;
    }

    pub fn items(&self) -> u64 {
        self.items
    }
}

impl Drop for PhaseSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        self.span.record("items_processed", self.items);
        self.span.record("duration_ms", elapsed.as_millis() as u64);
        debug!(
            parent: &self.span,
            items = self.items,
            duration_us = elapsed.as_micros() as u64,
            "phase finished"
        );
    }
}
