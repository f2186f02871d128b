//! Logging for tests.

use tracing::subscriber::set_global_default;
use tracing_subscriber::{filter::LevelFilter, fmt::format::FmtSpan, layer::SubscriberExt};

/// Install a stdout logger, later calls in the same test binary are no-ops.
pub fn init_logger() {
    let filter = tracing_subscriber::filter::Targets::new().with_default(LevelFilter::TRACE);

    let std_logger = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_test_writer()
        .with_ansi(false)
        .with_target(false)
        .without_time();

    let collector = tracing_subscriber::registry().with(std_logger).with(filter);

    // Another test already installed it.
    let _ = set_global_default(collector);
}
