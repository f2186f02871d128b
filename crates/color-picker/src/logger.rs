#[cfg(feature = "log")]
pub use subscriber::setup_logger;

#[cfg(not(feature = "log"))]
pub fn setup_logger(_debug: bool) {}

#[cfg(feature = "log")]
mod subscriber {
    use std::fs::File;

    use tracing::{Level, subscriber::set_global_default};
    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::{filter::Targets, fmt::format::FmtSpan, layer::SubscriberExt};
    use utilities::{directories::config_dir, failure::Failure};

    const LOG_FILE_NAME: &str = "color-picker.log";

    /// Log to stderr and to a file in the config directory.
    ///
    /// The returned guards flush the writers when dropped.
    pub fn setup_logger(debug: bool) -> [WorkerGuard; 2] {
        let filter = filter(debug);

        // stderr logger, stdout is reserved for the picked color
        let (std_writer, std_guard) = tracing_appender::non_blocking(std::io::stderr());
        let std_logger = tracing_subscriber::fmt::layer()
            .with_writer(std_writer)
            .with_target(false);

        // file logger
        let log_path = config_dir()
            .log_and_panic("Could not create the config directory")
            .join(LOG_FILE_NAME);
        let log_file = File::create(log_path).log_and_panic("Could not create the log file");
        let (file_writer, file_guard) = tracing_appender::non_blocking(log_file);
        let file_logger = tracing_subscriber::fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .with_target(false)
            .with_span_events(if debug { FmtSpan::CLOSE } else { FmtSpan::NONE });

        // Register loggers
        let collector = tracing_subscriber::registry()
            .with(std_logger)
            .with(file_logger)
            .with(filter);

        set_global_default(collector).log_and_panic("Could not set the global logger");

        [std_guard, file_guard]
    }

    fn filter(debug: bool) -> Targets {
        let level = if debug { Level::TRACE } else { Level::INFO };
        Targets::new().with_default(level)
    }

}
