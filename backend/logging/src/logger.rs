//! Tracing initialization for the `verifact` binary.
//!
//! Console output is always on; NDJSON file output (daily rotation) is only
//! added when a log directory is configured, so one-shot `verifact verify`
//! runs do not scatter log files around the working directory.

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `default_level` is used when `RUST_LOG`
/// is unset; `log_dir`, when given, receives `verifact.log.YYYY-MM-DD`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger(log_dir: Option<&str>, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    let file_layer = log_dir.map(|dir| {
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, "verifact.log");
        fmt::layer().json().with_writer(appender).with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
