//! Logging setup utilities for the activity board.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events pass the default filter besides the binary itself.
const LIBRARY_TARGETS: [&str; 2] = ["activity_board_client", "activity_board_shared"];

/// Build the default filter directive used when `RUST_LOG` is not set.
///
/// Binary names may contain hyphens, tracing targets never do.
pub fn default_directive(binary_name: &str, default_log_level: &str) -> String {
    LIBRARY_TARGETS
        .iter()
        .copied()
        .chain(std::iter::once(binary_name))
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// This function sets up logging for the client library and the binary.
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "activity-board")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use activity_board_shared::logger::setup_logger;
///
/// setup_logger("activity-board", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Logger initialized for {}", binary_name);
}
