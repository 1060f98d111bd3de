use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::ServerError;

/// Install the stderr subscriber.
///
/// stdout carries the LSP stream, so nothing may be logged there. The level comes
/// from `log_level` when given, otherwise from `RUST_LOG`, otherwise `info`.
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> Result<(), ServerError> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).map_err(|e| ServerError::InvalidLogFilter {
            filter: level.to_string(),
            reason: e.to_string(),
        })?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))
}
