use thiserror::Error;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("--stdio flag is required")]
    StdioRequired,

    #[error("invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
