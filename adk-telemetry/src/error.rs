use thiserror::Error;

/// Errors raised while installing the logging subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A filter directive or level could not be parsed.
    #[error("Invalid log directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    /// Another global subscriber was installed first.
    #[error("A global tracing subscriber is already installed: {reason}")]
    AlreadyInstalled { reason: String },
}
