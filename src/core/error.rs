//! Error types for the logging facility
//!
//! Four failure classes cross the public API: initialization, stream,
//! permission, and shutdown. Stream failures inside a running writer never
//! surface here; the writer reroutes the record to the system log instead.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Startup failed: a writer could not be spawned, or the lifecycle call
    /// was made in the wrong phase.
    #[error("Logger initialization failed ({subject}): {message}")]
    Init { subject: String, message: String },

    /// A log stream could not be opened, written, or closed.
    #[error("Stream error on '{path}' while {operation}: {source}")]
    Stream {
        path: String,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Pre-start validation rejected a log destination. `path` names exactly
    /// the directory or file that failed the check.
    #[error("Permission check failed for '{path}': {message}")]
    Permission { path: String, message: String },

    /// Shutdown could not close every stream. All close attempts are made
    /// before this is reported; `failures` holds one entry per stream.
    #[error("Shutdown failed to close {} log stream(s): {}", .failures.len(), .failures.join("; "))]
    Exit { failures: Vec<String> },
}

impl LoggerError {
    /// Create an initialization error.
    pub fn init(subject: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Init {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Create a stream error with the failing path and operation.
    pub fn stream(
        path: impl Into<String>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::Stream {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a permission error naming the offending path.
    pub fn permission(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Permission {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an aggregated shutdown error.
    pub fn exit(failures: Vec<String>) -> Self {
        LoggerError::Exit { failures }
    }

    /// Path named by this error, where one applies.
    pub fn path(&self) -> Option<&str> {
        match self {
            LoggerError::Stream { path, .. } | LoggerError::Permission { path, .. } => {
                Some(path.as_str())
            }
            _ => None,
        }
    }
}
