//! Error types for the timeline library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Edge, TaskId};

/// Comprehensive error type for all timeline operations.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// Transport or HTTP status errors from the schedule API
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered but reported `success: false`
    #[error("Server rejected {operation}")]
    Rejected { operation: String },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: TaskId },
    /// Lane not found for the given ID
    #[error("Lane with ID {id} not found")]
    LaneNotFound { id: u64 },
    /// Task only exists locally and has no server ID yet
    #[error("Task {id} has not been saved to the server yet; reload the schedule first")]
    NotPersisted { id: TaskId },
    /// Resize would leave the task with its start after its end
    #[error("Cannot move the {edge} of task {id} to {requested}: the task would end before it starts")]
    InvertedResize {
        id: TaskId,
        edge: Edge,
        requested: jiff::civil::DateTime,
    },
    /// Split point outside the task's interior
    #[error("Cannot split task {id} at {at}: the split point must fall strictly inside the task and before its last day")]
    InvalidSplit {
        id: TaskId,
        at: jiff::civil::DateTime,
    },
    /// Gesture not permitted by the task's capability flags
    #[error("Task {id} cannot be {action}")]
    NotEditable { id: TaskId, action: &'static str },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Date arithmetic overflow or parse errors
    #[error("Date error: {source}")]
    Date {
        #[from]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating HTTP errors with optional context.
pub struct HttpErrorBuilder {
    message: String,
}

impl HttpErrorBuilder {
    /// Create a new HTTP error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> TimelineError {
        TimelineError::Http {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TimelineError {
        TimelineError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TimelineError {
    /// Creates a builder for HTTP errors.
    pub fn http(message: impl Into<String>) -> HttpErrorBuilder {
        HttpErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was raised before any local or remote mutation
    /// happened, i.e. it is a rejected gesture rather than a failed write.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. }
                | Self::LaneNotFound { .. }
                | Self::NotPersisted { .. }
                | Self::InvertedResize { .. }
                | Self::InvalidSplit { .. }
                | Self::NotEditable { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to TimelineError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for HTTP-related Results.
pub trait HttpResultExt<T> {
    /// Map transport errors with a message.
    fn http_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| TimelineError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> HttpResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn http_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TimelineError::http(message).with_source(e))
    }
}

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = TimelineError::invalid_input("start").with_reason("not a date");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'start': not a date"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejected_is_not_validation() {
        let err = TimelineError::Rejected {
            operation: "task update".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Server rejected task update");
    }

    #[test]
    fn test_with_context_wraps_as_configuration() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.with_context("Failed to read settings").unwrap_err();
        assert!(matches!(err, TimelineError::Configuration { .. }));
        assert!(err.to_string().contains("Failed to read settings: missing"));
    }
}
