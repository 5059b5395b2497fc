//! Error types for the van sales client library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all client operations.
#[derive(Error, Debug)]
pub enum VanSalesError {
    /// Connection, DNS, TLS or body transfer failures
    #[error("Network error while {operation}: {source}")]
    Transport {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
    /// The request did not complete within the client timeout
    #[error("Request timed out while {operation}")]
    Timeout { operation: String },
    /// Non-success status reported by the remote API, with the `error`
    /// message from the response body when it had one
    #[error(
        "Server responded with {status} while {operation}{}",
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Server {
        operation: String,
        status: u16,
        message: Option<String>,
    },
    /// Login was rejected or could not be completed
    #[error("{message}")]
    SignInFailed { message: String },
    /// Customer not present in the fetched customer list
    #[error("Customer with ID {id} not found")]
    CustomerNotFound { id: String },
    /// Response body did not match the expected shape
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },
    /// Date value that is neither a calendar date nor a timestamp
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration file could not be read
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
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
    pub fn with_reason(self, reason: impl Into<String>) -> VanSalesError {
        VanSalesError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl VanSalesError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Classifies a reqwest failure as either a timeout or a transport error.
    pub fn from_request(operation: impl Into<String>, source: reqwest::Error) -> Self {
        let operation = operation.into();
        if source.is_timeout() {
            Self::Timeout { operation }
        } else {
            Self::Transport { operation, source }
        }
    }

    /// Message the server put in an error response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the error came from the network layer rather than the server
    /// or the local data.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}


/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, VanSalesError>;
