//! Error types for bookscroll.
//!
//! Two families, both built with `thiserror`:
//!
//! - [`RemoteFetchError`] - a single catalog page could not be fetched. Never fatal:
//!   pagination stops for the session, the UI shows a message and stays interactive.
//! - [`AppError`] - startup or terminal failures. Fatal; returned from `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Boxed underlying cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed catalog page fetch.
///
/// No distinction is made between transient and permanent failures: every variant
/// ends pagination for the session.
#[derive(Debug, Error)]
pub enum RemoteFetchError {
    /// The catalog answered with a non-success HTTP status.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookscroll::model::RemoteFetchError;
    ///
    /// let err = RemoteFetchError::Status { status: 503 };
    /// assert_eq!(err.status_code(), Some(503));
    /// assert!(err.to_string().contains("503"));
    /// ```
    #[error("API responded with status {status}")]
    Status {
        /// HTTP status code returned by the catalog.
        status: u16,
    },

    /// The request never produced a response (DNS, connect, TLS, reset, ...).
    #[error("Request to catalog failed: {source}")]
    Transport {
        /// Underlying client or I/O error.
        #[source]
        source: BoxError,
    },

    /// The response body was not valid JSON.
    #[error("Catalog response was not valid JSON: {source}")]
    InvalidBody {
        /// JSON parse error.
        #[from]
        source: serde_json::Error,
    },
}

impl RemoteFetchError {
    /// Wrap any error as a transport failure.
    pub fn transport(source: impl Into<BoxError>) -> Self {
        RemoteFetchError::Transport {
            source: source.into(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RemoteFetchError::Status { status } => Some(*status),
            RemoteFetchError::Transport { .. } | RemoteFetchError::InvalidBody { .. } => None,
        }
    }
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The configured catalog endpoint is not a usable URL.
    #[error("Invalid catalog endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
