//! Client error taxonomy.
//!
//! Three failure classes cover every operation: the server answered with
//! nothing where a value was required ([`ApiError::EmptyResponse`]), the
//! server answered with a body that fails field-type validation
//! ([`ApiError::InvalidResponse`]), or the HTTP layer itself failed
//! ([`ApiError::Transport`]).
//!
//! Adapters raise `EmptyResponse`/`InvalidResponse` and propagate transport
//! failures unchanged. Facades are the only layer that catches an `ApiError`
//! and they never expose its text to callers; see
//! [`crate::application::facades::classify`].

/// Failure raised by the adapter/transport layer of the client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The response body was absent (or JSON `null`) where a value was required.
    #[error("empty response from server")]
    EmptyResponse,

    /// The response body was present but failed field-type validation.
    ///
    /// The payload describes the offending field for logs; it is never
    /// surfaced to users.
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),

    /// Network or HTTP-layer failure, with the status code when one was
    /// received.
    #[error("transport failure: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    /// Builds a transport failure carrying an HTTP status code.
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Builds a transport failure with no status (connection refused,
    /// timeout, DNS failure).
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code carried by this error, if any.
    ///
    /// Validation failures (`EmptyResponse`, `InvalidResponse`) carry none;
    /// the classifier treats them as unmapped.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type for adapter and transport operations.
pub type ApiResult<T> = Result<T, ApiError>;
