//! Error types for gateway calls and workflow outcomes.
//!
//! [`GatewayError`] describes what went wrong with a single HTTP exchange.
//! [`WorkflowError`] is what a workflow reports to its error region: it always
//! carries a non-empty, user-facing message.

use thiserror::Error;

/// Failure of one HTTP exchange with the shortening service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The service answered with a non-success status.
    ///
    /// `detail` is the `detail` field of the JSON error body, when present and truthy.
    #[error("service responded with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a usable response (connection failure,
    /// malformed body, unexpected shape).
    #[error("{0}")]
    Transport(String),
}

impl GatewayError {
    pub fn status(status: u16, detail: Option<String>) -> Self {
        Self::Status { status, detail }
    }

    pub fn transport(message: impl ToString) -> Self {
        Self::Transport(message.to_string())
    }
}

/// Terminal failure of a workflow invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Input failed a local precondition. No request was sent.
    #[error("{0}")]
    Validation(String),

    /// The service rejected the request.
    #[error("{0}")]
    Service(String),

    /// Network failure or unreadable response.
    #[error("{0}")]
    Transport(String),
}

impl WorkflowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Maps a gateway failure into a workflow error.
    ///
    /// Service errors without a usable `detail` fall back to `fallback`, the
    /// workflow-specific generic message.
    pub fn from_gateway(error: GatewayError, fallback: &str) -> Self {
        match error {
            GatewayError::Status { detail, .. } => {
                Self::Service(detail.unwrap_or_else(|| fallback.to_string()))
            }
            GatewayError::Transport(message) if message.is_empty() => {
                Self::Transport(fallback.to_string())
            }
            GatewayError::Transport(message) => Self::Transport(message),
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Service(_) => "service_error",
            Self::Transport(_) => "transport_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Service(message) | Self::Transport(message) => {
                message
            }
        }
    }
}
