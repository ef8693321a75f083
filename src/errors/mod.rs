//! Error handling module for the positions dashboard.
//!
//! Every failure the dashboard can surface is a `DashboardError`. The `Display`
//! output is the one-line message shown in the dashboard's error banner.

use std::fmt;

/// Fallback text when the transport gives no usable message.
pub const NETWORK_FALLBACK_MESSAGE: &str = "Network error, please try again";

/// The remote operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Verb phrase used in user-facing messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Operation::List => "fetch positions",
            Operation::Create => "create position",
            Operation::Update => "update position",
            Operation::Delete => "delete position",
        }
    }
}

/// Dashboard error type.
#[derive(Debug)]
pub enum DashboardError {
    /// The API answered 401; the session has already been invalidated
    AuthExpired,
    /// Any other non-success status
    RequestFailed { operation: Operation, status: u16 },
    /// Transport-level failure
    Network(String),
    /// The list response was neither an array nor a `data` envelope
    Decode(String),
    /// Invalid configuration
    Config(String),
    /// Token store failure
    Session(String),
}

impl DashboardError {
    /// Whether this error belongs in the inline error banner.
    ///
    /// Expired sessions are handled by navigation instead.
    pub fn is_displayable(&self) -> bool {
        !matches!(self, DashboardError::AuthExpired)
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::AuthExpired => write!(f, "Session expired, please log in again"),
            DashboardError::RequestFailed { operation, status } => {
                write!(f, "Failed to {} (status {})", operation.describe(), status)
            }
            DashboardError::Network(msg) if msg.trim().is_empty() => {
                write!(f, "{}", NETWORK_FALLBACK_MESSAGE)
            }
            DashboardError::Network(msg) => write!(f, "{}", msg),
            DashboardError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            DashboardError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DashboardError::Session(msg) => write!(f, "Session error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        tracing::warn!("Transport error: {:?}", err);
        DashboardError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!("JSON error: {:?}", err);
        DashboardError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Token store error: {:?}", err);
        DashboardError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message_names_operation_and_status() {
        let err = DashboardError::RequestFailed {
            operation: Operation::Update,
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to update position (status 500)");
    }

    #[test]
    fn test_network_error_falls_back_to_generic_message() {
        assert_eq!(
            DashboardError::Network(String::new()).to_string(),
            NETWORK_FALLBACK_MESSAGE
        );
        assert_eq!(
            DashboardError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_auth_expired_is_not_displayable() {
        assert!(!DashboardError::AuthExpired.is_displayable());
        assert!(DashboardError::Decode("bad".to_string()).is_displayable());
    }
}
