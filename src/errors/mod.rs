//! Error handling module for the roster client.
//!
//! Every failure the client can meet is classified here so the dispatcher and
//! fetcher can decide between "the server said no" and "the request never
//! produced a usable answer".

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
    pub const REJECTED: &str = "REJECTED";
    pub const RENDER_ERROR: &str = "RENDER_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error type.
#[derive(Debug)]
pub enum ClientError {
    /// Network unreachable, connection reset, body could not be read
    Transport(String),
    /// Response body is not the documented shape
    Malformed(String),
    /// Server answered with a non-success status
    Status {
        status: u16,
        detail: Option<String>,
    },
    /// Template rendering failed
    Render(String),
    /// Invalid configuration
    Config(String),
}

impl ClientError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => codes::TRANSPORT_ERROR,
            ClientError::Malformed(_) => codes::MALFORMED_RESPONSE,
            ClientError::Status { .. } => codes::REJECTED,
            ClientError::Render(_) => codes::RENDER_ERROR,
            ClientError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::Transport(msg) => msg.clone(),
            ClientError::Malformed(msg) => msg.clone(),
            ClientError::Status {
                status,
                detail: Some(detail),
            } => format!("status {}: {}", status, detail),
            ClientError::Status {
                status,
                detail: None,
            } => format!("status {}", status),
            ClientError::Render(msg) => msg.clone(),
            ClientError::Config(msg) => msg.clone(),
        }
    }

    /// True when the server understood the request and declined it.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }

    /// Server supplied detail for a rejection, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Malformed(format!("Response decode error: {}", err))
        } else {
            ClientError::Transport(format!("HTTP error: {}", err))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Malformed(format!("JSON error: {}", err))
    }
}

impl From<askama::Error> for ClientError {
    fn from(err: askama::Error) -> Self {
        ClientError::Render(format!("Template error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_classification() {
        let rejected = ClientError::Status {
            status: 400,
            detail: Some("Activity is full".to_string()),
        };
        assert!(rejected.is_rejection());
        assert_eq!(rejected.detail(), Some("Activity is full"));
        assert_eq!(rejected.to_string(), "REJECTED: status 400: Activity is full");

        let transport = ClientError::Transport("connection refused".to_string());
        assert!(!transport.is_rejection());
        assert_eq!(transport.detail(), None);
        assert_eq!(transport.error_code(), codes::TRANSPORT_ERROR);
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(err.error_code(), codes::MALFORMED_RESPONSE);
        assert!(!err.is_rejection());
    }
}
