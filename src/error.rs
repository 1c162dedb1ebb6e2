use std::fmt;

/// Custom error type for Kestra operations
#[derive(Debug)]
pub enum KestraError {
    /// HTTP transport failed
    Http(reqwest::Error),
    /// Missing or invalid configuration (context, field, config file)
    Config(String),
    /// Unknown resource or context name
    NotFound(String),
    /// Authentication or authorization rejected by the server (401/403)
    Auth { status: u16, message: String },
    /// Request rejected as invalid; no status for client-side checks
    Validation { status: Option<u16>, message: String },
    /// Server-side failure (5xx)
    Server { status: u16, message: String },
    /// JSON parsing error
    Json(String),
}

impl fmt::Display for KestraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KestraError::Http(e) => write!(f, "HTTP request failed: {}", e),
            KestraError::Config(msg) => write!(f, "Configuration error: {}", msg),
            KestraError::NotFound(msg) => write!(f, "{}", msg),
            KestraError::Auth { status, message } => {
                write!(f, "Authentication failed (status {}): {}", status, message)
            }
            KestraError::Validation {
                status: Some(status),
                message,
            } => {
                write!(f, "Validation error (status {}): {}", status, message)
            }
            KestraError::Validation {
                status: None,
                message,
            } => write!(f, "Validation error: {}", message),
            KestraError::Server { status, message } => {
                write!(f, "Server error (status {}): {}", status, message)
            }
            KestraError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for KestraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KestraError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for KestraError {
    fn from(err: reqwest::Error) -> Self {
        KestraError::Http(err)
    }
}

impl From<serde_json::Error> for KestraError {
    fn from(err: serde_json::Error) -> Self {
        KestraError::Json(err.to_string())
    }
}

/// Result type alias for Kestra operations
pub type Result<T> = std::result::Result<T, KestraError>;
