use std::fmt;

/// Outcome of every remote operation.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the SafeEat API.
///
/// Variants are carried unmodified from the client into the result bridge;
/// nothing in between retries or rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Client misconfigured (base URL that cannot carry a path).
    Config(String),
    /// No response reached us (DNS, connection refused, reset).
    Network(String),
    /// The server rejected the request (4xx, including not-found).
    Client { status: u16, message: String },
    /// The server failed to handle the request (5xx).
    Server { status: u16, message: String },
    /// The response body did not match the expected shape, or a record
    /// lacked a field the caller required.
    Decode(String),
    /// The background task died before producing a value.
    Interrupted,
}

impl ApiError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, message: String) -> Self {
        if (500..600).contains(&status) {
            ApiError::Server { status, message }
        } else {
            ApiError::Client { status, message }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Client { status: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Client { status, message } => {
                write!(f, "request rejected (HTTP {status}): {message}")
            }
            ApiError::Server { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
            ApiError::Interrupted => write!(f, "request interrupted"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_ranges() {
        assert!(matches!(
            ApiError::from_status(404, "missing".into()),
            ApiError::Client { status: 404, .. }
        ));
        assert!(matches!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server { status: 500, .. }
        ));
        assert!(matches!(
            ApiError::from_status(503, String::new()),
            ApiError::Server { status: 503, .. }
        ));
        // Unfollowed redirects are still the caller's problem
        assert!(matches!(
            ApiError::from_status(304, String::new()),
            ApiError::Client { status: 304, .. }
        ));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ApiError::from_status(404, String::new()).is_not_found());
        assert!(!ApiError::from_status(400, String::new()).is_not_found());
        assert!(!ApiError::Network("down".into()).is_not_found());
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::from_status(500, "db offline".into());
        assert_eq!(err.to_string(), "server error (HTTP 500): db offline");
    }
}
