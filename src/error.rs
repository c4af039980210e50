//! Error handling for handle-scout

use thiserror::Error;

/// Main error type for handle-scout
#[derive(Error, Debug, Clone)]
pub enum HandleScoutError {
    #[error("availability probe for '{site}' failed: {message}")]
    Request { site: String, message: String },

    #[error("reading response body failed: {message}")]
    BodyRead { message: String },

    #[error("availability rule for '{site}' failed: {message}")]
    Rule { site: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl HandleScoutError {
    /// Create a request error for one site probe
    pub fn request(site: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            site: site.into(),
            message: message.into(),
        }
    }

    /// Create a body-read error
    pub fn body_read(message: impl Into<String>) -> Self {
        Self::BodyRead {
            message: message.into(),
        }
    }

    /// Create a rule evaluation error for one site
    pub fn rule(site: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rule {
            site: site.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for HandleScoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HandleScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_site_context() {
        let err = HandleScoutError::request("Twitch", "connection refused");
        assert_eq!(
            err.to_string(),
            "availability probe for 'Twitch' failed: connection refused"
        );

        let err = HandleScoutError::rule("Reddit", "reading response body failed: reset");
        assert!(err.to_string().contains("Reddit"));
        assert!(err.to_string().contains("reset"));
    }

    #[test]
    fn test_body_read_message() {
        let err = HandleScoutError::body_read("stream closed");
        assert_eq!(err.to_string(), "reading response body failed: stream closed");
    }
}
