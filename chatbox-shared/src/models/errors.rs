//! # Chat Error Types
//!
//! Failures of an enhanced chat request. The `Display` form of each variant is
//! exactly the text of the assistant bubble that reports it.

use thiserror::Error;

/// Result type alias for enhanced chat requests
pub type ChatResult<T> = Result<T, ChatError>;

/// Everything that can go wrong between submitting a query and rendering its reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The server answered with a non-2xx status
    #[error("Error: {}", http_detail(.body, .status_text))]
    Http {
        /// Numeric status code
        status: u16,
        /// Reason phrase for `status`
        status_text: String,
        /// Response body as text
        body: String,
    },

    /// The request never produced an HTTP status
    #[error("Network error: {message}")]
    Transport {
        /// Description of the failure
        message: String,
    },

    /// A 2xx body could not be decoded as a reply
    #[error("Network error: {details}")]
    Decode {
        /// Parser or shape error description
        details: String,
    },
}

impl ChatError {
    /// Create a new HTTP failure error
    #[must_use]
    pub fn http(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Create a new transport error
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new decode error
    #[must_use]
    pub fn decode(details: impl Into<String>) -> Self {
        Self::Decode {
            details: details.into(),
        }
    }

    /// HTTP status when the server answered at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

fn http_detail<'a>(body: &'a str, status_text: &'a str) -> &'a str {
    if body.is_empty() { status_text } else { body }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the response body is preferred for HTTP errors
    #[test]
    fn test_http_error_uses_body() {
        let error = ChatError::http(400, "Bad Request", "bad query");
        assert_eq!(error.to_string(), "Error: bad query");
        assert_eq!(error.status(), Some(400));
    }

    /// Test that the status line is used when the body is empty
    #[test]
    fn test_http_error_falls_back_to_status_text() {
        let error = ChatError::http(502, "Bad Gateway", "");
        assert_eq!(error.to_string(), "Error: Bad Gateway");
    }

    /// Test the transport error text
    #[test]
    fn test_transport_error_display() {
        let error = ChatError::transport("timeout");
        assert_eq!(error.to_string(), "Network error: timeout");
        assert_eq!(error.status(), None);
    }

    /// Test conversion from a JSON decoding failure
    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = ChatError::from(err);
        assert!(matches!(error, ChatError::Decode { .. }));
        assert!(error.to_string().starts_with("Network error: "));
    }
}
