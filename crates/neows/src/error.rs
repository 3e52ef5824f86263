//! Error types for the neows crate.

use thiserror::Error;

/// Result type for neows operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, issuing or decoding a feed request.
#[derive(Debug, Error)]
pub enum Error {
    /// The start date did not parse as `YYYY-MM-DD`. No request was sent.
    #[error("invalid start date {input:?}: {reason}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
    /// The endpoint URL could not be parsed.
    #[error("invalid endpoint url {url:?}: {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// The error message.
        message: String,
    },
    /// HTTP request failed.
    #[error("http request to {url} failed: {message}")]
    Transport {
        /// The URL that failed.
        url: String,
        /// The error message.
        message: String,
    },
    /// HTTP response had a status other than `200 OK`.
    #[error("http request to {url} returned status {status}")]
    HttpStatus {
        /// The URL that returned the error.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
    /// The top-level document or its `near_earth_objects` member has the wrong shape.
    #[error("malformed feed envelope: {detail}")]
    MalformedEnvelope {
        /// Description of what was wrong.
        detail: String,
    },
    /// A field inside one object has an incompatible type.
    #[error("failed to decode object {index} under {date}: {message}")]
    FieldDecode {
        /// The date key the object was listed under.
        date: String,
        /// Position of the object within that date's array.
        index: usize,
        /// The error message.
        message: String,
    },
}

impl Error {
    /// Whether this error came from the transport (network failure or HTTP status).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::HttpStatus { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_category() {
        let status = Error::HttpStatus {
            url: "http://localhost/".to_string(),
            status: 503,
        };
        assert!(status.is_transport());
        assert_eq!(
            status.to_string(),
            "http request to http://localhost/ returned status 503"
        );

        let envelope = Error::MalformedEnvelope {
            detail: "expected an object".to_string(),
        };
        assert!(!envelope.is_transport());
    }

    #[test]
    fn test_invalid_date_message() {
        let err = Error::InvalidDate {
            input: "nope".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid start date \"nope\": expected YYYY-MM-DD"
        );
    }
}
