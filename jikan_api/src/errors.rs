//! Error types for the API client.

use serde_json::Value;

/// Status reported for a request cancelled by the client timeout.
pub const TIMEOUT_STATUS: u16 = 408;

/// Status reported for network faults and undecodable success bodies.
pub const FAULT_STATUS: u16 = 500;

/// Errors that can occur when making API requests.
///
/// Every variant carries the same record: a message, an HTTP status (or a
/// sentinel for failures that never produced one) and an optional payload.
/// Callers that only care about the status can branch on [`Error::status`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a non-2xx status.
    ///
    /// `data` holds the response body parsed as JSON, or an empty object when
    /// the body was not JSON.
    #[error("API request failed with status {status}")]
    HttpStatus { status: u16, data: Value },
    /// The request did not complete before the configured timeout.
    #[error("Request timeout")]
    Timeout,
    /// The request never produced a response (DNS, connect, TLS, invalid URL
    /// or header, ...).
    #[error("{}", fault_message(.message))]
    Transport { message: String },
    /// A 2xx body did not match the expected response type.
    #[error("{message}")]
    Decode { message: String },
}

impl Error {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Error::Transport {
            message: message.into(),
        }
    }

    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of the failed response, or [`TIMEOUT_STATUS`] /
    /// [`FAULT_STATUS`] when there was none.
    pub fn status(&self) -> u16 {
        match self {
            Error::HttpStatus { status, .. } => *status,
            Error::Timeout => TIMEOUT_STATUS,
            Error::Transport { .. } | Error::Decode { .. } => FAULT_STATUS,
        }
    }

    /// Diagnostic payload from the failed response body.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Error::HttpStatus { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Returns `true` if the request was cancelled by the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout)
    }
}

fn fault_message(message: &str) -> &str {
    if message.is_empty() {
        "Unknown error occurred"
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn http_status_message_and_payload() {
        let err = Error::HttpStatus {
            status: 404,
            data: json!({"message": "Not found"}),
        };
        assert_eq!(err.message(), "API request failed with status 404");
        assert_eq!(err.status(), 404);
        assert_eq!(err.data(), Some(&json!({"message": "Not found"})));
    }

    #[test]
    fn timeout_uses_sentinel_status() {
        let err = Error::Timeout;
        assert_eq!(err.message(), "Request timeout");
        assert_eq!(err.status(), 408);
        assert!(err.data().is_none());
        assert!(err.is_timeout());
    }

    #[test]
    fn transport_keeps_fault_message() {
        let err = Error::transport("Network error");
        assert_eq!(err.message(), "Network error");
        assert_eq!(err.status(), 500);
        assert!(err.data().is_none());
    }

    #[test]
    fn transport_without_message_falls_back() {
        let err = Error::transport("");
        assert_eq!(err.message(), "Unknown error occurred");
        assert_eq!(err.status(), 500);
    }

    #[test]
    fn decode_reports_fault_status() {
        let err = Error::Decode {
            message: "missing field `data`".to_string(),
        };
        assert_eq!(err.status(), 500);
        assert_eq!(err.message(), "missing field `data`");
    }
}
