//! Word service response types.
//!
//! All word service REST responses follow a common envelope format with
//! status, message, and optional data/error fields.

use serde::{Deserialize, Serialize};

/// Standard word service response envelope.
///
/// ```json
/// { "status": 200, "message": "Success!", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerResponse<T = serde_json::Value> {
    /// HTTP-like status code from the service.
    pub status: u16,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Response payload data (type varies by endpoint).
    pub data: Option<T>,
    /// Error details (present only on error responses).
    pub error: Option<ServerError>,
}

/// Service error detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerError {
    /// Error type identifier.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// Error message.
    pub message: Option<String>,
}

impl<T> ServerResponse<T> {
    /// Whether the response indicates success (status 200).
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Whether the response indicates an error.
    pub fn is_error(&self) -> bool {
        self.status != 200
    }

    /// Get the error message if this is an error response.
    pub fn error_message(&self) -> Option<String> {
        if self.is_error() {
            self.error
                .as_ref()
                .and_then(|e| e.message.clone())
                .or_else(|| Some(self.message.clone()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success() {
        let json = r#"{"status":200,"message":"Success!","data":{"words":["CAT"]}}"#;
        let resp: ServerResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert!(resp.error_message().is_none());
    }

    #[test]
    fn test_response_error() {
        let json = r#"{"status":401,"message":"Unauthorized","error":{"type":"auth","message":"Bad key"}}"#;
        let resp: ServerResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.error_message().unwrap(), "Bad key");
    }

    #[test]
    fn test_error_message_falls_back_to_message() {
        let json = r#"{"status":500,"message":"boom"}"#;
        let resp: ServerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error_message().unwrap(), "boom");
    }
}
