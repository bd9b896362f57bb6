//! Error response body (RFC 7807 Problem Details).

use serde::{Deserialize, Serialize};

/// Problem type URIs used by the posts API.
pub mod problem {
    pub const VALIDATION: &str = "/problems/validation-error";
    pub const NOT_FOUND: &str = "/problems/not-found";
    pub const INTERNAL: &str = "about:blank";
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error_type: &str, status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: error_type.to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 400 for a missing or malformed field.
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(problem::VALIDATION, 400, "ValidationError").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(problem::NOT_FOUND, 404, "NotFound").with_detail(detail)
    }

    /// Internal details are never sent to the client.
    pub fn internal_error() -> Self {
        Self::new(problem::INTERNAL, 500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_type_key() {
        let body = serde_json::to_value(ErrorResponse::not_found("gone")).unwrap();
        assert_eq!(body["type"], problem::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["detail"], "gone");
    }

    #[test]
    fn test_internal_error_has_no_detail() {
        let body = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        assert!(body.get("detail").is_none());
    }
}
