//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response body
///
/// Every failed request is serialized into this shape at the handler
/// boundary. `detail` carries the underlying driver diagnostic for
/// storage failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional underlying diagnostic (e.g. database driver text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Timestamp of when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            detail: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach an underlying diagnostic
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse::new("not_found", "Product not found"))
            .expect("serializable");
        assert_eq!(body["error"], "not_found");
        assert!(body.get("detail").is_none());
    }

    #[test]
    fn test_detail_is_serialized_when_present() {
        let body = serde_json::to_value(
            ErrorResponse::new("storage_error", "query failed")
                .with_detail("relation \"products\" does not exist"),
        )
        .expect("serializable");
        assert_eq!(body["detail"], "relation \"products\" does not exist");
    }
}
