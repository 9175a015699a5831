// ABOUTME: Recipe backend error types for suggestion, generation, and similar-recipe calls
// ABOUTME: Provides structured failures that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # API Error Types
//!
//! The failure kinds of a backend call, each tagged with the endpoint that
//! produced it:
//! - transport failures (unreachable host, timeout)
//! - non-success HTTP statuses
//! - decode failures (body is not JSON or lacks the required shape)
//! - application failures (body carries an explicit `error` field)

use super::{AppError, ErrorCode};

/// Errors specific to recipe backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("request to {endpoint} failed: {reason}")]
    Transport {
        /// Endpoint path that was called
        endpoint: String,
        /// Transport-level reason
        reason: String,
    },
    /// Response arrived with a non-success status
    #[error("{endpoint} returned HTTP {status}{}", reason_suffix(.reason.as_deref()))]
    Status {
        /// Endpoint path that was called
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Error text extracted from the body, when any
        reason: Option<String>,
    },
    /// Response body could not be decoded into the expected shape
    #[error("unexpected response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint path that was called
        endpoint: String,
        /// Decoder message
        reason: String,
    },
    /// Response body carried an explicit error indicator
    #[error("{message}")]
    Application {
        /// Endpoint path that was called
        endpoint: String,
        /// Error message sent by the backend
        message: String,
    },
}

impl ApiError {
    /// Create a transport error
    #[must_use]
    pub fn transport(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Create a non-success status error
    #[must_use]
    pub fn status(endpoint: impl Into<String>, status: u16, reason: Option<String>) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
            reason,
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Create an application-level error
    #[must_use]
    pub fn application(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Application {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Get the endpoint associated with this error
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::Application { endpoint, .. } => endpoint,
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Transport { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::Status { .. } => ErrorCode::ExternalServiceError,
            Self::Decode { .. } => ErrorCode::SerializationError,
            Self::Application { .. } => ErrorCode::ApplicationError,
        }
    }
}

fn reason_suffix(reason: Option<&str>) -> String {
    reason.map_or_else(String::new, |reason| format!(": {reason}"))
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        let code = error.code();
        let endpoint = error.endpoint().to_owned();
        let message = error.to_string();
        let app_error = Self::new(code, message).with_endpoint(endpoint);
        match error {
            ApiError::Status { status, .. } => {
                app_error.with_details(serde_json::json!({ "status": status }))
            }
            _ => app_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_keeps_backend_message() {
        let error = AppError::from(ApiError::application(
            "/api/generate-recipe",
            "No ingredients provided",
        ));
        assert_eq!(error.code, ErrorCode::ApplicationError);
        assert_eq!(error.user_message(), "No ingredients provided");
        assert_eq!(
            error.context.endpoint.as_deref(),
            Some("/api/generate-recipe")
        );
    }

    #[test]
    fn test_status_error_records_status_detail() {
        let error = AppError::from(ApiError::status(
            "/api/similar-recipes",
            500,
            Some("Request timed out".to_owned()),
        ));
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert_eq!(error.context.details["status"], 500);
        assert!(error.message.contains("Request timed out"));
    }

    #[test]
    fn test_display_without_reason() {
        let error = ApiError::status("/api/ingredients", 404, None);
        assert_eq!(error.to_string(), "/api/ingredients returned HTTP 404");
    }

    #[test]
    fn test_display_per_variant() {
        assert_eq!(
            ApiError::status("/api/ingredients", 502, Some("Bad Gateway".to_owned())).to_string(),
            "/api/ingredients returned HTTP 502: Bad Gateway"
        );
        assert_eq!(
            ApiError::transport("/api/generate-recipe", "connection refused").to_string(),
            "request to /api/generate-recipe failed: connection refused"
        );
        assert_eq!(
            ApiError::decode("/api/similar-recipes", "missing field `recipes`").to_string(),
            "unexpected response from /api/similar-recipes: missing field `recipes`"
        );
        assert_eq!(
            ApiError::application("/api/generate-recipe", "Model overloaded").to_string(),
            "Model overloaded"
        );
    }

    #[test]
    fn test_api_error_is_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(ApiError::transport("/api/ingredients", "timeout"));
        assert!(boxed.source().is_none());
    }
}
