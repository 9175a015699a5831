// ABOUTME: Unified error handling with standard error codes for the Recipe Picker client
// ABOUTME: Defines AppError, ErrorCode, and conversions from transport and decode failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the client returns [`AppResult`]. Pipeline failures
//! (transport, decode, explicit error payloads) all end up as an [`AppError`] whose
//! [`AppError::user_message`] is rendered inline in the relevant panel.

/// Recipe backend call failures
pub mod api;

pub use api::ApiError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    #[serde(rename = "APPLICATION_ERROR")]
    ApplicationError = 5004,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Storage and decoding (9000-9999)
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ExternalServiceError => "The recipe service returned an error",
            Self::ExternalServiceUnavailable => "The recipe service is currently unreachable",
            Self::ApplicationError => "The recipe service could not complete the request",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Pipeline request ID for log correlation
    pub request_id: Option<Uuid>,
    /// Endpoint path the failure relates to, if any
    pub endpoint: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            endpoint: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach a pipeline request ID
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.context.request_id = Some(request_id);
        self
    }

    /// Attach the endpoint path the failure relates to
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.context.endpoint = Some(endpoint.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Reason shown inline in the UI panel that owns the failed operation
    ///
    /// Application-level failures carry the backend's own wording, so they are shown
    /// verbatim; everything else is prefixed with the code description.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.message.is_empty() {
            return self.code.description().to_owned();
        }
        match self.code {
            ErrorCode::ApplicationError => self.message.clone(),
            _ => format!("{}: {}", self.code.description(), self.message),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration value could not be parsed or validated
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_decode() {
            ErrorCode::SerializationError
        } else if error.is_status() {
            ErrorCode::ExternalServiceError
        } else {
            ErrorCode::ExternalServiceUnavailable
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ApplicationError).unwrap();
        assert_eq!(json, "\"APPLICATION_ERROR\"");
    }

    #[test]
    fn test_every_code_has_stable_name() {
        let names: Vec<String> = [
            ErrorCode::ExternalServiceError,
            ErrorCode::ExternalServiceUnavailable,
            ErrorCode::ApplicationError,
            ErrorCode::ConfigError,
            ErrorCode::ConfigInvalid,
            ErrorCode::StorageError,
            ErrorCode::SerializationError,
        ]
        .iter()
        .map(|code| serde_json::to_value(code).unwrap().as_str().unwrap().to_owned())
        .collect();
        assert_eq!(
            names,
            [
                "EXTERNAL_SERVICE_ERROR",
                "EXTERNAL_SERVICE_UNAVAILABLE",
                "APPLICATION_ERROR",
                "CONFIG_ERROR",
                "CONFIG_INVALID",
                "STORAGE_ERROR",
                "SERIALIZATION_ERROR",
            ]
        );
    }

    #[test]
    fn test_user_message_keeps_backend_wording() {
        let error = AppError::new(ErrorCode::ApplicationError, "No ingredients provided");
        assert_eq!(error.user_message(), "No ingredients provided");

        let error = AppError::new(ErrorCode::ExternalServiceUnavailable, "connection refused");
        assert!(error.user_message().starts_with("The recipe service is currently unreachable"));
        assert!(error.user_message().ends_with("connection refused"));
    }

    #[test]
    fn test_context_builders() {
        let request_id = Uuid::new_v4();
        let error = AppError::config("boom")
            .with_request_id(request_id)
            .with_endpoint("/api/generate-recipe");
        assert_eq!(error.context.request_id, Some(request_id));
        assert_eq!(
            error.context.endpoint.as_deref(),
            Some("/api/generate-recipe")
        );
    }

    #[test]
    fn test_json_error_converts_to_serialization_code() {
        let parse_error = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }
}
