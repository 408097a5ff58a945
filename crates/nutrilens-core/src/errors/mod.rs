// ABOUTME: Error type shared by every nutrilens crate
// ABOUTME: ErrorCode categories plus AppError with request context and source chaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! # Errors
//!
//! The derived-value components in `nutrilens-intelligence` never fail; they
//! report odd input through their result types. [`AppError`] is raised at the
//! edges instead: table and threshold validation, serving-unit checks, the
//! nutrition API client, and CLI input handling.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// What went wrong, independent of the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Nutrition API session token is missing or no longer accepted
    AuthExpired,
    /// A value failed validation (quantity, unit, pH)
    InvalidInput,
    /// A required value such as the query text is blank
    MissingRequiredField,
    /// No food matched the query
    ResourceNotFound,
    /// Nutrition API answered with an error status
    ExternalServiceError,
    /// Nutrition API could not be reached or timed out
    ExternalServiceUnavailable,
    /// Nutrition API answered 429
    ExternalRateLimited,
    /// HTTP client or runtime setup failed
    ConfigError,
    /// Thresholds, factors, or the pH table failed validation
    ConfigInvalid,
    /// JSON encoding or decoding failed
    SerializationError,
}

impl ErrorCode {
    /// Short description used as the display prefix
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthExpired => "The authentication token has expired",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ResourceNotFound => "No matching food was found",
            Self::ExternalServiceError => "The nutrition service returned an error",
            Self::ExternalServiceUnavailable => "The nutrition service is unavailable",
            Self::ExternalRateLimited => "The nutrition service is rate limiting requests",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Request context attached to an error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request ID sent as `X-Request-Id`
    pub request_id: Option<String>,
    /// Structured details (HTTP status and the like)
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type
#[derive(Debug, Error)]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Message shown to the user
    pub message: String,
    /// Request context
    pub context: ErrorContext,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the request ID
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Session expired; the caller must log in again
    #[must_use]
    pub fn auth_expired() -> Self {
        Self::new(
            ErrorCode::AuthExpired,
            "Session expired. Please login again.",
        )
    }

    /// No food matched
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required value is blank
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Setup failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration values failed validation
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Nutrition service returned an error
    pub fn external_service(service: &str, message: impl fmt::Display) -> Self {
        Self::new(ErrorCode::ExternalServiceError, format!("{service}: {message}"))
    }

    /// Nutrition service could not be reached
    pub fn external_unavailable(service: &str, message: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{service}: {message}"),
        )
    }

    /// Nutrition service throttled the request
    pub fn external_rate_limited(service: &str, message: impl fmt::Display) -> Self {
        Self::new(ErrorCode::ExternalRateLimited, format!("{service}: {message}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_prefixes_description() {
        let error = AppError::not_found("No food found matching 'dragonfruit'")
            .with_request_id("req-123")
            .with_details(json!({ "status": 404 }));

        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.context.request_id.as_deref(), Some("req-123"));
        assert_eq!(error.context.details["status"], 404);
        assert_eq!(
            error.to_string(),
            "No matching food was found: No food found matching 'dragonfruit'"
        );
    }

    #[test]
    fn test_code_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(ErrorCode::ExternalRateLimited).unwrap(),
            "EXTERNAL_RATE_LIMITED"
        );
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_error = serde_json::from_str::<Value>("{not json").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }
}
