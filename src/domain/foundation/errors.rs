//! Cross-layer error vocabulary.
//!
//! Each layer keeps its own `thiserror` enum; they all map onto an
//! [`ErrorCode`] so callers get a stable machine-readable code.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A parameter or value object that failed its shape check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field or parameter.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field, .. } => {
                field
            }
        }
    }
}

/// Stable error codes exposed to tool callers and HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rejected input
    ValidationFailed,
    UnknownField,
    InvalidValue,
    InvalidOption,

    // Missing things
    FieldNotFound,
    SessionNotFound,
    ToolNotFound,

    // Access
    ToolNotPermitted,

    // Lifecycle
    BookingIncomplete,
    SessionLimitReached,

    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnknownField => "UNKNOWN_FIELD",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::InvalidOption => "INVALID_OPTION",
            ErrorCode::FieldNotFound => "FIELD_NOT_FOUND",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::ToolNotFound => "TOOL_NOT_FOUND",
            ErrorCode::ToolNotPermitted => "TOOL_NOT_PERMITTED",
            ErrorCode::BookingIncomplete => "BOOKING_INCOMPLETE",
            ErrorCode::SessionLimitReached => "SESSION_LIMIT_REACHED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Code, human message and free-form context for one failure.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// A `ValidationFailed` error naming the field at fault.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.field().to_string(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validation_error {
        use super::*;

        #[test]
        fn messages_name_the_field() {
            assert_eq!(
                ValidationError::empty_field("option").to_string(),
                "Field 'option' cannot be empty"
            );
            assert_eq!(
                ValidationError::invalid_format("flight", "expected 4 parts").to_string(),
                "Field 'flight' has invalid format: expected 4 parts"
            );
        }

        #[test]
        fn field_accessor_covers_both_variants() {
            assert_eq!(ValidationError::empty_field("a").field(), "a");
            assert_eq!(ValidationError::invalid_format("b", "x").field(), "b");
        }
    }

    mod domain_error {
        use super::*;

        #[test]
        fn display_prefixes_code() {
            let err = DomainError::new(ErrorCode::SessionNotFound, "no such session");
            assert_eq!(err.to_string(), "[SESSION_NOT_FOUND] no such session");
        }

        #[test]
        fn details_accumulate() {
            let err = DomainError::new(ErrorCode::InvalidValue, "rail is not offered")
                .with_detail("field", "travelPlan.travelMode")
                .with_detail("value", "rail");

            assert_eq!(err.details.len(), 2);
            assert_eq!(err.details["value"], "rail");
        }

        #[test]
        fn converts_from_validation_error() {
            let err: DomainError = ValidationError::empty_field("value").into();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
            assert_eq!(err.details["field"], "value");
        }
    }

    #[test]
    fn codes_render_screaming_snake_case() {
        assert_eq!(ErrorCode::UnknownField.to_string(), "UNKNOWN_FIELD");
        assert_eq!(ErrorCode::BookingIncomplete.as_str(), "BOOKING_INCOMPLETE");
        assert_eq!(ErrorCode::ToolNotPermitted.to_string(), "TOOL_NOT_PERMITTED");
    }
}
