//! Booking engine errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::schema::Field;

/// Errors raised by booking context operations.
///
/// Every variant is local to one call: a failed operation leaves the
/// context exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The path is not part of the field schema.
    #[error("Invalid field name: {field}")]
    UnknownField { field: String },

    /// The value violates the field's constraint.
    #[error("{message}")]
    InvalidValue { field: String, message: String },

    /// The flight option is not in the catalog.
    #[error("Invalid flight option '{option}'. Choose 1, 2, or 3.")]
    InvalidOption { option: String },

    /// Lookup of an undeclared path.
    #[error("Field not found: {path}")]
    NotFound { path: String },

    /// The form still has pending fields.
    #[error("Booking is incomplete, pending fields: {}", pending.join(", "))]
    Incomplete { pending: Vec<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BookingError {
    pub fn unknown_field(field: impl Into<String>) -> Self {
        BookingError::UnknownField {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: Field, message: impl Into<String>) -> Self {
        BookingError::InvalidValue {
            field: field.path().to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_option(option: impl Into<String>) -> Self {
        BookingError::InvalidOption {
            option: option.into(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        BookingError::NotFound { path: path.into() }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::UnknownField { .. } => ErrorCode::UnknownField,
            BookingError::InvalidValue { .. } => ErrorCode::InvalidValue,
            BookingError::InvalidOption { .. } => ErrorCode::InvalidOption,
            BookingError::NotFound { .. } => ErrorCode::FieldNotFound,
            BookingError::Incomplete { .. } => ErrorCode::BookingIncomplete,
            BookingError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<BookingError> for DomainError {
    fn from(err: BookingError) -> Self {
        let code = err.code();
        let base = DomainError::new(code, err.to_string());
        match err {
            BookingError::UnknownField { field } | BookingError::InvalidValue { field, .. } => {
                base.with_detail("field", field)
            }
            BookingError::NotFound { path } => base.with_detail("field", path),
            BookingError::InvalidOption { option } => base.with_detail("option", option),
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_message_names_field() {
        let err = BookingError::unknown_field("travelPlan.hotel");
        assert_eq!(err.to_string(), "Invalid field name: travelPlan.hotel");
        assert_eq!(err.code(), ErrorCode::UnknownField);
    }

    #[test]
    fn invalid_value_displays_message_verbatim() {
        let err = BookingError::invalid_value(Field::DepartureDate, "Invalid date format, must be dd/mm/yyyy");
        assert_eq!(err.to_string(), "Invalid date format, must be dd/mm/yyyy");
    }

    #[test]
    fn incomplete_lists_pending_fields() {
        let err = BookingError::Incomplete {
            pending: vec!["approver.approverName".into(), "passengerDetails.relation".into()],
        };
        assert!(err.to_string().contains("approver.approverName, passengerDetails.relation"));
    }

    #[test]
    fn converts_to_domain_error_with_field_detail() {
        let err: DomainError = BookingError::invalid_value(Field::TravelMode, "nope").into();
        assert_eq!(err.code, ErrorCode::InvalidValue);
        assert_eq!(err.details.get("field"), Some(&"travelPlan.travelMode".to_string()));
    }
}
