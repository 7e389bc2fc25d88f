//! Booking summary handed to the traveller for confirmation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::context::BookingContext;
use super::errors::BookingError;
use super::schema::Field;

/// Output shape for a rendered summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Json,
    Yaml,
}

/// A confirmable view of a finished booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    #[serde(flatten)]
    booking: BookingContext,
    approval_message: String,
}

impl BookingSummary {
    /// Builds a summary from a complete context.
    ///
    /// # Errors
    ///
    /// Returns `Incomplete` with the pending paths while the form is unfinished.
    pub fn from_context(context: &BookingContext) -> Result<Self, BookingError> {
        if !context.is_complete() {
            return Err(BookingError::Incomplete {
                pending: context
                    .pending_fields()
                    .iter()
                    .map(|field| field.path().to_string())
                    .collect(),
            });
        }

        let approver = context.value(Field::ApproverName).unwrap_or("the approver");
        Ok(Self {
            booking: context.snapshot(),
            approval_message: format!("travel request is sent to {} for approval", approver),
        })
    }

    pub fn booking(&self) -> &BookingContext {
        &self.booking
    }

    pub fn approval_message(&self) -> &str {
        &self.approval_message
    }

    /// Renders the summary as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// JSON object, or a single YAML document as a JSON string.
    pub fn render(&self, format: SummaryFormat) -> Result<Value, String> {
        match format {
            SummaryFormat::Json => serde_json::to_value(self).map_err(|e| e.to_string()),
            SummaryFormat::Yaml => self.to_yaml().map(Value::String).map_err(|e| e.to_string()),
        }
    }
}
