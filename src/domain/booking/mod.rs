//! Booking module - the field-collection engine.
//!
//! ## Key Types
//!
//! - [`Field`] - Schema entry: path, requirement class, constraint
//! - [`BookingContext`] - Per-session store with write-time validation
//! - [`BookingStage`] - Derived lifecycle stage
//! - [`BookingSession`] - Aggregate owning one context
//! - [`BookingSummary`] - Confirmable view of a finished booking
//!
//! Pending fields, completeness and the next question are read-only
//! queries on [`BookingContext`].

mod context;
mod errors;
mod progress;
mod question;
mod schema;
mod session;
mod stage;
mod summary;

pub use context::{
    Approver, BookingContext, CompanyProvidedAccommodation, PassengerDetails, RegistererDetails,
    TravelPlan,
};
pub use errors::BookingError;
pub use progress::NextNode;
pub use question::{humanize_key, ALL_FIELDS_COMPLETE};
pub use schema::{
    opens_accommodation_gate, Field, FieldConstraint, Requirement, Section, DATE_FORMAT,
    FREE_TEXT_MIN_LENGTH,
};
pub use session::BookingSession;
pub use stage::BookingStage;
pub use summary::{BookingSummary, SummaryFormat};
