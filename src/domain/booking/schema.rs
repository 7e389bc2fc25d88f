//! Field schema - the static description of every booking field.
//!
//! Each field is addressed by a dotted path `section.key`, carries a
//! requirement class, and an explicit constraint tag decided here rather
//! than inferred from the key name at validation time.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize, Serializer};

use super::errors::BookingError;

/// `strftime` pattern accepted by date-constrained fields.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Minimum trimmed length for free-text fields.
pub const FREE_TEXT_MIN_LENGTH: usize = 10;

/// Top-level sections of the booking context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    RegistererDetails,
    TravelPlan,
    CompanyProvidedAccommodation,
    PassengerDetails,
    Approver,
}

impl Section {
    /// Returns all sections in declaration order.
    pub fn all() -> &'static [Section] {
        &[
            Section::RegistererDetails,
            Section::TravelPlan,
            Section::CompanyProvidedAccommodation,
            Section::PassengerDetails,
            Section::Approver,
        ]
    }

    /// Returns the key used in field paths and snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            Section::RegistererDetails => "registererDetails",
            Section::TravelPlan => "travelPlan",
            Section::CompanyProvidedAccommodation => "companyProvidedAccommodation",
            Section::PassengerDetails => "passengerDetails",
            Section::Approver => "approver",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// When a field has to be filled before the booking is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Always required.
    Always,
    /// Required only while the accommodation gate is open.
    Accommodation,
    /// Never required, validated when set.
    Optional,
}

/// Value constraint attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConstraint {
    /// Any non-empty value.
    None,
    /// Closed set of case-insensitive allowed values.
    OneOf(&'static [&'static str]),
    /// Calendar date in `dd/mm/yyyy`.
    Date,
    /// Free text with a minimum trimmed length.
    MinLength(usize),
}

impl FieldConstraint {
    /// Checks `value` against this constraint for `field`.
    pub fn check(&self, field: Field, value: &str) -> Result<(), BookingError> {
        match self {
            FieldConstraint::None => Ok(()),
            FieldConstraint::OneOf(allowed) => {
                let lowered = value.to_lowercase();
                if allowed.iter().any(|option| option.to_lowercase() == lowered) {
                    Ok(())
                } else {
                    Err(BookingError::invalid_value(
                        field,
                        format!(
                            "Invalid value '{}' for field '{}'. Allowed options: {}",
                            value,
                            field.path(),
                            allowed.join(", ")
                        ),
                    ))
                }
            }
            FieldConstraint::Date => {
                if is_date_shaped(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
                    Ok(())
                } else {
                    Err(BookingError::invalid_value(
                        field,
                        "Invalid date format, must be dd/mm/yyyy",
                    ))
                }
            }
            FieldConstraint::MinLength(min) => {
                if value.trim().chars().count() < *min {
                    Err(BookingError::invalid_value(
                        field,
                        "Additional details must be at least 10 characters",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns the allowed options for enum constraints.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            FieldConstraint::OneOf(allowed) => Some(allowed),
            _ => None,
        }
    }
}

/// `d/m/yyyy` digits only. Chrono alone would take short or signed years
/// and leading blanks.
fn is_date_shaped(value: &str) -> bool {
    let digits = |part: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    match value.split('/').collect::<Vec<_>>().as_slice() {
        [day, month, year] => digits(day, 1..=2) && digits(month, 1..=2) && digits(year, 4..=4),
        _ => false,
    }
}

const BILLABLE_TO: &[&str] = &["client", "company", "internal"];
const TRAVEL_TYPES: &[&str] = &["domestic", "international", "local"];
const TRAVEL_SCOPES: &[&str] = &["round trip", "multicity", "one way"];
const TRAVEL_MODES: &[&str] = &["air"];
const YES_NO: &[&str] = &["yes", "no"];

/// Every field of the booking context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ProjectOrOpportunity,
    BillableTo,
    TravelType,
    TravelScope,
    LeavingFrom,
    GoingTo,
    DepartureDate,
    TravelMode,
    CompanyProvidedAccommodationRequired,
    TravelPurpose,
    ReturnDate,
    AdditionalDetails,
    AccommodationCity,
    CheckIn,
    CheckOut,
    VisitingOfficeOrLocation,
    PassengerName,
    Relation,
    ApproverName,
}

const ALWAYS_REQUIRED: &[Field] = &[
    Field::ProjectOrOpportunity,
    Field::BillableTo,
    Field::TravelType,
    Field::TravelScope,
    Field::LeavingFrom,
    Field::GoingTo,
    Field::DepartureDate,
    Field::TravelMode,
    Field::CompanyProvidedAccommodationRequired,
    Field::TravelPurpose,
    Field::PassengerName,
    Field::Relation,
    Field::ApproverName,
];

const ACCOMMODATION: &[Field] = &[
    Field::AccommodationCity,
    Field::CheckIn,
    Field::CheckOut,
    Field::VisitingOfficeOrLocation,
];

const OPTIONAL: &[Field] = &[Field::ReturnDate, Field::AdditionalDetails];

const ALL: &[Field] = &[
    Field::ProjectOrOpportunity,
    Field::BillableTo,
    Field::TravelType,
    Field::TravelScope,
    Field::LeavingFrom,
    Field::GoingTo,
    Field::DepartureDate,
    Field::TravelMode,
    Field::CompanyProvidedAccommodationRequired,
    Field::TravelPurpose,
    Field::PassengerName,
    Field::Relation,
    Field::ApproverName,
    Field::AccommodationCity,
    Field::CheckIn,
    Field::CheckOut,
    Field::VisitingOfficeOrLocation,
    Field::ReturnDate,
    Field::AdditionalDetails,
];

static BY_PATH: Lazy<HashMap<&'static str, Field>> =
    Lazy::new(|| ALL.iter().map(|field| (field.path(), *field)).collect());

impl Field {
    /// The field whose "yes" value makes accommodation fields required.
    pub const GATE: Field = Field::CompanyProvidedAccommodationRequired;

    /// All fields in schema order: always-required, accommodation, optional.
    pub fn all() -> &'static [Field] {
        ALL
    }

    /// Always-required fields in question order.
    pub fn always_required() -> &'static [Field] {
        ALWAYS_REQUIRED
    }

    /// Fields required only when the accommodation gate is open.
    pub fn accommodation() -> &'static [Field] {
        ACCOMMODATION
    }

    /// Fields that are never required.
    pub fn optional() -> &'static [Field] {
        OPTIONAL
    }

    /// Looks a field up by its dotted path.
    pub fn from_path(path: &str) -> Option<Field> {
        BY_PATH.get(path).copied()
    }

    /// Returns the section this field lives in.
    pub fn section(&self) -> Section {
        match self {
            Field::ProjectOrOpportunity | Field::BillableTo => Section::RegistererDetails,
            Field::TravelType
            | Field::TravelScope
            | Field::LeavingFrom
            | Field::GoingTo
            | Field::DepartureDate
            | Field::TravelMode
            | Field::CompanyProvidedAccommodationRequired
            | Field::TravelPurpose
            | Field::ReturnDate
            | Field::AdditionalDetails => Section::TravelPlan,
            Field::AccommodationCity
            | Field::CheckIn
            | Field::CheckOut
            | Field::VisitingOfficeOrLocation => Section::CompanyProvidedAccommodation,
            Field::PassengerName | Field::Relation => Section::PassengerDetails,
            Field::ApproverName => Section::Approver,
        }
    }

    /// Returns the leaf key within the section.
    pub fn key(&self) -> &'static str {
        self.path()
            .split_once('.')
            .map(|(_, key)| key)
            .unwrap_or_default()
    }

    /// Returns the full dotted path.
    pub fn path(&self) -> &'static str {
        match self {
            Field::ProjectOrOpportunity => "registererDetails.projectOrOpportunity",
            Field::BillableTo => "registererDetails.billableTo",
            Field::TravelType => "travelPlan.travelType",
            Field::TravelScope => "travelPlan.travelScope",
            Field::LeavingFrom => "travelPlan.leavingFrom",
            Field::GoingTo => "travelPlan.goingTo",
            Field::DepartureDate => "travelPlan.departureDate",
            Field::TravelMode => "travelPlan.travelMode",
            Field::CompanyProvidedAccommodationRequired => {
                "travelPlan.companyProvidedAccommodationRequired"
            }
            Field::TravelPurpose => "travelPlan.travelPurpose",
            Field::ReturnDate => "travelPlan.returnDate",
            Field::AdditionalDetails => "travelPlan.additionalDetails",
            Field::AccommodationCity => "companyProvidedAccommodation.accommodationCity",
            Field::CheckIn => "companyProvidedAccommodation.checkIn",
            Field::CheckOut => "companyProvidedAccommodation.checkOut",
            Field::VisitingOfficeOrLocation => {
                "companyProvidedAccommodation.visitingOfficeOrLocation"
            }
            Field::PassengerName => "passengerDetails.passengerName",
            Field::Relation => "passengerDetails.relation",
            Field::ApproverName => "approver.approverName",
        }
    }

    /// Returns the requirement class.
    pub fn requirement(&self) -> Requirement {
        if ACCOMMODATION.contains(self) {
            Requirement::Accommodation
        } else if OPTIONAL.contains(self) {
            Requirement::Optional
        } else {
            Requirement::Always
        }
    }

    /// Returns true for the four conditionally-required accommodation fields.
    pub fn is_accommodation(&self) -> bool {
        self.requirement() == Requirement::Accommodation
    }

    /// Returns the value constraint.
    pub fn constraint(&self) -> FieldConstraint {
        match self {
            Field::BillableTo => FieldConstraint::OneOf(BILLABLE_TO),
            Field::TravelType => FieldConstraint::OneOf(TRAVEL_TYPES),
            Field::TravelScope => FieldConstraint::OneOf(TRAVEL_SCOPES),
            Field::TravelMode => FieldConstraint::OneOf(TRAVEL_MODES),
            Field::CompanyProvidedAccommodationRequired => FieldConstraint::OneOf(YES_NO),
            Field::DepartureDate | Field::ReturnDate => FieldConstraint::Date,
            Field::AdditionalDetails => FieldConstraint::MinLength(FREE_TEXT_MIN_LENGTH),
            _ => FieldConstraint::None,
        }
    }

    /// Validates a candidate value for this field.
    pub fn validate(&self, value: &str) -> Result<(), BookingError> {
        if value.trim().is_empty() {
            return Err(BookingError::invalid_value(
                *self,
                format!("Value for field '{}' cannot be empty", self.path()),
            ));
        }
        self.constraint().check(*self, value)
    }
}

/// Returns true when a stored gate value opens the accommodation section.
///
/// This is the only gate comparison in the crate; it ignores case.
pub fn opens_accommodation_gate(value: &str) -> bool {
    value.eq_ignore_ascii_case("yes")
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
