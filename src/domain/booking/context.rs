//! Booking context store.
//!
//! The nested record of every field value plus the selected flight. All
//! writes go through [`BookingContext::update`], [`BookingContext::select_flight`]
//! or [`BookingContext::reset`]; each validates first and then touches at
//! most one leaf, so a failed call never leaves partial state behind.

use serde::Serialize;

use crate::domain::flight::{FlightCatalog, SelectedFlight};

use super::errors::BookingError;
use super::schema::Field;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistererDetails {
    pub project_or_opportunity: Option<String>,
    pub billable_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    pub travel_type: Option<String>,
    pub travel_scope: Option<String>,
    pub leaving_from: Option<String>,
    pub going_to: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub travel_mode: Option<String>,
    pub company_provided_accommodation_required: Option<String>,
    pub travel_purpose: Option<String>,
    pub additional_details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProvidedAccommodation {
    pub accommodation_city: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub visiting_office_or_location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDetails {
    pub passenger_name: Option<String>,
    pub relation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Approver {
    pub approver_name: Option<String>,
}

/// The mutable booking record owned by one session.
///
/// Invariant: a value stored for a constrained field satisfies that
/// field's constraint at the time it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingContext {
    registerer_details: RegistererDetails,
    travel_plan: TravelPlan,
    company_provided_accommodation: CompanyProvidedAccommodation,
    passenger_details: PassengerDetails,
    approver: Approver,
    selected_flight: Option<SelectedFlight>,
}

impl BookingContext {
    /// Creates a context with every leaf unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a field by dotted path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the path is not in the schema.
    pub fn get(&self, path: &str) -> Result<Option<&str>, BookingError> {
        let field = Field::from_path(path).ok_or_else(|| BookingError::not_found(path))?;
        Ok(self.value(field))
    }

    /// Reads a field by schema key.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Validates and stores a single field value, verbatim.
    ///
    /// Returns the confirmation `"<path> updated to '<value>'"`.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if the path is not in the schema
    /// - `InvalidValue` if the value violates the field's constraint
    pub fn update(&mut self, path: &str, value: &str) -> Result<String, BookingError> {
        let field = Field::from_path(path).ok_or_else(|| BookingError::unknown_field(path))?;
        field.validate(value)?;

        *self.slot_mut(field) = Some(value.to_string());
        Ok(format!("{} updated to '{}'", field.path(), value))
    }

    /// Records a flight from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOption` if `option` is not a catalog id.
    pub fn select_flight(&mut self, option: &str) -> Result<String, BookingError> {
        let choice = FlightCatalog::lookup(option).ok_or_else(|| BookingError::invalid_option(option))?;
        let flight = choice.details()?;

        self.selected_flight = Some(flight);
        Ok(format!("Flight option {} selected: {}", choice.id, choice.entry))
    }

    /// Returns every leaf, including the selected flight, to unset.
    pub fn reset(&mut self) -> String {
        *self = Self::default();
        "Context state has been reset.".to_string()
    }

    /// Returns a deep copy of the current state.
    pub fn snapshot(&self) -> BookingContext {
        self.clone()
    }

    pub fn selected_flight(&self) -> Option<&SelectedFlight> {
        self.selected_flight.as_ref()
    }

    pub fn registerer_details(&self) -> &RegistererDetails {
        &self.registerer_details
    }

    pub fn travel_plan(&self) -> &TravelPlan {
        &self.travel_plan
    }

    pub fn company_provided_accommodation(&self) -> &CompanyProvidedAccommodation {
        &self.company_provided_accommodation
    }

    pub fn passenger_details(&self) -> &PassengerDetails {
        &self.passenger_details
    }

    pub fn approver(&self) -> &Approver {
        &self.approver
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::ProjectOrOpportunity => &self.registerer_details.project_or_opportunity,
            Field::BillableTo => &self.registerer_details.billable_to,
            Field::TravelType => &self.travel_plan.travel_type,
            Field::TravelScope => &self.travel_plan.travel_scope,
            Field::LeavingFrom => &self.travel_plan.leaving_from,
            Field::GoingTo => &self.travel_plan.going_to,
            Field::DepartureDate => &self.travel_plan.departure_date,
            Field::ReturnDate => &self.travel_plan.return_date,
            Field::TravelMode => &self.travel_plan.travel_mode,
            Field::CompanyProvidedAccommodationRequired => {
                &self.travel_plan.company_provided_accommodation_required
            }
            Field::TravelPurpose => &self.travel_plan.travel_purpose,
            Field::AdditionalDetails => &self.travel_plan.additional_details,
            Field::AccommodationCity => &self.company_provided_accommodation.accommodation_city,
            Field::CheckIn => &self.company_provided_accommodation.check_in,
            Field::CheckOut => &self.company_provided_accommodation.check_out,
            Field::VisitingOfficeOrLocation => {
                &self.company_provided_accommodation.visiting_office_or_location
            }
            Field::PassengerName => &self.passenger_details.passenger_name,
            Field::Relation => &self.passenger_details.relation,
            Field::ApproverName => &self.approver.approver_name,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::ProjectOrOpportunity => &mut self.registerer_details.project_or_opportunity,
            Field::BillableTo => &mut self.registerer_details.billable_to,
            Field::TravelType => &mut self.travel_plan.travel_type,
            Field::TravelScope => &mut self.travel_plan.travel_scope,
            Field::LeavingFrom => &mut self.travel_plan.leaving_from,
            Field::GoingTo => &mut self.travel_plan.going_to,
            Field::DepartureDate => &mut self.travel_plan.departure_date,
            Field::ReturnDate => &mut self.travel_plan.return_date,
            Field::TravelMode => &mut self.travel_plan.travel_mode,
            Field::CompanyProvidedAccommodationRequired => {
                &mut self.travel_plan.company_provided_accommodation_required
            }
            Field::TravelPurpose => &mut self.travel_plan.travel_purpose,
            Field::AdditionalDetails => &mut self.travel_plan.additional_details,
            Field::AccommodationCity => &mut self.company_provided_accommodation.accommodation_city,
            Field::CheckIn => &mut self.company_provided_accommodation.check_in,
            Field::CheckOut => &mut self.company_provided_accommodation.check_out,
            Field::VisitingOfficeOrLocation => {
                &mut self.company_provided_accommodation.visiting_office_or_location
            }
            Field::PassengerName => &mut self.passenger_details.passenger_name,
            Field::Relation => &mut self.passenger_details.relation,
            Field::ApproverName => &mut self.approver.approver_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod get {
        use super::*;

        #[test]
        fn fresh_context_has_every_field_unset() {
            let ctx = BookingContext::new();
            for field in Field::all() {
                assert_eq!(ctx.get(field.path()).unwrap(), None);
            }
            assert!(ctx.selected_flight().is_none());
        }

        #[test]
        fn unknown_path_is_not_found() {
            let ctx = BookingContext::new();
            let err = ctx.get("travelPlan.seat").unwrap_err();
            assert!(matches!(err, BookingError::NotFound { .. }));
        }
    }

    mod update {
        use super::*;

        #[test]
        fn stores_value_verbatim_and_confirms() {
            let mut ctx = BookingContext::new();
            let msg = ctx.update("registererDetails.billableTo", "Client").unwrap();

            assert_eq!(msg, "registererDetails.billableTo updated to 'Client'");
            assert_eq!(ctx.get("registererDetails.billableTo").unwrap(), Some("Client"));
        }

        #[test]
        fn unknown_field_is_rejected() {
            let mut ctx = BookingContext::new();
            let err = ctx.update("travelPlan.hotel", "Taj").unwrap_err();
            assert!(matches!(err, BookingError::UnknownField { .. }));
        }

        #[test]
        fn section_path_alone_is_unknown() {
            let mut ctx = BookingContext::new();
            assert!(ctx.update("approver", "Priya").is_err());
        }

        #[test]
        fn failed_update_leaves_previous_value() {
            let mut ctx = BookingContext::new();
            ctx.update("travelPlan.departureDate", "01/03/2026").unwrap();
            let before = ctx.snapshot();

            assert!(ctx.update("travelPlan.departureDate", "2026-03-01").is_err());
            assert_eq!(ctx, before);
        }

        #[test]
        fn touches_exactly_one_leaf() {
            let mut ctx = BookingContext::new();
            ctx.update("travelPlan.companyProvidedAccommodationRequired", "yes").unwrap();

            for field in Field::all() {
                let expected = if *field == Field::GATE { Some("yes") } else { None };
                assert_eq!(ctx.value(*field), expected);
            }
        }

        #[test]
        fn overwrite_replaces_value() {
            let mut ctx = BookingContext::new();
            ctx.update("travelPlan.goingTo", "Pune").unwrap();
            ctx.update("travelPlan.goingTo", "Chennai").unwrap();
            assert_eq!(ctx.value(Field::GoingTo), Some("Chennai"));
        }
    }

    mod select_flight {
        use super::*;

        #[test]
        fn stores_structured_record() {
            let mut ctx = BookingContext::new();
            let msg = ctx.select_flight("2").unwrap();

            let flight = ctx.selected_flight().unwrap();
            assert_eq!(flight.airline, "Vistara");
            assert_eq!(flight.departure_time, "11:30 AM");
            assert_eq!(flight.price, "₹6200");
            assert_eq!(flight.travel_class, "Economy");
            assert_eq!(msg, "Flight option 2 selected: Vistara, 11:30 AM, ₹6200, Economy");
        }

        #[test]
        fn unknown_option_is_rejected_without_change() {
            let mut ctx = BookingContext::new();
            ctx.select_flight("1").unwrap();

            let err = ctx.select_flight("9").unwrap_err();
            assert!(matches!(err, BookingError::InvalidOption { .. }));
            assert_eq!(ctx.selected_flight().unwrap().airline, "Air Indigo");
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn clears_fields_and_flight() {
            let mut ctx = BookingContext::new();
            ctx.update("approver.approverName", "Meera").unwrap();
            ctx.select_flight("3").unwrap();

            assert_eq!(ctx.reset(), "Context state has been reset.");
            assert_eq!(ctx, BookingContext::new());
        }
    }

    mod snapshot {
        use super::*;

        #[test]
        fn serializes_nested_camel_case_with_nulls() {
            let mut ctx = BookingContext::new();
            ctx.update("passengerDetails.passengerName", "Ravi").unwrap();

            let json = serde_json::to_value(ctx.snapshot()).unwrap();
            assert_eq!(json["passengerDetails"]["passengerName"], "Ravi");
            assert!(json["passengerDetails"]["relation"].is_null());
            assert!(json["companyProvidedAccommodation"]["checkIn"].is_null());
            assert!(json["selectedFlight"].is_null());
        }

        #[test]
        fn snapshot_is_detached_from_store() {
            let mut ctx = BookingContext::new();
            let snap = ctx.snapshot();
            ctx.update("travelPlan.leavingFrom", "Delhi").unwrap();
            assert_eq!(snap.value(Field::LeavingFrom), None);
        }
    }
}
