//! Flight module - the fixed catalog of mock flight offers.

mod catalog;

pub use catalog::{FlightCatalog, FlightOption, SelectedFlight};
