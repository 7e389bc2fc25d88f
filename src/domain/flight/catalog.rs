//! Mock flight catalog and the structured selection record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One canned flight offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightOption {
    /// Single-character option id shown to the traveller.
    pub id: &'static str,
    /// Catalog entry formatted as "Airline, Time, Price, Class".
    pub entry: &'static str,
}

impl FlightOption {
    /// Parses the catalog entry into a structured record.
    pub fn details(&self) -> Result<SelectedFlight, ValidationError> {
        self.entry.parse()
    }
}

impl fmt::Display for FlightOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.entry)
    }
}

const CATALOG: &[FlightOption] = &[
    FlightOption {
        id: "1",
        entry: "Air Indigo, 08:00 AM, ₹5500, Economy",
    },
    FlightOption {
        id: "2",
        entry: "Vistara, 11:30 AM, ₹6200, Economy",
    },
    FlightOption {
        id: "3",
        entry: "Air India, 6:45 PM, ₹5900, Premium Economy",
    },
];

/// Static, pricing-free flight catalog.
pub struct FlightCatalog;

impl FlightCatalog {
    /// Returns every option in id order.
    pub fn options() -> &'static [FlightOption] {
        CATALOG
    }

    /// Looks up an option by its exact id.
    pub fn lookup(id: &str) -> Option<&'static FlightOption> {
        CATALOG.iter().find(|option| option.id == id)
    }
}

/// The flight the traveller picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFlight {
    pub airline: String,
    pub departure_time: String,
    pub price: String,
    #[serde(rename = "class")]
    pub travel_class: String,
}

impl FromStr for SelectedFlight {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(", ").map(str::trim).collect();
        match parts.as_slice() {
            [airline, departure_time, price, travel_class]
                if parts.iter().all(|part| !part.is_empty()) =>
            {
                Ok(SelectedFlight {
                    airline: airline.to_string(),
                    departure_time: departure_time.to_string(),
                    price: price.to_string(),
                    travel_class: travel_class.to_string(),
                })
            }
            _ => Err(ValidationError::invalid_format(
                "flight",
                format!("expected 'Airline, Time, Price, Class', got '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_options() {
        let ids: Vec<_> = FlightCatalog::options().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn lookup_is_exact() {
        assert!(FlightCatalog::lookup("2").is_some());
        assert!(FlightCatalog::lookup(" 2").is_none());
        assert!(FlightCatalog::lookup("9").is_none());
    }

    #[test]
    fn every_entry_parses() {
        for option in FlightCatalog::options() {
            assert!(option.details().is_ok(), "entry {} should parse", option.id);
        }
    }

    #[test]
    fn premium_economy_keeps_multi_word_class() {
        let flight = FlightCatalog::lookup("3").unwrap().details().unwrap();
        assert_eq!(flight.airline, "Air India");
        assert_eq!(flight.departure_time, "6:45 PM");
        assert_eq!(flight.travel_class, "Premium Economy");
    }

    #[test]
    fn malformed_entry_is_rejected() {
        assert!("Vistara, 11:30 AM".parse::<SelectedFlight>().is_err());
        assert!("A, B, , D".parse::<SelectedFlight>().is_err());
    }

    #[test]
    fn serializes_with_class_key() {
        let flight = FlightCatalog::lookup("2").unwrap().details().unwrap();
        let json = serde_json::to_value(&flight).unwrap();
        assert_eq!(json["departureTime"], "11:30 AM");
        assert_eq!(json["class"], "Economy");
        assert_eq!(json["price"], "₹6200");
    }
}
