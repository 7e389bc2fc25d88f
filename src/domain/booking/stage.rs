//! Booking stage state machine.
//!
//! The stage is derived from the context after every mutation, except
//! `Summarized`, which is entered explicitly once a summary has been
//! produced.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::context::BookingContext;

/// Where a booking session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStage {
    /// Always-required fields are still missing.
    #[default]
    Collecting,

    /// Only accommodation fields are missing.
    AccommodationPending,

    /// Every required field is set, no flight chosen yet.
    Complete,

    /// Form complete and a flight picked.
    FlightSelected,

    /// A summary has been handed out for confirmation.
    Summarized,
}

impl BookingStage {
    /// Derives the stage implied by the context's contents.
    pub fn derive(context: &BookingContext) -> Self {
        if context.is_complete() {
            return if context.selected_flight().is_some() {
                BookingStage::FlightSelected
            } else {
                BookingStage::Complete
            };
        }

        let pending = context.pending_fields();
        if !pending.is_empty() && pending.iter().all(|field| field.is_accommodation()) {
            BookingStage::AccommodationPending
        } else {
            BookingStage::Collecting
        }
    }

    /// Returns true if a summary may be produced from this stage.
    pub fn can_summarize(&self) -> bool {
        matches!(
            self,
            BookingStage::Complete | BookingStage::FlightSelected | BookingStage::Summarized
        )
    }
}

impl StateMachine for BookingStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStage::*;
        if self == target {
            return false;
        }
        match target {
            // Summaries only for finished forms
            Summarized => matches!(self, Complete | FlightSelected),
            // Edits may move any stage to any derived stage
            Collecting | AccommodationPending | Complete | FlightSelected => true,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStage::*;
        match self {
            Collecting => vec![AccommodationPending, Complete, FlightSelected],
            AccommodationPending => vec![Collecting, Complete, FlightSelected],
            Complete => vec![Collecting, AccommodationPending, FlightSelected, Summarized],
            FlightSelected => vec![Collecting, AccommodationPending, Complete, Summarized],
            Summarized => vec![Collecting, AccommodationPending, Complete, FlightSelected],
        }
    }
}
