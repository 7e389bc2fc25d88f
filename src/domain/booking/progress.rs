//! Completion and pending-field evaluation.
//!
//! Read-only queries over a [`BookingContext`]; nothing here mutates state.

use serde::{Deserialize, Serialize};

use super::context::BookingContext;
use super::schema::{opens_accommodation_gate, Field, FieldConstraint};

/// Coarse branching signal for external orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextNode {
    /// Keep asking questions.
    AskNextQuestion,
    /// Every required field is in; offer flights.
    BookingOptions,
}

impl NextNode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NextNode::AskNextQuestion => "ask_next_question",
            NextNode::BookingOptions => "booking_options",
        }
    }
}

impl BookingContext {
    /// Returns true when the stored gate value asks for company accommodation.
    pub fn accommodation_required(&self) -> bool {
        self.value(Field::GATE)
            .map(opens_accommodation_gate)
            .unwrap_or(false)
    }

    /// Unset required fields in question order.
    ///
    /// Always-required fields come first; the accommodation fields follow
    /// only while the gate is open.
    pub fn pending_fields(&self) -> Vec<Field> {
        let mut pending: Vec<Field> = Field::always_required()
            .iter()
            .copied()
            .filter(|field| self.value(*field).is_none())
            .collect();

        if self.accommodation_required() {
            pending.extend(
                Field::accommodation()
                    .iter()
                    .copied()
                    .filter(|field| self.value(*field).is_none()),
            );
        }

        pending
    }

    /// Every set field, in schema order.
    pub fn filled_fields(&self) -> Vec<Field> {
        Field::all()
            .iter()
            .copied()
            .filter(|field| self.value(*field).is_some())
            .collect()
    }

    /// True when nothing is pending and every set free-text field still
    /// meets its minimum length.
    pub fn is_complete(&self) -> bool {
        if !self.pending_fields().is_empty() {
            return false;
        }

        Field::optional().iter().all(|field| match (field.constraint(), self.value(*field)) {
            (FieldConstraint::MinLength(min), Some(value)) => value.trim().chars().count() >= min,
            _ => true,
        })
    }

    pub fn next_node(&self) -> NextNode {
        if self.is_complete() {
            NextNode::BookingOptions
        } else {
            NextNode::AskNextQuestion
        }
    }
}
