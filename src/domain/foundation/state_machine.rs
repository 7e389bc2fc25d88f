//! Checked transitions for lifecycle enums.

use super::ValidationError;

/// A lifecycle enum whose moves between states are checked.
///
/// Implementors list the allowed edges; [`transition_to`](Self::transition_to)
/// refuses anything else.
///
/// ```ignore
/// let stage = session.stage().transition_to(BookingStage::Summarized)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Whether `target` is reachable from `self` in one step.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every state reachable from `self` in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to `target`, or explains why it cannot.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ));
        }
        Ok(target)
    }

    /// A state with no way out.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
