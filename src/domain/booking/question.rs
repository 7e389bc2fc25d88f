//! Next-question generation.
//!
//! Prompts are derived purely from the leaf key name, so unusual keys give
//! awkward but stable wording.

use super::context::BookingContext;

/// Sentence returned once nothing is pending.
pub const ALL_FIELDS_COMPLETE: &str = "All fields are complete.";

/// Turns a camelCase key into prompt text.
///
/// Strips a trailing `Id`, spaces out `Or` and `And`, and replaces
/// underscores. Other capitals are left as they are.
pub fn humanize_key(key: &str) -> String {
    let key = key.strip_suffix("Id").unwrap_or(key);
    key.replace("Or", " or ")
        .replace("And", " and ")
        .replace('_', " ")
}

impl BookingContext {
    /// Prompt for the first pending field.
    pub fn next_question(&self) -> String {
        match self.pending_fields().first() {
            Some(field) => format!("Can you please provide the {}?", humanize_key(field.key())),
            None => ALL_FIELDS_COMPLETE.to_string(),
        }
    }
}
