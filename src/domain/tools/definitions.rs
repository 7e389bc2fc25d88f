//! Booking tool catalog.
//!
//! The operation surface exposed to the orchestration layer: one tool per
//! engine operation, each with its parameter schema and the agent roles
//! allowed to call it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::assistant::AgentRole;
use crate::domain::booking::{Field, SummaryFormat};
use crate::domain::flight::FlightCatalog;

use super::{ToolDefinition, ToolRegistry};

// ═══════════════════════════════════════════════════════════════════════════
// Tools
// ═══════════════════════════════════════════════════════════════════════════

/// Every tool the booking engine answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingTool {
    UpdateField,
    GetPendingFields,
    GetFilledFields,
    GetNextQuestion,
    GetNextNode,
    GetContext,
    ResetState,
    SetSelectedFlight,
    ListFlightOptions,
    GetBookingSummary,
}

impl BookingTool {
    pub fn all() -> &'static [BookingTool] {
        &[
            BookingTool::UpdateField,
            BookingTool::GetPendingFields,
            BookingTool::GetFilledFields,
            BookingTool::GetNextQuestion,
            BookingTool::GetNextNode,
            BookingTool::GetContext,
            BookingTool::ResetState,
            BookingTool::SetSelectedFlight,
            BookingTool::ListFlightOptions,
            BookingTool::GetBookingSummary,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BookingTool::UpdateField => "update_field",
            BookingTool::GetPendingFields => "get_pending_fields",
            BookingTool::GetFilledFields => "get_filled_fields",
            BookingTool::GetNextQuestion => "get_next_question",
            BookingTool::GetNextNode => "get_next_node",
            BookingTool::GetContext => "get_context",
            BookingTool::ResetState => "reset_state",
            BookingTool::SetSelectedFlight => "set_selected_flight",
            BookingTool::ListFlightOptions => "list_flight_options",
            BookingTool::GetBookingSummary => "get_booking_summary",
        }
    }

    /// Returns true if the tool can change the booking context.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            BookingTool::UpdateField | BookingTool::ResetState | BookingTool::SetSelectedFlight
        )
    }

    /// Roles granted this tool. An empty slice means every role.
    pub fn roles(&self) -> &'static [AgentRole] {
        match self {
            BookingTool::UpdateField => &[AgentRole::Extraction, AgentRole::EditHandler],
            BookingTool::GetPendingFields => &[AgentRole::Extraction, AgentRole::Question],
            BookingTool::GetFilledFields => &[AgentRole::Extraction, AgentRole::EditHandler],
            BookingTool::GetNextQuestion => &[AgentRole::Question],
            BookingTool::GetNextNode => &[AgentRole::Question, AgentRole::FlightOptions],
            BookingTool::SetSelectedFlight | BookingTool::ListFlightOptions => {
                &[AgentRole::FlightOptions]
            }
            BookingTool::GetBookingSummary => &[AgentRole::Summary],
            BookingTool::GetContext | BookingTool::ResetState => &[],
        }
    }

    /// Builds the tool's definition.
    pub fn definition(&self) -> ToolDefinition {
        match self {
            BookingTool::UpdateField => {
                let fields: Vec<&str> = Field::all().iter().map(Field::path).collect();
                ToolDefinition::new(
                    self.name(),
                    "Update a field in the booking context after validating it",
                    serde_json::json!({
                        "type": "object",
                        "required": ["field", "value"],
                        "properties": {
                            "field": {
                                "type": "string",
                                "description": "Dotted field path, e.g. travelPlan.goingTo",
                                "enum": fields
                            },
                            "value": {
                                "type": "string",
                                "description": "Value to store; dates use dd/mm/yyyy"
                            }
                        }
                    }),
                )
            }
            BookingTool::GetPendingFields => ToolDefinition::no_params(
                self.name(),
                "Returns the missing required fields, including accommodation details when requested",
            ),
            BookingTool::GetFilledFields => ToolDefinition::no_params(
                self.name(),
                "Returns every field that already has a value",
            ),
            BookingTool::GetNextQuestion => ToolDefinition::no_params(
                self.name(),
                "Suggest the next question to ask the traveller",
            ),
            BookingTool::GetNextNode => ToolDefinition::no_params(
                self.name(),
                "Returns ask_next_question until the form is complete, then booking_options",
            ),
            BookingTool::GetContext => ToolDefinition::no_params(
                self.name(),
                "Returns the full booking context",
            ),
            BookingTool::ResetState => ToolDefinition::no_params(
                self.name(),
                "Clears the booking context for a new booking",
            ),
            BookingTool::SetSelectedFlight => {
                let ids: Vec<&str> = FlightCatalog::options().iter().map(|o| o.id).collect();
                ToolDefinition::new(
                    self.name(),
                    "Set the selected flight option",
                    serde_json::json!({
                        "type": "object",
                        "required": ["option"],
                        "properties": {
                            "option": {
                                "type": "string",
                                "description": "Flight option id",
                                "enum": ids
                            }
                        }
                    }),
                )
            }
            BookingTool::ListFlightOptions => ToolDefinition::no_params(
                self.name(),
                "Lists the mock flight options the traveller can choose from",
            ),
            BookingTool::GetBookingSummary => ToolDefinition::new(
                self.name(),
                "Summarizes the complete booking, including the selected flight, for confirmation",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "format": {
                            "type": "string",
                            "enum": ["json", "yaml"],
                            "default": "json"
                        }
                    }
                }),
            ),
        }
    }
}

impl fmt::Display for BookingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BookingTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingTool::all()
            .iter()
            .copied()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Parameters
// ═══════════════════════════════════════════════════════════════════════════

/// Parameters for `update_field`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFieldParams {
    /// Dotted field path
    pub field: String,
    /// Raw value from the traveller
    pub value: String,
}

/// Parameters for `set_selected_flight`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSelectedFlightParams {
    /// Catalog option id
    pub option: String,
}

/// Parameters for `get_booking_summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetBookingSummaryParams {
    #[serde(default)]
    pub format: SummaryFormat,
}

/// Builds the registry holding every booking tool.
pub fn booking_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for tool in BookingTool::all() {
        if tool.roles().is_empty() {
            registry.register_shared(tool.definition());
        } else {
            registry.register_for_roles(tool.definition(), tool.roles());
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for tool in BookingTool::all() {
            assert_eq!(tool.name().parse::<BookingTool>().unwrap(), *tool);
        }
        assert!("get_weather".parse::<BookingTool>().is_err());
    }

    #[test]
    fn registry_holds_every_tool() {
        let registry = booking_registry();
        assert_eq!(registry.tool_count(), BookingTool::all().len());
        for tool in BookingTool::all() {
            assert!(registry.has_tool(tool.name()));
        }
    }

    #[test]
    fn extraction_agent_can_update_but_not_summarize() {
        let registry = booking_registry();
        assert!(registry.is_available_for_role("update_field", AgentRole::Extraction));
        assert!(!registry.is_available_for_role("get_booking_summary", AgentRole::Extraction));
        assert!(registry.is_available_for_role("get_context", AgentRole::Extraction));
    }

    #[test]
    fn update_field_schema_enumerates_paths() {
        let def = BookingTool::UpdateField.definition();
        let paths = def.parameters_schema()["properties"]["field"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(paths.len(), Field::all().len());
        assert_eq!(def.required_parameters(), vec!["field", "value"]);
    }

    #[test]
    fn flight_schema_enumerates_catalog_ids() {
        let def = BookingTool::SetSelectedFlight.definition();
        assert_eq!(
            def.parameters_schema()["properties"]["option"]["enum"],
            serde_json::json!(["1", "2", "3"])
        );
    }

    #[test]
    fn only_three_tools_mutate() {
        let mutating: Vec<_> = BookingTool::all().iter().filter(|t| t.mutates()).collect();
        assert_eq!(mutating.len(), 3);
    }

    #[test]
    fn summary_format_defaults_to_json() {
        let params: GetBookingSummaryParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.format, SummaryFormat::Json);

        let params: GetBookingSummaryParams =
            serde_json::from_value(serde_json::json!({"format": "yaml"})).unwrap();
        assert_eq!(params.format, SummaryFormat::Yaml);
        assert!(BookingTool::GetBookingSummary.definition().required_parameters().is_empty());
    }

    #[test]
    fn params_deserialize() {
        let params: UpdateFieldParams =
            serde_json::from_value(serde_json::json!({"field": "approver.approverName", "value": "Sam"}))
                .unwrap();
        assert_eq!(params.field, "approver.approverName");
    }
}
