//! Task → agent routing table.
//!
//! Each orchestration task names exactly one agent role. Unknown task keys
//! are an error rather than falling through to a default agent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Work items the conversational orchestrator hands to an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantTask {
    /// Pull a field value out of the traveller's reply.
    ExtractFields,
    /// Phrase the next question.
    AskQuestion,
    /// Apply a correction after the traveller reviewed the summary.
    HandleEdit,
    /// Present the mock flight options.
    SuggestFlights,
    /// Build the confirmation summary.
    Summarize,
}

/// Agents that can be given booking tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Extraction,
    Question,
    EditHandler,
    FlightOptions,
    Summary,
}

impl AssistantTask {
    pub fn all() -> &'static [AssistantTask] {
        &[
            AssistantTask::ExtractFields,
            AssistantTask::AskQuestion,
            AssistantTask::HandleEdit,
            AssistantTask::SuggestFlights,
            AssistantTask::Summarize,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantTask::ExtractFields => "extract_fields",
            AssistantTask::AskQuestion => "ask_question",
            AssistantTask::HandleEdit => "handle_edit",
            AssistantTask::SuggestFlights => "suggest_flights",
            AssistantTask::Summarize => "summarize",
        }
    }

    /// The agent responsible for this task.
    pub fn agent(&self) -> AgentRole {
        match self {
            AssistantTask::ExtractFields => AgentRole::Extraction,
            AssistantTask::AskQuestion => AgentRole::Question,
            AssistantTask::HandleEdit => AgentRole::EditHandler,
            AssistantTask::SuggestFlights => AgentRole::FlightOptions,
            AssistantTask::Summarize => AgentRole::Summary,
        }
    }
}

impl fmt::Display for AssistantTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssistantTask {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssistantTask::all()
            .iter()
            .copied()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("task", format!("unknown task '{}'", s)))
    }
}

impl AgentRole {
    pub fn all() -> &'static [AgentRole] {
        &[
            AgentRole::Extraction,
            AgentRole::Question,
            AgentRole::EditHandler,
            AgentRole::FlightOptions,
            AgentRole::Summary,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Extraction => "extraction",
            AgentRole::Question => "question",
            AgentRole::EditHandler => "edit_handler",
            AgentRole::FlightOptions => "flight_options",
            AgentRole::Summary => "summary",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgentRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentRole::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("role", format!("unknown role '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_task_routes_to_a_distinct_agent() {
        let agents: std::collections::HashSet<_> =
            AssistantTask::all().iter().map(AssistantTask::agent).collect();
        assert_eq!(agents.len(), AssistantTask::all().len());
    }

    #[test]
    fn task_keys_round_trip() {
        for task in AssistantTask::all() {
            assert_eq!(task.as_str().parse::<AssistantTask>().unwrap(), *task);
        }
    }

    #[test]
    fn substrings_do_not_match() {
        assert!("extract".parse::<AssistantTask>().is_err());
        assert!("booking_summary_task".parse::<AssistantTask>().is_err());
    }

    #[test]
    fn summarize_goes_to_summary_agent() {
        assert_eq!(AssistantTask::Summarize.agent(), AgentRole::Summary);
        assert_eq!(AssistantTask::SuggestFlights.agent(), AgentRole::FlightOptions);
    }

    #[test]
    fn roles_parse_from_snake_case() {
        assert_eq!("edit_handler".parse::<AgentRole>().unwrap(), AgentRole::EditHandler);
        assert_eq!(
            serde_json::to_string(&AgentRole::FlightOptions).unwrap(),
            "\"flight_options\""
        );
    }
}
