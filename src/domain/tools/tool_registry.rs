//! Tool Registry - the catalog of booking tools and who may use them.
//!
//! Tools are either granted to specific agent roles or shared with every
//! role. Listing order is registration order.
//!
//! # Example
//!
//! ```
//! use travel_desk::domain::assistant::AgentRole;
//! use travel_desk::domain::tools::{ToolDefinition, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new();
//! registry.register_for_roles(
//!     ToolDefinition::no_params("get_pending_fields", "List pending fields"),
//!     &[AgentRole::Question],
//! );
//!
//! assert_eq!(registry.tools_for_role(AgentRole::Question, true).len(), 1);
//! assert!(registry.tools_for_role(AgentRole::Summary, true).is_empty());
//! ```

use std::collections::HashMap;

use crate::domain::assistant::AgentRole;

use super::ToolDefinition;

/// Central registry of booking tools.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    /// All registered tools by name
    tools: HashMap<String, ToolDefinition>,

    /// Tool names in registration order
    order: Vec<String>,

    /// Mapping from role to the tool names granted to it
    role_tools: HashMap<AgentRole, Vec<String>>,

    /// Tools available to every role
    shared_tools: Vec<String>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool for the given roles.
    pub fn register_for_roles(&mut self, definition: ToolDefinition, roles: &[AgentRole]) {
        let name = self.insert(definition);
        for role in roles {
            self.role_tools.entry(*role).or_default().push(name.clone());
        }
    }

    /// Registers a tool available to every role.
    pub fn register_shared(&mut self, definition: ToolDefinition) {
        let name = self.insert(definition);
        self.shared_tools.push(name);
    }

    fn insert(&mut self, definition: ToolDefinition) -> String {
        let name = definition.name().to_string();
        if self.tools.insert(name.clone(), definition).is_none() {
            self.order.push(name.clone());
        }
        name
    }

    /// Gets all tools granted to a role, role-specific ones first.
    pub fn tools_for_role(&self, role: AgentRole, include_shared: bool) -> Vec<&ToolDefinition> {
        let mut names: Vec<&String> = self
            .role_tools
            .get(&role)
            .map(|names| names.iter().collect())
            .unwrap_or_default();

        if include_shared {
            names.extend(self.shared_tools.iter());
        }

        names.into_iter().filter_map(|name| self.tools.get(name)).collect()
    }

    /// Gets every tool in registration order.
    pub fn all_tools(&self) -> Vec<&ToolDefinition> {
        self.order.iter().filter_map(|name| self.tools.get(name)).collect()
    }

    /// Gets a tool definition by name.
    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Checks if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Checks if a role may call a tool.
    pub fn is_available_for_role(&self, name: &str, role: AgentRole) -> bool {
        self.shared_tools.iter().any(|shared| shared == name)
            || self
                .role_tools
                .get(&role)
                .is_some_and(|names| names.iter().any(|granted| granted == name))
    }

    /// Returns the number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}
