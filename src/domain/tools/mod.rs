//! Booking Tools - the tool-call surface over the booking engine.
//!
//! Agents never touch the booking context directly; they invoke named
//! tools with JSON parameters.
//!
//! ## Key Types
//!
//! - [`ToolCall`] - Request to invoke a tool
//! - [`ToolResponse`] - Result returned from a tool
//! - [`ToolDefinition`] - Schema and metadata for a tool
//! - [`ToolRegistry`] - Role-based tool lookup
//! - [`BookingTool`] - The booking engine's tools

mod definitions;
mod tool_call;
mod tool_definition;
mod tool_registry;

pub use definitions::{
    booking_registry, BookingTool, GetBookingSummaryParams, SetSelectedFlightParams,
    UpdateFieldParams,
};
pub use tool_call::{ToolCall, ToolResponse};
pub use tool_definition::ToolDefinition;
pub use tool_registry::ToolRegistry;
