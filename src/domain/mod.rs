//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `booking` - Field schema, booking context, completion and questions
//! - `flight` - Mock flight catalog
//! - `assistant` - Task to agent routing
//! - `tools` - Tool-call surface over the booking engine

pub mod assistant;
pub mod booking;
pub mod flight;
pub mod foundation;
pub mod tools;
