//! Booking HTTP adapter - REST API over booking sessions and tools.
//!
//! Provides endpoints for:
//! - Opening and ending sessions
//! - Reading context snapshots and progress
//! - Invoking booking tools
//! - Listing tool definitions per agent role

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::BookingAppState;
pub use routes::booking_router;
