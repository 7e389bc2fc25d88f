//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `storage` - Session store implementations

pub mod http;
pub mod storage;

pub use http::{booking_router, BookingAppState};
pub use storage::InMemorySessionStore;
