//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod booking;

pub use booking::{
    BookingProgress, BookingToolExecutor, ContextView, EndSessionCommand, EndSessionHandler,
    GetProgressHandler, GetProgressQuery, StartSessionCommand, StartSessionHandler,
    StartSessionResult,
};
