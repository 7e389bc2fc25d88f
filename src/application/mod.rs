//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands open and close sessions; queries read progress; tool calls go
//! through the [`BookingToolExecutor`].

pub mod handlers;

pub use handlers::{
    BookingProgress, BookingToolExecutor, ContextView, EndSessionCommand, EndSessionHandler,
    GetProgressHandler, GetProgressQuery, StartSessionCommand, StartSessionHandler,
    StartSessionResult,
};
