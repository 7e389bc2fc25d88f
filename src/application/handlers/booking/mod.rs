//! Booking command and query handlers.

mod end_session;
mod get_progress;
mod start_session;
mod tool_executor;

pub use end_session::{EndSessionCommand, EndSessionHandler};
pub use get_progress::{BookingProgress, ContextView, GetProgressHandler, GetProgressQuery};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
pub use tool_executor::BookingToolExecutor;
