//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Live per-session booking state
//! - `ToolExecutor` - Executes booking tools on behalf of agents

mod session_store;
mod tool_executor;

pub use session_store::{SessionHandle, SessionStore, SessionStoreError};
pub use tool_executor::{ToolExecutionContext, ToolExecutionError, ToolExecutor};
