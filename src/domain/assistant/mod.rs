//! Assistant module - explicit routing between orchestration tasks and
//! the agent roles that carry them out.

mod routing;

pub use routing::{AgentRole, AssistantTask};
