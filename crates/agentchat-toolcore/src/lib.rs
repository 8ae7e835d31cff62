//! Tool abstractions shared by the agentchat crates: the `Tool` trait, its
//! parameters and results, the execution context, and the registry that
//! dispatches calls by name.

pub mod tool;
pub mod tool_context;
pub mod tool_registry;

pub use tool::*;
pub use tool_context::*;
pub use tool_registry::*;
