//! Conversation service for the rishta-saver counseling assistant.
//!
//! This crate provides:
//!
//! - **Session state**: Message history and the per-session turn counter
//! - **Tool registry**: Named operations with declared schemas, discoverable
//!   by the turn orchestrator
//! - **Turn handling**: Prompt assembly for the orchestrator boundary and
//!   the failure handling around it

pub mod error;
pub mod message;
pub mod session;
pub mod tool;
pub mod turn;

pub use error::{OrchestratorError, SessionError, ToolError};
pub use message::{Message, MessageRole};
pub use session::{ContextEntry, MemorySessionStore, RecentContext, Session};
pub use tool::{Tool, ToolDefinition, ToolRegistry};
pub use turn::{Orchestrator, TurnReport, TurnRequest, WELCOME_MESSAGE, run_turn};
