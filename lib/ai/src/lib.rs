//! Chat-model access for the rishta-saver counseling assistant.
//!
//! This crate provides:
//!
//! - **ChatBackend**: One chat-completions call over messages + tool specs
//! - **OpenAiCompatBackend**: HTTP implementation for OpenAI-compatible
//!   endpoints (Gemini's compatibility endpoint by default)
//! - **Agent**: A bounded tool-calling loop that turns one prompt into one
//!   final reply, executing requested tools along the way

pub mod agent;
pub mod backend;
pub mod error;
pub mod openai;

pub use agent::{Agent, ToolInvoker};
pub use backend::{ChatBackend, ChatCompletion, ChatMessage, ChatRole, ToolCallRequest, ToolSpec};
pub use error::{AgentError, LlmError, ToolInvokeError};
pub use openai::OpenAiCompatBackend;
