//! Error types for the conversation crate.
//!
//! - `SessionError`: Errors from session store operations
//! - `ToolError`: Errors from tool lookup and execution
//! - `OrchestratorError`: Failures crossing back over the orchestrator
//!   boundary; always caught at the turn boundary

use rishta_saver_core::ConversationSessionId;
use std::fmt;

/// Errors from session store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session not found.
    NotFound { id: ConversationSessionId },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "session not found: {id}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Errors from tool lookup and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool not found in the registry.
    NotFound { name: String },
    /// Tool input did not match the declared schema.
    InvalidInput { name: String, reason: String },
    /// Tool execution failed.
    ExecutionFailed { name: String, reason: String },
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "tool not found: {name}"),
            Self::InvalidInput { name, reason } => {
                write!(f, "invalid input for tool '{name}': {reason}")
            }
            Self::ExecutionFailed { name, reason } => {
                write!(f, "tool '{name}' execution failed: {reason}")
            }
        }
    }
}

impl std::error::Error for ToolError {}

/// Failures reported by the turn orchestrator.
///
/// Whatever goes wrong behind the boundary (a model call, a tool the
/// orchestrator chose to run) surfaces here and is absorbed by the turn
/// handler; it never propagates to the caller as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorError {
    /// The model backend failed.
    ModelFailed { reason: String },
    /// A tool invoked during the turn failed.
    ToolFailed { name: String, reason: String },
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelFailed { reason } => write!(f, "model call failed: {reason}"),
            Self::ToolFailed { name, reason } => {
                write!(f, "tool '{name}' failed: {reason}")
            }
        }
    }
}

impl std::error::Error for OrchestratorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_display() {
        let id = ConversationSessionId::new();
        let err = SessionError::NotFound { id };
        assert!(err.to_string().contains("session not found"));
    }

    #[test]
    fn tool_error_display() {
        let err = ToolError::ExecutionFailed {
            name: "send_whatsapp_message".to_string(),
            reason: "timeout".to_string(),
        };
        assert!(err.to_string().contains("send_whatsapp_message"));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn orchestrator_error_display() {
        let err = OrchestratorError::ModelFailed {
            reason: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("model call failed"));
        assert!(err.to_string().contains("rate limited"));
    }
}
