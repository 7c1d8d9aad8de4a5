//! Error types for the AI crate.
//!
//! - `LlmError`: Low-level chat-backend failures
//! - `ToolInvokeError`: A tool the agent ran on the model's behalf failed
//! - `AgentError`: Failures of the agent loop as a whole

use std::fmt;

/// Errors from chat-backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The request failed or the provider answered with a non-success
    /// status.
    RequestFailed { reason: String },
    /// The provider response could not be interpreted.
    ResponseParseFailed { reason: String },
    /// The backend configuration is unusable.
    InvalidConfig { reason: String },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { reason } => {
                write!(f, "LLM request failed: {reason}")
            }
            Self::ResponseParseFailed { reason } => {
                write!(f, "failed to parse LLM response: {reason}")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid LLM configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for LlmError {}

/// A tool invocation requested by the model failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvokeError {
    /// The tool that failed.
    pub name: String,
    /// Why it failed.
    pub reason: String,
}

impl fmt::Display for ToolInvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tool '{}' failed: {}", self.name, self.reason)
    }
}

impl std::error::Error for ToolInvokeError {}

/// Errors from the agent loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The chat backend failed.
    ModelFailed { reason: String },
    /// The model finished without producing reply text.
    EmptyReply,
    /// The loop hit its iteration bound before the model finished.
    MaxIterationsExceeded { max: u32 },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelFailed { reason } => write!(f, "model call failed: {reason}"),
            Self::EmptyReply => write!(f, "model produced no reply text"),
            Self::MaxIterationsExceeded { max } => {
                write!(f, "exceeded {max} tool-calling iterations")
            }
        }
    }
}

impl std::error::Error for AgentError {}

impl From<LlmError> for AgentError {
    fn from(err: LlmError) -> Self {
        Self::ModelFailed {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_error_display() {
        let err = LlmError::RequestFailed {
            reason: "503 service unavailable".to_string(),
        };
        assert!(err.to_string().contains("LLM request failed"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn agent_error_from_llm_error() {
        let err: AgentError = LlmError::InvalidConfig {
            reason: "empty model name".to_string(),
        }
        .into();
        assert!(err.to_string().contains("empty model name"));
    }

    #[test]
    fn tool_invoke_error_display() {
        let err = ToolInvokeError {
            name: "get_lawyers_data".to_string(),
            reason: "bad input".to_string(),
        };
        assert!(err.to_string().contains("get_lawyers_data"));
        assert!(err.to_string().contains("bad input"));
    }
}
