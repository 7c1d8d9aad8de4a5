//! Chat backend abstraction.
//!
//! A backend performs one chat-completions call: messages and tool specs
//! in, reply text and/or tool-call requests out. The wire encoding is the
//! backend's concern; callers work with these types only.

use crate::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System instructions.
    System,
    /// User/human message.
    User,
    /// Assistant message.
    Assistant,
    /// Tool result message.
    Tool,
}

/// A message in a chat-completions exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: ChatRole,
    /// Message text (empty for pure tool-call messages).
    pub content: String,
    /// Tool calls carried by an assistant message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRequest>,
    /// The call a tool message answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Creates a message.
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Creates an assistant message that requests tool calls.
    #[must_use]
    pub fn assistant_with_calls(content: impl Into<String>, calls: Vec<ToolCallRequest>) -> Self {
        let mut msg = Self::new(ChatRole::Assistant, content);
        msg.tool_calls = calls;
        msg
    }

    /// Creates a tool-result message answering a call.
    #[must_use]
    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        let mut msg = Self::new(ChatRole::Tool, content);
        msg.tool_call_id = Some(call_id.into());
        msg
    }
}

/// A tool the model may request, in provider-neutral form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Tool name.
    pub name: String,
    /// What the tool does.
    pub description: String,
    /// JSON schema for the tool's parameters.
    pub parameters: JsonValue,
}

impl ToolSpec {
    /// Creates a tool spec.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: JsonValue,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// A tool call the model asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Provider-assigned call identifier.
    pub id: String,
    /// The tool to run.
    pub name: String,
    /// Arguments for the tool.
    pub arguments: JsonValue,
}

/// The result of one chat-completions call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    /// Reply text, if the model produced any.
    pub content: Option<String>,
    /// Tool calls, if the model requested any.
    pub tool_calls: Vec<ToolCallRequest>,
}

impl ChatCompletion {
    /// Returns true if the model asked for tools instead of finishing.
    #[must_use]
    pub fn wants_tools(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Trait for chat backends.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Performs one chat-completions call.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response cannot be
    /// interpreted.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolSpec],
    ) -> Result<ChatCompletion, LlmError>;

    /// Returns the model name.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(ChatMessage::system("x").role, ChatRole::System);
        assert_eq!(ChatMessage::user("x").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("x").role, ChatRole::Assistant);

        let tool = ChatMessage::tool("call_1", "{}");
        assert_eq!(tool.role, ChatRole::Tool);
        assert_eq!(tool.tool_call_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn completion_wants_tools() {
        let finished = ChatCompletion {
            content: Some("done".to_string()),
            tool_calls: Vec::new(),
        };
        assert!(!finished.wants_tools());

        let calling = ChatCompletion {
            content: None,
            tool_calls: vec![ToolCallRequest {
                id: "call_1".to_string(),
                name: "get_emergency_support".to_string(),
                arguments: serde_json::json!({}),
            }],
        };
        assert!(calling.wants_tools());
    }

    #[test]
    fn chat_message_serde_roundtrip() {
        let msg = ChatMessage::assistant_with_calls(
            "",
            vec![ToolCallRequest {
                id: "call_1".to_string(),
                name: "get_divorce_consequences".to_string(),
                arguments: serde_json::json!({}),
            }],
        );
        let json = serde_json::to_string(&msg).expect("serialize");
        let parsed: ChatMessage = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(msg, parsed);
    }
}
