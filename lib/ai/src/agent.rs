//! Bounded tool-calling agent loop.
//!
//! One `run` turns one prompt into one final reply: the model is consulted,
//! any tool calls it requests are executed and fed back, and the loop
//! repeats until the model answers in text or the iteration bound is hit.
//! Tool failures are reported back to the model as text, not raised.

use crate::backend::{ChatBackend, ChatMessage, ToolSpec};
use crate::error::{AgentError, ToolInvokeError};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Default bound on model round-trips per run.
const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Executes tool calls on the model's behalf.
///
/// Decouples the loop from any particular tool registry.
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    /// Runs a named tool with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is unknown or fails.
    async fn invoke(&self, name: &str, arguments: JsonValue) -> Result<JsonValue, ToolInvokeError>;
}

/// A tool-calling agent over a chat backend.
pub struct Agent {
    backend: Arc<dyn ChatBackend>,
    instructions: String,
    tools: Vec<ToolSpec>,
    max_iterations: u32,
}

impl Agent {
    /// Creates an agent with no instructions or tools.
    #[must_use]
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            instructions: String::new(),
            tools: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the system instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Adds the tools the model may call.
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    /// Sets the iteration bound.
    #[must_use]
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    /// Runs one prompt to a final reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails, the model never produces
    /// reply text, or the iteration bound is exceeded.
    pub async fn run(&self, invoker: &dyn ToolInvoker, input: &str) -> Result<String, AgentError> {
        let mut messages = vec![
            ChatMessage::system(&self.instructions),
            ChatMessage::user(input),
        ];

        for iteration in 1..=self.max_iterations {
            let completion = self.backend.complete(&messages, &self.tools).await?;

            if !completion.wants_tools() {
                return completion.content.ok_or(AgentError::EmptyReply);
            }

            tracing::debug!(
                iteration,
                calls = completion.tool_calls.len(),
                "model requested tools"
            );
            messages.push(ChatMessage::assistant_with_calls(
                completion.content.unwrap_or_default(),
                completion.tool_calls.clone(),
            ));

            for call in completion.tool_calls {
                let output = match invoker.invoke(&call.name, call.arguments.clone()).await {
                    Ok(value) => value.to_string(),
                    Err(err) => {
                        tracing::warn!(tool = %call.name, error = %err, "tool call failed");
                        format!("Error: {err}")
                    }
                };
                messages.push(ChatMessage::tool(call.id, output));
            }
        }

        Err(AgentError::MaxIterationsExceeded {
            max: self.max_iterations,
        })
    }
}
