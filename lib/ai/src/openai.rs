//! OpenAI-compatible chat-completions backend.
//!
//! Talks to any endpoint speaking the OpenAI chat wire format. The default
//! base URL is Gemini's OpenAI compatibility endpoint, matching the model
//! credential the server reads at startup.

use crate::backend::{ChatBackend, ChatCompletion, ChatMessage, ChatRole, ToolCallRequest, ToolSpec};
use crate::error::LlmError;
use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// A chat backend over an OpenAI-compatible HTTP endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiCompatBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompatBackend {
    /// Creates a backend with the default endpoint and model.
    #[must_use]
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Encodes one message in the OpenAI wire shape.
fn wire_message(message: &ChatMessage) -> JsonValue {
    let role = match message.role {
        ChatRole::System => "system",
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
        ChatRole::Tool => "tool",
    };
    let mut wire = serde_json::json!({
        "role": role,
        "content": message.content,
    });
    if !message.tool_calls.is_empty() {
        // Arguments travel as a JSON-encoded string on this wire.
        wire["tool_calls"] = message
            .tool_calls
            .iter()
            .map(|call| {
                serde_json::json!({
                    "id": call.id,
                    "type": "function",
                    "function": {
                        "name": call.name,
                        "arguments": call.arguments.to_string(),
                    }
                })
            })
            .collect();
    }
    if let Some(call_id) = &message.tool_call_id {
        wire["tool_call_id"] = JsonValue::String(call_id.clone());
    }
    wire
}

/// Builds the full request body.
fn build_request_body(model: &str, messages: &[ChatMessage], tools: &[ToolSpec]) -> JsonValue {
    let mut body = serde_json::json!({
        "model": model,
        "messages": messages.iter().map(wire_message).collect::<Vec<_>>(),
    });
    if !tools.is_empty() {
        body["tools"] = tools
            .iter()
            .map(|tool| {
                serde_json::json!({
                    "type": "function",
                    "function": {
                        "name": tool.name,
                        "description": tool.description,
                        "parameters": tool.parameters,
                    }
                })
            })
            .collect();
    }
    body
}

/// Decodes the first choice of a chat-completions response.
fn parse_completion(payload: &JsonValue) -> Result<ChatCompletion, LlmError> {
    let message = payload
        .get("choices")
        .and_then(JsonValue::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .ok_or_else(|| LlmError::ResponseParseFailed {
            reason: "response carries no choices[0].message".to_string(),
        })?;

    let content = message
        .get("content")
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .filter(|text| !text.is_empty());

    let mut tool_calls = Vec::new();
    if let Some(calls) = message.get("tool_calls").and_then(JsonValue::as_array) {
        for call in calls {
            let id = call
                .get("id")
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string();
            let function = call
                .get("function")
                .ok_or_else(|| LlmError::ResponseParseFailed {
                    reason: "tool call carries no function".to_string(),
                })?;
            let name = function
                .get("name")
                .and_then(JsonValue::as_str)
                .ok_or_else(|| LlmError::ResponseParseFailed {
                    reason: "tool call carries no function name".to_string(),
                })?
                .to_string();
            let raw_arguments = function
                .get("arguments")
                .and_then(JsonValue::as_str)
                .unwrap_or("{}");
            let arguments: JsonValue =
                serde_json::from_str(raw_arguments).map_err(|e| LlmError::ResponseParseFailed {
                    reason: format!("tool call arguments are not JSON: {e}"),
                })?;
            tool_calls.push(ToolCallRequest {
                id,
                name,
                arguments,
            });
        }
    }

    Ok(ChatCompletion {
        content,
        tool_calls,
    })
}

#[async_trait]
impl ChatBackend for OpenAiCompatBackend {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolSpec],
    ) -> Result<ChatCompletion, LlmError> {
        let body = build_request_body(&self.model, messages, tools);

        tracing::debug!(model = %self.model, messages = messages.len(), "chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::RequestFailed {
                reason: format!("{status}: {body}"),
            });
        }

        let payload: JsonValue =
            response
                .json()
                .await
                .map_err(|e| LlmError::ResponseParseFailed {
                    reason: e.to_string(),
                })?;
        parse_completion(&payload)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
