//! Orchestrator wiring: the counseling agent behind the turn boundary.
//!
//! Bridges the tool registry into the agent loop and exposes the result
//! as the conversation crate's `Orchestrator`.

use async_trait::async_trait;
use rishta_saver_ai::{Agent, ChatBackend, ToolInvokeError, ToolInvoker, ToolSpec};
use rishta_saver_conversation::{Orchestrator, OrchestratorError, ToolRegistry, TurnRequest};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// System instructions for the counseling agent.
const AGENT_INSTRUCTIONS: &str = r"You are a compassionate marriage counseling AI dedicated to helping users through emotional and relationship crises.

YOUR MISSION:
- Prevent divorces whenever possible through practical & spiritual advice
- Encourage thoughtful decision-making through empathy
- Provide Islamic guidance aligned with real-life issues
- Share legal help only after all other options are exhausted

STYLE:
- English-only communication
- Respectful, warm, empathetic tone
- Offer practical + spiritual solutions together
- Support without judgment or pressure

TOOLS:
- get_marriage_counseling_tips()
- get_divorce_consequences()
- get_lawyers_data()
- format_lawyer_message()
- send_whatsapp_message()
- get_emergency_support()

RESPONSE FLOW:
- Ask the user for issues in detail
- Suggest counseling tips first
- Show divorce impact
- Ask again if they want to proceed
- Only then offer lawyer contacts";

/// Executes registry tools on the model's behalf.
struct RegistryInvoker {
    registry: Arc<ToolRegistry>,
}

#[async_trait]
impl ToolInvoker for RegistryInvoker {
    async fn invoke(&self, name: &str, arguments: JsonValue) -> Result<JsonValue, ToolInvokeError> {
        self.registry
            .execute(name, arguments)
            .await
            .map_err(|e| ToolInvokeError {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

/// The production orchestrator: a tool-calling agent over a chat backend.
pub struct AgentOrchestrator {
    agent: Agent,
    invoker: RegistryInvoker,
}

impl AgentOrchestrator {
    /// Creates the orchestrator, exposing every registered tool to the
    /// model.
    #[must_use]
    pub fn new(backend: Arc<dyn ChatBackend>, registry: Arc<ToolRegistry>) -> Self {
        let tools = registry
            .definitions()
            .into_iter()
            .map(|def| ToolSpec::new(def.name, def.description, def.input_schema))
            .collect();
        Self {
            agent: Agent::new(backend)
                .with_instructions(AGENT_INSTRUCTIONS)
                .with_tools(tools),
            invoker: RegistryInvoker { registry },
        }
    }
}

#[async_trait]
impl Orchestrator for AgentOrchestrator {
    async fn respond(&self, request: &TurnRequest) -> Result<String, OrchestratorError> {
        self.agent
            .run(&self.invoker, &request.render())
            .await
            .map_err(|e| OrchestratorError::ModelFailed {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rishta_saver_ai::{ChatCompletion, ChatMessage, LlmError, ToolCallRequest};
    use rishta_saver_conversation::RecentContext;
    use rishta_saver_notify::{HttpTransport, TransportError, TransportResponse, WhatsAppDispatcher};
    use rishta_saver_tools::builtin_registry;
    use std::sync::Mutex;

    struct NullTransport;

    #[async_trait]
    impl HttpTransport for NullTransport {
        async fn post_form(
            &self,
            _url: &str,
            _form: &[(&str, &str)],
        ) -> Result<TransportResponse, TransportError> {
            Ok(TransportResponse::new(200, "{}"))
        }
    }

    struct ScriptedBackend {
        script: Mutex<Vec<Result<ChatCompletion, LlmError>>>,
    }

    impl ScriptedBackend {
        fn new(mut script: Vec<Result<ChatCompletion, LlmError>>) -> Arc<Self> {
            script.reverse();
            Arc::new(Self {
                script: Mutex::new(script),
            })
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _tools: &[ToolSpec],
        ) -> Result<ChatCompletion, LlmError> {
            self.script
                .lock()
                .expect("lock")
                .pop()
                .expect("script exhausted")
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    fn registry() -> Arc<ToolRegistry> {
        let dispatcher = Arc::new(WhatsAppDispatcher::new(None, Arc::new(NullTransport)));
        Arc::new(builtin_registry(dispatcher))
    }

    fn request() -> TurnRequest {
        TurnRequest {
            turn: 1,
            message: "we argue about money".to_string(),
            context: RecentContext::FirstSession,
        }
    }

    #[tokio::test]
    async fn orchestrator_runs_registry_tools_to_a_reply() {
        let backend = ScriptedBackend::new(vec![
            Ok(ChatCompletion {
                content: None,
                tool_calls: vec![ToolCallRequest {
                    id: "call_1".to_string(),
                    name: "get_marriage_counseling_tips".to_string(),
                    arguments: serde_json::json!({"issue_type": "financial"}),
                }],
            }),
            Ok(ChatCompletion {
                content: Some("Try budgeting together.".to_string()),
                tool_calls: Vec::new(),
            }),
        ]);
        let orchestrator = AgentOrchestrator::new(backend, registry());

        let reply = orchestrator.respond(&request()).await.expect("reply");
        assert_eq!(reply, "Try budgeting together.");
    }

    #[tokio::test]
    async fn backend_failure_maps_to_orchestrator_error() {
        let backend = ScriptedBackend::new(vec![Err(LlmError::RequestFailed {
            reason: "upstream 500".to_string(),
        })]);
        let orchestrator = AgentOrchestrator::new(backend, registry());

        let err = orchestrator.respond(&request()).await.expect_err("fails");
        assert!(matches!(err, OrchestratorError::ModelFailed { .. }));
    }
}
