//! Built-in tools for the rishta-saver assistant.
//!
//! Each tool wraps one knowledge-store lookup or the WhatsApp dispatcher
//! as a named, schema-carrying operation the orchestrator can discover and
//! invoke. Registration is explicit: [`builtin_registry`] assembles the
//! full set at startup.

pub mod counseling;
pub mod legal;
pub mod messaging;

pub use counseling::{CounselingTipsTool, DivorceConsequencesTool, EmergencySupportTool};
pub use legal::{LawyerDirectoryTool, LawyerMessageTool};
pub use messaging::WhatsAppSendTool;

use rishta_saver_conversation::{ToolError, ToolRegistry};
use rishta_saver_notify::WhatsAppDispatcher;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Builds the registry of all built-in tools.
#[must_use]
pub fn builtin_registry(dispatcher: Arc<WhatsAppDispatcher>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CounselingTipsTool));
    registry.register(Arc::new(DivorceConsequencesTool));
    registry.register(Arc::new(EmergencySupportTool));
    registry.register(Arc::new(LawyerDirectoryTool));
    registry.register(Arc::new(LawyerMessageTool));
    registry.register(Arc::new(WhatsAppSendTool::new(dispatcher)));
    registry
}

/// Parses tool arguments, treating an absent body as an empty object.
pub(crate) fn parse_args<T: DeserializeOwned>(name: &str, input: JsonValue) -> Result<T, ToolError> {
    let input = if input.is_null() {
        JsonValue::Object(serde_json::Map::new())
    } else {
        input
    };
    serde_json::from_value(input).map_err(|e| ToolError::InvalidInput {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
