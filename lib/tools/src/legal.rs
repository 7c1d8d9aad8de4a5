//! Lawyer directory tools: lookup and the user-facing formatter.

use crate::parse_args;
use async_trait::async_trait;
use rishta_saver_conversation::{Tool, ToolDefinition, ToolError};
use rishta_saver_knowledge::{LawyerProfile, format_lawyer_message, lawyers_matching};
use serde::Deserialize;
use serde_json::Value as JsonValue;

fn default_specialization() -> String {
    "family".to_string()
}

fn default_city() -> String {
    "all".to_string()
}

#[derive(Debug, Deserialize)]
struct DirectoryArgs {
    #[serde(default = "default_specialization")]
    specialization: String,
    #[serde(default = "default_city")]
    city: String,
}

#[derive(Debug, Deserialize)]
struct FormatArgs {
    lawyers: Vec<LawyerProfile>,
}

/// Looks up family-law practitioners by city.
pub struct LawyerDirectoryTool;

#[async_trait]
impl Tool for LawyerDirectoryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_lawyers_data",
            "Family lawyer records, optionally narrowed to a city",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "specialization": {
                    "type": "string",
                    "default": "family"
                },
                "city": {
                    "type": "string",
                    "description": "City name, or 'all' for the full directory",
                    "default": "all"
                }
            }
        }))
        .with_output_schema(serde_json::json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "specialization": { "type": "string" },
                    "experience": { "type": "string" },
                    "location": { "type": "string" },
                    "contact": { "type": "string" },
                    "rating": { "type": "string" },
                    "consultation_fee": { "type": "string" }
                }
            }
        }))
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue, ToolError> {
        let args: DirectoryArgs = parse_args("get_lawyers_data", input)?;
        let lawyers = lawyers_matching(&args.specialization, &args.city);
        serde_json::to_value(lawyers).map_err(|e| ToolError::ExecutionFailed {
            name: "get_lawyers_data".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Renders lawyer records as the user-facing list message.
pub struct LawyerMessageTool;

#[async_trait]
impl Tool for LawyerMessageTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "format_lawyer_message",
            "Formats lawyer records into the shareable list message",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "lawyers": {
                    "type": "array",
                    "items": { "type": "object" }
                }
            },
            "required": ["lawyers"]
        }))
        .with_output_schema(serde_json::json!({ "type": "string" }))
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue, ToolError> {
        let args: FormatArgs = parse_args("format_lawyer_message", input)?;
        Ok(JsonValue::String(format_lawyer_message(&args.lawyers)))
    }
}
