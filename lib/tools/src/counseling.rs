//! Counseling knowledge tools: tips, divorce consequences, and emergency
//! support.

use crate::parse_args;
use async_trait::async_trait;
use rishta_saver_conversation::{Tool, ToolDefinition, ToolError};
use rishta_saver_knowledge::{counseling_tips, divorce_consequences, emergency_support_json};
use serde::Deserialize;
use serde_json::Value as JsonValue;

fn default_issue_type() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
struct TipsArgs {
    #[serde(default = "default_issue_type")]
    issue_type: String,
}

/// Looks up categorized counseling tips.
pub struct CounselingTipsTool;

#[async_trait]
impl Tool for CounselingTipsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_marriage_counseling_tips",
            "Marriage counseling tips for a given issue type; unknown types get a general set",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "issue_type": {
                    "type": "string",
                    "description": "One of communication, trust, financial, family, religious",
                    "default": "general"
                }
            }
        }))
        .with_output_schema(serde_json::json!({
            "type": "object",
            "additionalProperties": {
                "type": "array",
                "items": { "type": "string" }
            }
        }))
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue, ToolError> {
        let args: TipsArgs = parse_args("get_marriage_counseling_tips", input)?;
        Ok(counseling_tips(&args.issue_type).to_json())
    }
}

/// Reports the fixed divorce-consequence guidance.
pub struct DivorceConsequencesTool;

#[async_trait]
impl Tool for DivorceConsequencesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_divorce_consequences",
            "Islamic perspective, practical consequences, and alternatives to divorce",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {}
        }))
        .with_output_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "islamic_perspective": { "type": "array", "items": { "type": "string" } },
                "practical_consequences": { "type": "array", "items": { "type": "string" } },
                "alternatives": { "type": "array", "items": { "type": "string" } }
            }
        }))
    }

    async fn execute(&self, _input: JsonValue) -> Result<JsonValue, ToolError> {
        Ok(divorce_consequences().to_json())
    }
}

/// Reports the fixed emergency contact lines.
pub struct EmergencySupportTool;

#[async_trait]
impl Tool for EmergencySupportTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_emergency_support",
            "Crisis, legal aid, and mental health contact lines",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {}
        }))
        .with_output_schema(serde_json::json!({
            "type": "object",
            "additionalProperties": { "type": "string" }
        }))
    }

    async fn execute(&self, _input: JsonValue) -> Result<JsonValue, ToolError> {
        Ok(emergency_support_json())
    }
}
