//! WhatsApp notification tool.

use crate::parse_args;
use async_trait::async_trait;
use rishta_saver_conversation::{Tool, ToolDefinition, ToolError};
use rishta_saver_notify::WhatsAppDispatcher;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct SendArgs {
    number: String,
    message: String,
}

/// Forwards a message to a phone number via the WhatsApp dispatcher.
///
/// The tool never fails: dispatch outcomes, including missing credentials,
/// come back as the status string the dispatcher produced.
pub struct WhatsAppSendTool {
    dispatcher: Arc<WhatsAppDispatcher>,
}

impl WhatsAppSendTool {
    /// Creates the tool over a dispatcher.
    #[must_use]
    pub fn new(dispatcher: Arc<WhatsAppDispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl Tool for WhatsAppSendTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "send_whatsapp_message",
            "Sends a WhatsApp message to a phone number and reports the delivery status",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "number": {
                    "type": "string",
                    "description": "Destination phone number"
                },
                "message": {
                    "type": "string",
                    "description": "Message text to deliver"
                }
            },
            "required": ["number", "message"]
        }))
        .with_output_schema(serde_json::json!({ "type": "string" }))
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue, ToolError> {
        let args: SendArgs = parse_args("send_whatsapp_message", input)?;
        let status = self.dispatcher.send(&args.number, &args.message).await;
        Ok(JsonValue::String(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rishta_saver_notify::{
        HttpTransport, MessagingCredentials, TransportError, TransportResponse,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransport {
        calls: AtomicUsize,
        response: TransportResponse,
    }

    impl CountingTransport {
        fn returning(response: TransportResponse) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response,
            })
        }
    }

    #[async_trait]
    impl HttpTransport for CountingTransport {
        async fn post_form(
            &self,
            _url: &str,
            _form: &[(&str, &str)],
        ) -> Result<TransportResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn delivery_status_is_passed_through() {
        let transport = CountingTransport::returning(TransportResponse::new(200, "{}"));
        let dispatcher = Arc::new(WhatsAppDispatcher::new(
            Some(MessagingCredentials {
                instance_id: "instance1".to_string(),
                api_token: "token".to_string(),
            }),
            transport.clone(),
        ));
        let tool = WhatsAppSendTool::new(dispatcher);

        let result = tool
            .execute(serde_json::json!({"number": "+923001112223", "message": "ok"}))
            .await
            .expect("executes");

        assert!(result.as_str().expect("string").contains("+923001112223"));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_credentials_surface_as_status_not_error() {
        let transport = CountingTransport::returning(TransportResponse::new(200, "{}"));
        let dispatcher = Arc::new(WhatsAppDispatcher::new(None, transport.clone()));
        let tool = WhatsAppSendTool::new(dispatcher);

        let result = tool
            .execute(serde_json::json!({"number": "+923001112223", "message": "ok"}))
            .await
            .expect("still ok");

        assert!(result.as_str().expect("string").contains("credentials missing"));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_fields_are_invalid_input() {
        let transport = CountingTransport::returning(TransportResponse::new(200, "{}"));
        let dispatcher = Arc::new(WhatsAppDispatcher::new(None, transport));
        let tool = WhatsAppSendTool::new(dispatcher);

        let err = tool
            .execute(serde_json::json!({"number": "+923001112223"}))
            .await
            .expect_err("rejects");
        assert!(matches!(err, ToolError::InvalidInput { .. }));
    }
}
