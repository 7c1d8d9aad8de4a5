//! WhatsApp message dispatch via the UltraMSG HTTP API.
//!
//! Delivery is single best-effort: one POST, no retry, no backoff. Every
//! outcome, including missing credentials and transport failures, is
//! reported as a human-readable status string rather than an error.

use crate::transport::HttpTransport;
use rishta_saver_core::DeliveryId;
use std::sync::Arc;

/// Base URL of the messaging provider.
const ULTRAMSG_BASE_URL: &str = "https://api.ultramsg.com";

/// Status returned when the provider credentials are not configured.
pub const CREDENTIALS_MISSING_STATUS: &str =
    "❌ WhatsApp API credentials missing. Please check INSTANCE_ID and API_TOKEN.";

/// Credentials for the messaging provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingCredentials {
    /// Provider instance identifier.
    pub instance_id: String,
    /// Provider API token.
    pub api_token: String,
}

impl MessagingCredentials {
    /// Creates credentials from both parts, or `None` if either is absent.
    #[must_use]
    pub fn from_parts(instance_id: Option<String>, api_token: Option<String>) -> Option<Self> {
        match (instance_id, api_token) {
            (Some(instance_id), Some(api_token)) => Some(Self {
                instance_id,
                api_token,
            }),
            _ => None,
        }
    }
}

/// Dispatches WhatsApp messages through the UltraMSG chat endpoint.
///
/// Credentials are optional: a dispatcher without them still answers every
/// send, just with the fixed missing-credentials status and no network I/O.
pub struct WhatsAppDispatcher {
    credentials: Option<MessagingCredentials>,
    transport: Arc<dyn HttpTransport>,
}

impl WhatsAppDispatcher {
    /// Creates a dispatcher over the given transport.
    #[must_use]
    pub fn new(credentials: Option<MessagingCredentials>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Returns true if provider credentials are configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Sends a message to a phone number, reporting the outcome as text.
    ///
    /// HTTP 200 maps to a success status containing the destination number;
    /// any other status maps to a failure status containing the raw
    /// provider body; a transport failure maps to a failure status
    /// containing the error text.
    pub async fn send(&self, number: &str, message: &str) -> String {
        let Some(credentials) = &self.credentials else {
            tracing::warn!(to = %number, "WhatsApp dispatch skipped: credentials not configured");
            return CREDENTIALS_MISSING_STATUS.to_string();
        };

        let delivery_id = DeliveryId::new();
        let url = format!(
            "{ULTRAMSG_BASE_URL}/{instance}/messages/chat",
            instance = credentials.instance_id
        );
        let form = [
            ("token", credentials.api_token.as_str()),
            ("to", number),
            ("body", message),
        ];

        tracing::info!(%delivery_id, to = %number, %url, "sending WhatsApp message");

        match self.transport.post_form(&url, &form).await {
            Ok(response) => {
                tracing::info!(
                    %delivery_id,
                    status = response.status,
                    body = %response.body,
                    "provider response"
                );
                if response.is_ok() {
                    format!("✅ Message successfully sent to {number}")
                } else {
                    format!("❌ Failed to send message. Error: {body}", body = response.body)
                }
            }
            Err(err) => {
                tracing::warn!(%delivery_id, error = %err, "WhatsApp dispatch failed in transport");
                format!("❌ Error sending WhatsApp message: {err}")
            }
        }
    }
}
