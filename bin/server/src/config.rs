//! Centralized server configuration.
//!
//! Strongly-typed configuration loaded once at startup via the `config`
//! crate from environment variables. The model credential is required;
//! the messaging credentials are optional and their absence degrades only
//! the WhatsApp dispatcher.

use rishta_saver_ai::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;

/// Server configuration composed from environment variables.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Model-access credential. Absence is fatal at startup.
    pub gemini_api_key: String,

    /// Messaging-provider instance identifier (`INSTANCE_ID`).
    #[serde(default)]
    pub instance_id: Option<String>,

    /// Messaging-provider API token (`API_TOKEN`).
    #[serde(default)]
    pub api_token: Option<String>,

    /// Address the HTTP API listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Model endpoint configuration.
    #[serde(default)]
    pub model: ModelConfig,
}

/// Chat-model endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the OpenAI-compatible endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier.
    #[serde(default = "default_model_name")]
    pub name: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model_name() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            name: default_model_name(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_config_has_gemini_defaults() {
        let config = ModelConfig::default();
        assert_eq!(
            config.base_url,
            "https://generativelanguage.googleapis.com/v1beta/openai"
        );
        assert_eq!(config.name, "gemini-2.5-flash");
    }

    #[test]
    fn listen_addr_default_is_loopback() {
        assert_eq!(default_listen_addr(), "127.0.0.1:3000");
    }
}
