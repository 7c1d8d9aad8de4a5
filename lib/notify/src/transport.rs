//! HTTP transport seam for the dispatcher.
//!
//! The dispatcher talks to the messaging provider through this trait so
//! tests can substitute a scripted transport and assert on what was (or
//! was not) sent.

use crate::error::TransportError;
use async_trait::async_trait;

/// A raw HTTP response: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, as text.
    pub body: String,
}

impl TransportResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for an HTTP 200 response.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Trait for posting form-encoded requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Posts a form-encoded body to a URL and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed at the
    /// transport level.
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError>;
}

/// The production transport, backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport over an existing client.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::BodyReadFailed {
                reason: e.to_string(),
            })?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_ok_only_for_200() {
        assert!(TransportResponse::new(200, "{}").is_ok());
        assert!(!TransportResponse::new(201, "{}").is_ok());
        assert!(!TransportResponse::new(500, "boom").is_ok());
    }
}
