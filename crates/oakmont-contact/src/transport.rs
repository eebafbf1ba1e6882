//! Delivery of a contact inquiry to the remote endpoint

use crate::config::ContactConfig;
use crate::form::FormData;
use crate::SubmitError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::sync::LazyLock;

// One connection pool (and one TLS root store) per process.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Sends one inquiry and reports whether the endpoint accepted it
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ContactTransport: Send + Sync {
    /// Make exactly one delivery attempt.
    async fn deliver(&self, payload: &FormData) -> Result<(), SubmitError>;
}

/// JSON-over-HTTP transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Transport on the process-wide shared client.
    pub fn new(config: &ContactConfig) -> Self {
        Self::with_client(shared_client().clone(), config.endpoint.clone())
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContactTransport for HttpTransport {
    async fn deliver(&self, payload: &FormData) -> Result<(), SubmitError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| SubmitError::transport(e.to_string()))?;

        tracing::debug!("POST {} ({} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.map_err(transport_error)?;
        Err(SubmitError::http(status.as_u16(), &text))
    }
}

/// Client reused by every `HttpTransport::new`, so repeated renders share a pool.
pub fn shared_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

// The endpoint URL contains periods; keep it out of the description so the
// banner's first clause stays readable.
fn transport_error(err: reqwest::Error) -> SubmitError {
    SubmitError::transport(err.without_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transports_reuse_shared_client() {
        let first = HttpTransport::new(&ContactConfig::default().with_endpoint("http://a.test/"));
        let second = HttpTransport::new(&ContactConfig::default().with_endpoint("http://b.test/"));

        assert!(std::ptr::eq(shared_client(), shared_client()));
        assert_eq!(first.endpoint(), "http://a.test/");
        assert_eq!(second.endpoint(), "http://b.test/");
    }
}
