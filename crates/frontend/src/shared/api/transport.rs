use async_trait::async_trait;
use gloo_net::http::Request;

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a readable response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Issues GET requests on behalf of [`super::ApiClient`]
///
/// The browser is single-threaded, so implementations are not required to be `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// `fetch`-backed transport used in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        // opaque responses (no-cors, opaque redirects) carry no status
        if status == 0 {
            return Err(TransportError("opaque response without status".to_string()));
        }
        // Error bodies are not used, skip reading them
        if !response.ok() {
            return Ok(TransportResponse {
                status,
                body: String::new(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
