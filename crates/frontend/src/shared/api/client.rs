use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::endpoint::Endpoint;
use super::error::ApiError;
use super::transport::{GlooTransport, HttpTransport};
use crate::shared::api_utils::api_base;

/// Resolves the API base URL. Called once per request.
pub type BaseUrlResolver = Rc<dyn Fn() -> String>;

/// Request client: a transport plus a base URL resolver
///
/// Holds no other state; cloning is cheap and clones share the resolver.
#[derive(Clone)]
pub struct ApiClient<T = GlooTransport> {
    transport: T,
    base_url: BaseUrlResolver,
}

impl ApiClient<GlooTransport> {
    /// Client for the running page, pointed at [`api_base`]
    pub fn browser() -> Self {
        Self::new(GlooTransport, api_base)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Fn() -> String + 'static) -> Self {
        Self {
            transport,
            base_url: Rc::new(base_url),
        }
    }

    /// Full URL for an endpoint against the currently resolved base URL
    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", (self.base_url)(), endpoint)
    }

    /// GET an endpoint and decode its JSON body as `R`
    ///
    /// No schema validation happens beyond what `R`'s `Deserialize` implies.
    pub async fn fetch_json<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<R, ApiError> {
        let url = self.url_for(endpoint);
        log::debug!("GET {}", url);

        let result = self.send(&url).await;
        if let Err(err) = &result {
            log::warn!("GET {} failed ({}): {}", url, err.status, err.message);
        }
        result
    }

    async fn send<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        let response = self.transport.get(url).await.map_err(ApiError::network)?;

        // status 0 is reserved for failures without a usable response
        if response.status == ApiError::NETWORK_STATUS {
            return Err(ApiError::network("response has no status"));
        }

        if !response.is_success() {
            return Err(ApiError::http(response.status));
        }

        serde_json::from_str(&response.body).map_err(ApiError::network)
    }
}
