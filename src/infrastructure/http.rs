use gloo_net::http::Request;
use serde_json::Value;
use web_sys::RequestCache;

use crate::application::financials::{CacheMode, FetchRequest, FinancialsClient, HttpTransport};
use crate::config::ApiConfig;
use crate::domain::{
    errors::{AppError, FetchError, FetchResult},
    logging::LogComponent,
    market_data::Symbol,
};
use crate::{log_debug, log_error};

const COMPONENT: LogComponent = LogComponent::Infrastructure("HTTP");

/// `fetch`-backed transport built on gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    fn request_cache(mode: CacheMode) -> RequestCache {
        match mode {
            CacheMode::NoStore => RequestCache::NoStore,
        }
    }
}

impl HttpTransport for GlooTransport {
    /// Send the GET and decode the body.
    ///
    /// Any status outside 2xx rejects with `FetchError::HttpStatus` and the
    /// body is not read, so an error payload (a 404's JSON, say) never
    /// resolves as if it were financials data.
    async fn get_json(&self, request: &FetchRequest) -> FetchResult<Value> {
        log_debug!(COMPONENT, "🌐 GET: {}", request.url);

        let response = Request::get(&request.url)
            .cache(Self::request_cache(request.cache))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            let err = FetchError::HttpStatus { status: response.status(), status_text: response.status_text() };
            log_error!(COMPONENT, "{}", err);
            return Err(err);
        }

        let body = response.json::<Value>().await.map_err(|e| FetchError::Decode(e.to_string()))?;
        log_debug!(COMPONENT, "✅ GET JSON response parsed: {}", request.url);
        Ok(body)
    }
}

impl FinancialsClient<GlooTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, GlooTransport)
    }
}

/// Fetch the financials payload for `symbol` from the configured backend
pub async fn get_stock(config: &ApiConfig, symbol: &str) -> Result<Value, AppError> {
    let symbol = symbol.parse::<Symbol>()?;
    Ok(FinancialsClient::new(config.clone()).get_stock(&symbol).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_store_maps_to_fetch_no_store() {
        assert_eq!(GlooTransport::request_cache(CacheMode::NoStore), RequestCache::NoStore);
    }
}
