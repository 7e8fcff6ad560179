use serde_json::Value;
use strum::{AsRefStr, Display};

use crate::config::ApiConfig;
use crate::domain::{errors::FetchResult, logging::LogComponent, market_data::Symbol};
use crate::{log_debug, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("Financials");

/// Browser cache policy requested for a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CacheMode {
    NoStore,
}

/// A GET request as handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub cache: CacheMode,
}

/// Performs one HTTP GET and parses the body as JSON
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn get_json(&self, request: &FetchRequest) -> FetchResult<Value>;
}

/// Client for the backend's `/financials/{symbol}` endpoint.
///
/// Every call reaches the origin: no caching, retry, timeout or de-duplication.
pub struct FinancialsClient<T: HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl<T: HttpTransport> FinancialsClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn financials_url(&self, symbol: &Symbol) -> String {
        format!("{}/financials/{}", self.config.base_url(), symbol.value())
    }

    pub fn request_for(&self, symbol: &Symbol) -> FetchRequest {
        FetchRequest { url: self.financials_url(symbol), cache: CacheMode::NoStore }
    }

    /// Raw JSON body for `symbol`; the payload shape is whatever the backend returns
    pub async fn get_stock(&self, symbol: &Symbol) -> FetchResult<Value> {
        let request = self.request_for(symbol);
        log_debug!(COMPONENT, "GET {} (cache: {})", request.url, request.cache);

        match self.transport.get_json(&request).await {
            Ok(body) => Ok(body),
            Err(err) => {
                log_warn!(COMPONENT, "financials request for {} failed: {}", symbol, err);
                Err(err)
            }
        }
    }
}
