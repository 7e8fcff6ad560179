use std::sync::OnceLock;

use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::ApiConfig;
use crate::domain::{
    errors::{AppError, ConfigError},
    logging::LogComponent,
};
use crate::infrastructure::http;
use crate::{log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Presentation("WasmApi");

static API_CONFIG: OnceLock<Result<ApiConfig, ConfigError>> = OnceLock::new();

/// Backend settings, resolved on first use and shared by every call
pub fn api_config() -> Result<&'static ApiConfig, ConfigError> {
    API_CONFIG.get_or_init(ApiConfig::from_build_env).as_ref().map_err(Clone::clone)
}

/// JS bridge for the financials endpoint.
///
/// Resolves to the parsed JSON body of `GET {base}/financials/{symbol}` and
/// rejects with the error message on any failure.
#[wasm_bindgen(js_name = getStock)]
pub fn get_stock(symbol: String) -> Promise {
    future_to_promise(async move {
        log_info!(COMPONENT, "📡 getStock({})", symbol);

        let body = fetch_financials(&symbol).await.map_err(|err| {
            log_warn!(COMPONENT, "getStock({}) failed: {}", symbol, err);
            JsValue::from_str(&err.to_string())
        })?;

        JsValue::from_serde(&body).map_err(|e| JsValue::from_str(&format!("failed to convert response: {e}")))
    })
}

async fn fetch_financials(symbol: &str) -> Result<serde_json::Value, AppError> {
    let config = api_config()?;
    http::get_stock(config, symbol).await
}
