use derive_more::{Display, From};

use crate::domain::chart::SeriesId;

/// Configuration errors raised while resolving startup settings
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    #[display(fmt = "backend base URL is not configured")]
    MissingBaseUrl,
    #[display(fmt = "invalid backend base URL: {}", _0)]
    InvalidBaseUrl(String),
}

impl std::error::Error for ConfigError {}

/// Failures of a single backend request
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display(fmt = "network error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP error: {} {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    #[display(fmt = "failed to parse response body: {}", _0)]
    Decode(String),
}

impl std::error::Error for FetchError {}

/// Failures reported by a chart engine
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ChartError {
    #[display(fmt = "chart backend error: {}", _0)]
    Backend(String),
    #[display(fmt = "unknown series: {}", _0)]
    UnknownSeries(SeriesId),
}

impl std::error::Error for ChartError {}

/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Config Error: {}", _0)]
    Config(ConfigError),
    #[display(fmt = "Fetch Error: {}", _0)]
    Fetch(FetchError),
    #[display(fmt = "Chart Error: {}", _0)]
    Chart(ChartError),
    #[display(fmt = "Validation Error: {}", _0)]
    #[from(ignore)]
    Validation(String),
}

impl std::error::Error for AppError {}

pub type ChartResult<T> = Result<T, ChartError>;
pub type FetchResult<T> = Result<T, FetchError>;
