use url::Url;

use crate::domain::errors::ConfigError;

/// Compile-time variable holding the backend base URL
pub const API_URL_ENV: &str = "DASHBOARD_API_URL";

/// Backend settings, resolved once at startup and passed to the clients that need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate a raw base URL; blank input is a missing setting, not an empty URL
    pub fn resolve(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(ConfigError::MissingBaseUrl)?;

        let invalid = || ConfigError::InvalidBaseUrl(raw.to_string());
        let url = Url::parse(raw).map_err(|_| invalid())?;
        let usable = matches!(url.scheme(), "http" | "https")
            && url.host_str().is_some_and(|host| !host.is_empty())
            && url.query().is_none()
            && url.fragment().is_none();
        if !usable {
            return Err(invalid());
        }

        Ok(Self { base_url: raw.trim_end_matches('/').to_string() })
    }

    /// Read `DASHBOARD_API_URL` as baked into the bundle at build time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::resolve(option_env!("DASHBOARD_API_URL"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
