//! Client configuration.
//!
//! The only knob is the API base URL. It defaults to the public FlyByWire
//! deployment and can be overridden through the environment:
//!
//! | Variable    | Default                          |
//! |-------------|----------------------------------|
//! | `NXAPI_URL` | `https://api.flybywiresim.com`   |

use reqwest::Url;

use crate::error::SdkError;

/// Public FlyByWire API deployment.
pub const DEFAULT_BASE_URL: &str = "https://api.flybywiresim.com";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "NXAPI_URL";

/// Settings used to build an [`NxApiClient`](crate::NxApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root every endpoint path is appended to.
    pub base_url: Url,
}

impl ClientConfig {
    /// Build a configuration for the given base URL.
    ///
    /// Fails when the URL does not parse or cannot carry a path
    /// (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SdkError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SdkError::Config(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }
        Ok(Self { base_url })
    }

    /// The public FlyByWire deployment ([`DEFAULT_BASE_URL`]).
    pub fn public() -> Result<Self, SdkError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Read the base URL from `NXAPI_URL`, falling back to the public API.
    pub fn from_env() -> Result<Self, SdkError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::public(),
        }
    }
}
