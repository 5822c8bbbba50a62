//! Entry point of the SDK.
//!
//! [`NxApiClient`] owns the base URL and the HTTP transport. Endpoint
//! groups add their operations through `impl NxApiClient` blocks in their
//! own modules ([`weather`](crate::weather), [`telex`](crate::telex), ...).
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use nxapi_sdk::{ClientConfig, NxApiClient};
//!
//! # async fn run() -> Result<(), nxapi_sdk::SdkError> {
//! let client = NxApiClient::new(ClientConfig::from_env()?);
//! let metar = client.metar("EDDF", Some("vatsim")).await?;
//! println!("{}", metar.metar);
//! # Ok(())
//! # }
//! ```

use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::SdkError;
use crate::http::HttpClient;

/// Stateless handle on the NX API.
///
/// Cloning is cheap; clones share the connection pool. Telex calls that
/// need a session live on [`TelexSession`](crate::TelexSession).
#[derive(Debug, Clone)]
pub struct NxApiClient {
    http: HttpClient,
    base_url: Url,
}

impl NxApiClient {
    /// Build a client with a default `reqwest` transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Build a client on top of a caller-configured transport.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http: HttpClient::new(http),
            base_url: config.base_url,
        }
    }

    /// Build a client from `NXAPI_URL` (or the public default).
    pub fn from_env() -> Result<Self, SdkError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Root every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The HTTP access layer, for endpoints the SDK does not wrap.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ------------------------------------------------------------------
    // URL building
    // ------------------------------------------------------------------

    /// Resolve `segments` below the base URL.
    ///
    /// Each segment is percent-encoded, so user input such as an ICAO code
    /// can never escape its path position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, SdkError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SdkError::Config(format!("base URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Like [`endpoint`](Self::endpoint), appending every present query pair.
    ///
    /// No `?` is emitted when all values are absent.
    pub fn endpoint_with_query(
        &self,
        segments: &[&str],
        query: &[(&str, Option<String>)],
    ) -> Result<Url, SdkError> {
        let mut url = self.endpoint(segments)?;
        let present: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
            .collect();
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }
        Ok(url)
    }
}

/// `Some(value)` unless `value` is absent or blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> NxApiClient {
        NxApiClient::new(ClientConfig::new(base).unwrap())
    }

    #[test]
    fn endpoint_joins_segments() {
        let c = client("https://api.flybywiresim.com");
        let url = c.endpoint(&["api", "v1", "airport", "EDDF"]).unwrap();
        assert_eq!(url.as_str(), "https://api.flybywiresim.com/api/v1/airport/EDDF");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let c = client("http://localhost:8080/proxy/");
        let url = c.endpoint(&["metar", "KLAX"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/metar/KLAX");
    }

    #[test]
    fn endpoint_encodes_user_input() {
        let c = client("https://api.flybywiresim.com");
        let url = c.endpoint(&["txcxn", "../admin?x=1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.flybywiresim.com/txcxn/..%2Fadmin%3Fx=1"
        );
    }

    #[test]
    fn query_skips_absent_values() {
        let c = client("https://api.flybywiresim.com");
        let url = c
            .endpoint_with_query(&["metar", "EDDF"], &[("source", None)])
            .unwrap();
        assert_eq!(url.query(), None);

        let url = c
            .endpoint_with_query(
                &["txcxn"],
                &[("skip", Some("0".into())), ("take", None), ("north", Some("50.5".into()))],
            )
            .unwrap();
        assert_eq!(url.query(), Some("skip=0&north=50.5"));
    }

    #[test]
    fn non_blank_filters() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some(" vatsim ")), Some("vatsim".into()));
    }
}
