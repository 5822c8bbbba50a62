//! METAR, TAF and ATIS.

use nxapi_models::{AtisResponse, MetarResponse, ModelError, TafResponse};

use crate::client::{non_blank, NxApiClient};
use crate::error::SdkError;

impl NxApiClient {
    /// Current weather for `icao` (`GET /metar/{icao}`).
    ///
    /// `source` selects an upstream provider; blank means server default.
    pub async fn metar(&self, icao: &str, source: Option<&str>) -> Result<MetarResponse, SdkError> {
        let url = self.report_url("metar", icao, source)?;
        self.http().get(url, None).await
    }

    /// Forecast for `icao` (`GET /taf/{icao}`).
    pub async fn taf(&self, icao: &str, source: Option<&str>) -> Result<TafResponse, SdkError> {
        let url = self.report_url("taf", icao, source)?;
        self.http().get(url, None).await
    }

    /// Terminal information for `icao` (`GET /atis/{icao}`).
    pub async fn atis(&self, icao: &str, source: Option<&str>) -> Result<AtisResponse, SdkError> {
        let url = self.report_url("atis", icao, source)?;
        self.http().get(url, None).await
    }

    fn report_url(
        &self,
        kind: &str,
        icao: &str,
        source: Option<&str>,
    ) -> Result<reqwest::Url, SdkError> {
        let icao = ModelError::require("icao", icao)?;
        self.endpoint_with_query(&[kind, icao], &[("source", non_blank(source))])
    }
}
