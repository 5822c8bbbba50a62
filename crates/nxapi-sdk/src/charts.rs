//! Airport charts.

use nxapi_models::{ChartsResponse, ModelError};

use crate::client::NxApiClient;
use crate::error::SdkError;

impl NxApiClient {
    /// Charts published for `icao` (`GET /api/v1/charts/{icao}`).
    pub async fn charts(&self, icao: &str) -> Result<ChartsResponse, SdkError> {
        let icao = ModelError::require("icao", icao)?;
        let url = self.endpoint(&["api", "v1", "charts", icao])?;
        self.http().get(url, None).await
    }
}
