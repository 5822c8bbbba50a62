//! GNSS and satellite orbital elements.

use nxapi_models::{GnssResponse, SatelliteResponse};

use crate::client::{non_blank, NxApiClient};
use crate::error::SdkError;

impl NxApiClient {
    /// Current GNSS constellation elements (`GET /api/v1/gnss`).
    pub async fn gnss(&self) -> Result<Vec<GnssResponse>, SdkError> {
        let url = self.endpoint(&["api", "v1", "gnss"])?;
        self.http().get(url, None).await
    }

    /// Satellite elements with TLE lines (`GET /api/v1/satellites[?type=]`).
    ///
    /// `kind` narrows the catalogue (e.g. `"gps"`, `"galileo"`).
    pub async fn satellites(&self, kind: Option<&str>) -> Result<Vec<SatelliteResponse>, SdkError> {
        let url = self.endpoint_with_query(&["api", "v1", "satellites"], &[("type", non_blank(kind))])?;
        self.http().get(url, None).await
    }
}
