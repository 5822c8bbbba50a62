//! Online controllers and pilots.

use nxapi_models::{AtcInfo, ModelError, PilotInfo};

use crate::client::NxApiClient;
use crate::error::SdkError;

impl NxApiClient {
    /// Controllers online on `source` (`GET /api/v1/atc?source=`).
    pub async fn atc(&self, source: &str) -> Result<Vec<AtcInfo>, SdkError> {
        let source = ModelError::require("source", source)?;
        let url = self.endpoint_with_query(&["api", "v1", "atc"], &[("source", Some(source.to_owned()))])?;
        self.http().get(url, None).await
    }

    /// Pilots online on `source` (`GET /api/v1/pilot?source=`).
    pub async fn pilots(&self, source: &str) -> Result<Vec<PilotInfo>, SdkError> {
        let source = ModelError::require("source", source)?;
        let url = self.endpoint_with_query(&["api", "v1", "pilot"], &[("source", Some(source.to_owned()))])?;
        self.http().get(url, None).await
    }
}
