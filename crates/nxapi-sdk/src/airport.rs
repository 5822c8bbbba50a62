//! Airport lookups.

use nxapi_models::{AirportBatchRequest, AirportResponse, ModelError};

use crate::client::NxApiClient;
use crate::error::SdkError;

impl NxApiClient {
    /// One airport by ICAO code (`GET /api/v1/airport/{icao}`).
    pub async fn airport(&self, icao: &str) -> Result<AirportResponse, SdkError> {
        let icao = ModelError::require("icao", icao)?;
        let url = self.endpoint(&["api", "v1", "airport", icao])?;
        self.http().get(url, None).await
    }

    /// Several airports in one round trip (`POST /api/v1/airport/_batch`).
    ///
    /// Unknown codes are silently left out of the reply by the server.
    pub async fn airports<S: AsRef<str>>(
        &self,
        icaos: &[S],
    ) -> Result<Vec<AirportResponse>, SdkError> {
        if icaos.is_empty() {
            return Err(ModelError::MissingField {
                field: "icaos".into(),
            }
            .into());
        }
        let icaos = icaos
            .iter()
            .map(|icao| ModelError::require("icaos", icao.as_ref()).map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;
        let url = self.endpoint(&["api", "v1", "airport", "_batch"])?;
        self.http()
            .post(url, &AirportBatchRequest { icaos }, None)
            .await
    }
}
