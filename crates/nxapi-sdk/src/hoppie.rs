//! Hoppie ACARS relay.

use nxapi_models::HoppieResponse;
use serde::Serialize;

use crate::client::NxApiClient;
use crate::error::SdkError;

impl NxApiClient {
    /// Forward a Hoppie request through the API (`POST /api/v1/hoppie`).
    ///
    /// The body is passed through untouched; its shape is Hoppie's, not ours.
    pub async fn hoppie<B: Serialize + ?Sized>(&self, body: &B) -> Result<HoppieResponse, SdkError> {
        let url = self.endpoint(&["api", "v1", "hoppie"])?;
        self.http().post(url, body, None).await
    }
}
