//! Hoppie ACARS relay.

use serde::{Deserialize, Serialize};

/// Reply of `POST /api/v1/hoppie`; the raw Hoppie response line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HoppieResponse {
    /// Raw response text, e.g. `"ok {KLAX info/ATIS ...}"`.
    pub response: String,
}
