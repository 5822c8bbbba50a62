//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. Argument problems and missing Telex sessions are
//! reported before any request is sent; everything else comes from the
//! round trip itself.

use nxapi_models::ModelError;

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid configuration (e.g. a base URL that cannot carry paths).
    #[error("configuration error: {0}")]
    Config(String),

    /// An argument was rejected before any request was built.
    #[error("invalid argument: {0}")]
    Validation(#[from] ModelError),

    /// A Telex call that needs a session was made without one.
    #[error("TELEX is not connected")]
    NotConnected,

    /// The server issued an access token that cannot be used as a credential.
    #[error("unusable access token: {0}")]
    InvalidToken(String),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The request could not be completed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful response did not match the expected schema.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decoder error.
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The connection listing stopped advancing before reaching its total.
    #[error("pagination stalled at {skip} of {total} records")]
    StalledPagination {
        /// Records received before the listing stalled.
        skip: u64,
        /// Total the server reported.
        total: u64,
    },
}

impl SdkError {
    /// HTTP status code carried by a [`SdkError::Status`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was raised before any network traffic.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Validation(_) | Self::NotConnected | Self::Encode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accessor() {
        let err = SdkError::Status {
            status: 404,
            url: "https://api.flybywiresim.com/txcxn/nope".into(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_local());
        assert_eq!(SdkError::NotConnected.status(), None);
    }

    #[test]
    fn not_connected_message() {
        assert_eq!(SdkError::NotConnected.to_string(), "TELEX is not connected");
        assert!(SdkError::NotConnected.is_local());
    }

    #[test]
    fn invalid_token_is_not_local() {
        let err = SdkError::InvalidToken("empty access token".into());
        assert_eq!(err.to_string(), "unusable access token: empty access token");
        assert!(!err.is_local());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn validation_wraps_model_error() {
        let err: SdkError = ModelError::MissingField {
            field: "icao".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid argument: missing required field: icao"
        );
        assert!(err.is_local());
    }
}
