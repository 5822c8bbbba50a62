//! # NX API SDK
//!
//! Typed async client for the FlyByWire NX API: aviation weather, airport
//! and network lookups, satellite elements, git release metadata and the
//! Telex flight-tracking service.
//!
//! The SDK provides:
//!
//! * [`NxApiClient`]: stateless handle; every endpoint is one method doing
//!   one round trip.
//! * [`TelexSession`]: caller-owned Telex session holding the bearer
//!   token for authenticated calls.
//! * [`HttpClient`]: the GET/POST/PUT/DELETE access layer underneath.
//! * [`SdkError`]: unified error type for all SDK operations.
//! * [`ClientConfig`]: base URL configuration (`NXAPI_URL`).
//!
//! Response types come from [`nxapi_models`] and are re-exported.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use nxapi_sdk::NxApiClient;
//!
//! # async fn run() -> Result<(), nxapi_sdk::SdkError> {
//! let client = NxApiClient::from_env()?;
//!
//! let airport = client.airport("EDDF").await?;
//! println!("{} at {}/{}", airport.name, airport.lat, airport.lon);
//!
//! let mut pages = std::pin::pin!(client.all_connections(None));
//! while let Some(page) = pages.try_next().await? {
//!     println!("{} of {} flights", page.count, page.total);
//! }
//! # Ok(())
//! # }
//! ```

pub mod airport;
pub mod atc;
pub mod charts;
pub mod client;
pub mod config;
pub mod error;
pub mod git_versions;
pub mod hoppie;
pub mod http;
pub mod satellites;
pub mod telex;
pub mod weather;

pub use client::NxApiClient;
pub use config::ClientConfig;
pub use error::SdkError;
pub use git_versions::ReleaseQuery;
pub use http::HttpClient;
pub use telex::{TelexSession, MAX_EMPTY_PAGES, PAGE_SIZE};

pub use nxapi_models;
