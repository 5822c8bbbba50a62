#![deny(missing_docs)]

//! # NX API Models
//!
//! Typed request and response bodies for the FlyByWire NX API.
//!
//! Every type here mirrors the JSON contract of the remote service.
//! Field names are camelCase on the wire and snake_case in Rust; date-ish
//! string fields are decoded straight into [`chrono::DateTime<Utc>`](chrono::DateTime).
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`weather`] | METAR, TAF and ATIS reports |
//! | [`airport`] | Airport lookups |
//! | [`atc`] | Online controllers and pilots |
//! | [`charts`] | Airport chart listings |
//! | [`satellites`] | GNSS / satellite orbital elements |
//! | [`git`] | Commits, releases, pull requests |
//! | [`telex`] | Telex connections, messages and pagination |
//! | [`hoppie`] | Hoppie ACARS relay |

pub mod airport;
pub mod atc;
pub mod charts;
pub mod error;
pub mod git;
pub mod hoppie;
pub mod satellites;
pub mod telex;
pub mod weather;

// Re-export all public types at crate root for convenience.
pub use airport::*;
pub use atc::*;
pub use charts::*;
pub use error::*;
pub use git::*;
pub use hoppie::*;
pub use satellites::*;
pub use telex::*;
pub use weather::*;
