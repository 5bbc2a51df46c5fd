//! Core types and errors for the astrascan reconnaissance sweep.
//!
//! This crate provides the foundational types shared by the sweep:
//!
//! - **Wire types**: what the Shodan search endpoint returns
//!   ([`SearchMatch`], [`SearchResults`])
//! - **Derived types**: the geolocation view ([`GeoRecord`]) and the
//!   persisted report documents ([`QueryReport`], [`CombinedReport`],
//!   [`ScanSummary`])
//! - **Errors**: [`SweepError`] with a [`Result`] alias

mod error;
pub mod types;

pub use error::{Result, SweepError};
pub use types::*;
