//! # astrascan-cli
//!
//! Command-line reconnaissance sweep for Internet-exposed Astra Linux
//! hosts, backed by the Shodan search API.
//!
//! - **Sweep mode**: runs the built-in query list and writes per-query,
//!   combined, geolocation, and summary reports
//! - **Geo mode**: runs a single ad-hoc query and writes one
//!   geolocation array

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::run;
