//! HTTP client for the Shodan host search endpoint.
//!
//! This crate provides [`SearchClient`], an async client for
//! `/shodan/host/search` with transparent pagination via
//! [`SearchClient::search_all`].

mod client;
mod search;

pub use astrascan_core::{Result, SweepError};
pub use client::{SearchClient, SearchClientBuilder};
pub use search::PAGE_SIZE;
