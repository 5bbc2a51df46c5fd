//! Command implementations.

pub mod geo;
pub mod sweep;
