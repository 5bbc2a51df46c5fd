//! Report generation and persistence for sweep results.
//!
//! Converts raw matches into geolocation records, sanitizes query
//! strings into safe file names, computes aggregate summaries, and
//! persists report documents as pretty-printed JSON.

mod filename;
mod geo;
mod summary;
mod writer;

pub use filename::sanitize_filename;
pub use geo::to_geo_records;
pub use summary::build_summary;
pub use writer::save_json;
