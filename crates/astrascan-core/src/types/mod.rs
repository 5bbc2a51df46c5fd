mod geo;
mod report;
mod search;

pub use geo::*;
pub use report::*;
pub use search::*;
