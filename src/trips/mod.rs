//! Trip records and the region filter used to build collection URLs.

mod region;
mod types;

pub use region::{Region, RegionParseError};
pub use types::{Trip, TripId};
