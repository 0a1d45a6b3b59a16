//! Station catalog, station file loading and free-text lookup.
//!
//! The catalog is loaded once per session from the station file and is
//! read-only afterwards.

mod catalog;
mod error;
mod loader;
mod lookup;

pub use catalog::Network;
pub use error::LoadError;
pub use loader::{load_stations, read_stations};
pub use lookup::{FuzzyResolver, StationResolver};
