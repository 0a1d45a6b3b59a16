//! Domain types for the route finder.
//!
//! This module contains the validated value types the rest of the crate
//! works with. Types enforce their invariants at construction time, so
//! code that receives them can trust their validity.

mod error;
mod station;
mod time;

pub use error::{RouteError, Side};
pub use station::{InvalidStationCode, Line, Station, StationCode};
pub use time::{TimeError, parse_departure, parse_dmy, parse_hhmm, parse_open_date};
