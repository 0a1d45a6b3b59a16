//! Route query error types.
//!
//! These are the typed failures a route query can produce. They are
//! distinct from loading and parsing errors, which are rejected before
//! a query ever reaches the planner.

use std::fmt;

/// Which end of a route a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Origin,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Origin => f.write_str("origin"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

/// Failures of a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No station with this name has opened by the departure time
    #[error("the {side} station {name} is not open yet at this point in time")]
    StationNotYetOpen { side: Side, name: String },

    /// The station exists but every line serving it is closed at this hour
    #[error("the {side} station {name} is closed at this time of day")]
    StationClosed { side: Side, name: String },

    /// The destination cannot be reached from the origin
    #[error("no route from {origin} to {destination} at this time")]
    NoRouteFound { origin: String, destination: String },
}

impl RouteError {
    /// The side the failure refers to, if it concerns a single station.
    pub fn side(&self) -> Option<Side> {
        match self {
            RouteError::StationNotYetOpen { side, .. } | RouteError::StationClosed { side, .. } => {
                Some(*side)
            }
            RouteError::NoRouteFound { .. } => None,
        }
    }
}
