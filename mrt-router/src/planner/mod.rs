//! Time-aware route planning.
//!
//! A query runs a fixed pipeline over the stations open at the departure
//! time: build a travel graph whose weights depend on the time of day,
//! find the minimum-time path with Dijkstra, trim interchange artifacts at
//! the ends and render the path as ride and transfer instructions.

mod config;
mod dijkstra;
mod graph;
mod instructions;
mod router;
mod simplify;
mod time_model;

pub use config::{ConfigError, TimingConfig};
pub use dijkstra::{ShortestPath, UNREACHABLE, Unreachable, solve};
pub use graph::{GraphBuilder, TravelGraph};
pub use instructions::{Instruction, render};
pub use router::{Route, Router};
pub use simplify::simplify;
pub use time_model::{TimeCategory, TimeModel};
