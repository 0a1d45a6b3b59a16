//! Time-aware MRT route finder.
//!
//! Answers: "what is the fastest way from this station to that one, if I
//! leave at this time?" Station opening dates decide which stations exist
//! at the departure time, and the time of day decides how long each hop and
//! each line change takes.

pub mod cli;
pub mod domain;
pub mod planner;
pub mod stations;
