//! Route queries.
//!
//! A query filters the catalog to the stations open at the departure time,
//! builds a fresh travel graph, finds the minimum-time path and renders it
//! as instructions. Nothing is shared between queries.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::domain::{RouteError, Side, Station, StationCode};
use crate::stations::Network;

use super::dijkstra::solve;
use super::graph::{GraphBuilder, TravelGraph};
use super::instructions::{Instruction, render};
use super::simplify::simplify;
use super::time_model::TimeModel;

/// A computed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Ride and transfer steps, in travel order.
    pub instructions: Vec<Instruction>,
    /// Codes of the stops visited, origin first.
    pub stops: Vec<StationCode>,
    /// Total travel time along the stops, in minutes.
    pub total_minutes: u32,
}

impl Route {
    /// The instructions as display strings.
    pub fn lines(&self) -> Vec<String> {
        self.instructions.iter().map(|i| i.to_string()).collect()
    }

    /// Total travel time.
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.total_minutes.into())
    }

    /// Number of line changes.
    pub fn change_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::ChangeTo { .. }))
            .count()
    }
}

/// Answers route queries over a station network.
#[derive(Debug, Clone)]
pub struct Router<'a> {
    network: &'a Network,
    time_model: TimeModel,
}

impl<'a> Router<'a> {
    pub fn new(network: &'a Network, time_model: TimeModel) -> Self {
        Self {
            network,
            time_model,
        }
    }

    /// Find the fastest route between two stations, by exact name, departing at `at`.
    pub fn get_route(
        &self,
        origin: &str,
        destination: &str,
        at: NaiveDateTime,
    ) -> Result<Route, RouteError> {
        let open = self.network.open_stations(at);
        let running: Vec<&Station> = open
            .iter()
            .copied()
            .filter(|s| !self.time_model.is_line_closed(s.line(), at))
            .collect();

        let origin_idx = locate(&open, &running, origin, Side::Origin)?;
        let destination_idx = locate(&open, &running, destination, Side::Destination)?;

        let graph = GraphBuilder::new(&self.time_model).build(&running, at);
        let Ok(path) = solve(&graph, origin_idx, destination_idx) else {
            return Err(RouteError::NoRouteFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        };

        let nodes = simplify(&running, &path.nodes);
        let route = Route {
            instructions: render(&running, &nodes),
            stops: nodes.iter().map(|&n| running[n].code().clone()).collect(),
            total_minutes: path_minutes(&graph, &nodes),
        };

        debug!(
            origin,
            destination,
            %at,
            category = ?self.time_model.classify(at),
            open = open.len(),
            running = running.len(),
            solved_minutes = path.total_minutes,
            total_minutes = route.total_minutes,
            changes = route.change_count(),
            "route found"
        );

        Ok(route)
    }
}

/// Position of the first running station named `name`.
fn locate(
    open: &[&Station],
    running: &[&Station],
    name: &str,
    side: Side,
) -> Result<usize, RouteError> {
    if let Some(idx) = running.iter().position(|s| s.name() == name) {
        return Ok(idx);
    }
    let name = name.to_string();
    if open.iter().any(|s| s.name() == name) {
        Err(RouteError::StationClosed { side, name })
    } else {
        Err(RouteError::StationNotYetOpen { side, name })
    }
}

fn path_minutes(graph: &TravelGraph, nodes: &[usize]) -> u32 {
    nodes
        .windows(2)
        .filter_map(|w| graph.weight(w[0], w[1]))
        .sum()
}
