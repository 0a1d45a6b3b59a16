//! Time-dependent travel graph.
//!
//! A graph is built fresh for every query, over the stations open at the
//! departure time. Nodes are positions in that filtered list, not station
//! identities, and edge weights depend on the departure time.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::trace;

use crate::domain::{Line, Station};

use super::time_model::TimeModel;

/// Square matrix of directed travel times in minutes.
///
/// A weight of zero means there is no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelGraph {
    size: usize,
    weights: Vec<u32>,
}

impl TravelGraph {
    /// Create a graph of `size` nodes with no edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![0; size * size],
        }
    }

    /// Build a graph from rows of a weight matrix.
    ///
    /// Returns `None` if the matrix is not square.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Travel time from `from` to `to`, if there is an edge.
    pub fn weight(&self, from: usize, to: usize) -> Option<u32> {
        if from >= self.size || to >= self.size {
            return None;
        }
        match self.weights[from * self.size + to] {
            0 => None,
            w => Some(w),
        }
    }

    /// Outgoing edges of `from` as `(to, minutes)`.
    pub fn edges_from(&self, from: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let row: &[u32] = if from < self.size {
            &self.weights[from * self.size..(from + 1) * self.size]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(to, &w)| (to, w))
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    fn set(&mut self, from: usize, to: usize, minutes: u32) {
        self.weights[from * self.size + to] = minutes;
    }
}

/// Builds the travel graph for a departure time.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder<'a> {
    time_model: &'a TimeModel,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(time_model: &'a TimeModel) -> Self {
        Self { time_model }
    }

    /// Build the graph over `stations`, which must be in catalog order.
    ///
    /// Consecutive stations of the same line are linked in both directions
    /// with the hop time of that line. Stations sharing a name on different
    /// lines are linked with the line change time. Line changes are written
    /// last, so they win where both apply to the same pair.
    pub fn build(&self, stations: &[&Station], at: NaiveDateTime) -> TravelGraph {
        let mut graph = TravelGraph::new(stations.len());

        for (line, members) in group_by_line(stations) {
            let hop = self.time_model.next_station_time(line, at);
            for pair in members.windows(2) {
                graph.set(pair[0], pair[1], hop);
                graph.set(pair[1], pair[0], hop);
            }
        }

        let change = self.time_model.change_line_time(at);
        for aliases in group_by_name(stations).into_values() {
            for &i in &aliases {
                for &j in &aliases {
                    if stations[i].is_interchange_alias_of(stations[j]) {
                        graph.set(i, j, change);
                    }
                }
            }
        }

        trace!(
            nodes = graph.size(),
            edges = graph.edge_count(),
            "built travel graph"
        );

        graph
    }
}

/// Node positions per line, in catalog order. Lines are listed in order of
/// first appearance.
fn group_by_line<'s>(stations: &[&'s Station]) -> Vec<(&'s Line, Vec<usize>)> {
    let mut groups: Vec<(&Line, Vec<usize>)> = Vec::new();
    let mut index: HashMap<&Line, usize> = HashMap::new();

    for (pos, &station) in stations.iter().enumerate() {
        let slot = *index.entry(station.line()).or_insert_with(|| {
            groups.push((station.line(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(pos);
    }

    groups
}

/// Node positions per station name.
fn group_by_name<'s>(stations: &[&'s Station]) -> HashMap<&'s str, Vec<usize>> {
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (pos, &station) in stations.iter().enumerate() {
        groups.entry(station.name()).or_default().push(pos);
    }
    groups
}
