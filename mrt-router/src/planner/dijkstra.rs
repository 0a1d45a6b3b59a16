//! Single-source shortest path over a travel graph.
//!
//! Networks are a few hundred nodes, so the solver scans an explicit
//! unvisited set for the nearest node instead of keeping a priority queue.
//! That keeps tie-breaking deterministic: the lowest node index wins.

use std::collections::BTreeSet;

use tracing::trace;

use super::graph::TravelGraph;

/// Distance of a node that has not been reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// The destination cannot be reached from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("node {destination} is unreachable from node {origin}")]
pub struct Unreachable {
    pub origin: usize,
    pub destination: usize,
}

/// A minimum-time path through the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Node indices from origin to destination, inclusive.
    pub nodes: Vec<usize>,
    /// Total travel time in minutes.
    pub total_minutes: u32,
}

/// Solver state: tentative distances, predecessors and the unvisited set.
#[derive(Debug)]
struct DijkstraState {
    distance: Vec<u32>,
    predecessor: Vec<Option<usize>>,
    unvisited: BTreeSet<usize>,
}

impl DijkstraState {
    fn new(size: usize, origin: usize) -> Self {
        let mut distance = vec![UNREACHABLE; size];
        distance[origin] = 0;
        Self {
            distance,
            predecessor: vec![None; size],
            unvisited: (0..size).collect(),
        }
    }

    /// Remove and return the nearest unvisited node.
    ///
    /// Returns `None` once every remaining node is unreachable.
    fn pop_nearest(&mut self) -> Option<usize> {
        let mut nearest: Option<usize> = None;
        for &node in &self.unvisited {
            let d = self.distance[node];
            if d != UNREACHABLE && nearest.is_none_or(|n| d < self.distance[n]) {
                nearest = Some(node);
            }
        }
        let node = nearest?;
        self.unvisited.remove(&node);
        Some(node)
    }

    fn relax(&mut self, graph: &TravelGraph, node: usize) {
        let base = self.distance[node];
        for (next, minutes) in graph.edges_from(node) {
            if !self.unvisited.contains(&next) {
                continue;
            }
            let candidate = base.saturating_add(minutes);
            if candidate < self.distance[next] {
                self.distance[next] = candidate;
                self.predecessor[next] = Some(node);
            }
        }
    }

    /// Walk predecessors back from `destination`.
    ///
    /// Fails if the chain ends anywhere but at `origin`.
    fn path_to(&self, origin: usize, destination: usize) -> Result<Vec<usize>, Unreachable> {
        let unreachable = Unreachable {
            origin,
            destination,
        };
        if self.distance[destination] == UNREACHABLE {
            return Err(unreachable);
        }

        let mut nodes = vec![destination];
        let mut current = destination;
        while current != origin {
            current = self.predecessor[current].ok_or(unreachable)?;
            nodes.push(current);
        }
        nodes.reverse();
        Ok(nodes)
    }
}

/// Find the minimum-time path from `origin` to `destination`.
///
/// # Panics
///
/// Panics if `origin` or `destination` is not a node of `graph`.
///
/// # Examples
///
/// ```
/// use mrt_router::planner::{TravelGraph, solve};
///
/// let graph = TravelGraph::from_rows(vec![
///     vec![0, 4, 9],
///     vec![4, 0, 3],
///     vec![9, 3, 0],
/// ])
/// .unwrap();
///
/// let path = solve(&graph, 0, 2).unwrap();
/// assert_eq!(path.nodes, vec![0, 1, 2]);
/// assert_eq!(path.total_minutes, 7);
/// ```
pub fn solve(
    graph: &TravelGraph,
    origin: usize,
    destination: usize,
) -> Result<ShortestPath, Unreachable> {
    assert!(
        origin < graph.size() && destination < graph.size(),
        "origin and destination must be nodes of the graph"
    );

    let mut state = DijkstraState::new(graph.size(), origin);
    let mut settled = 0;

    while let Some(node) = state.pop_nearest() {
        settled += 1;
        state.relax(graph, node);
    }

    trace!(
        origin,
        destination,
        settled,
        nodes = graph.size(),
        "dijkstra finished"
    );

    let nodes = state.path_to(origin, destination)?;
    Ok(ShortestPath {
        nodes,
        total_minutes: state.distance[destination],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: Vec<Vec<u32>>) -> TravelGraph {
        TravelGraph::from_rows(rows).unwrap()
    }

    #[test]
    fn origin_is_destination() {
        let g = graph(vec![vec![0, 1], vec![1, 0]]);
        let path = solve(&g, 1, 1).unwrap();
        assert_eq!(path.nodes, vec![1]);
        assert_eq!(path.total_minutes, 0);
    }

    #[test]
    fn single_isolated_node() {
        let g = graph(vec![vec![0]]);
        let path = solve(&g, 0, 0).unwrap();
        assert_eq!(path.nodes, vec![0]);
    }

    #[test]
    fn prefers_cheaper_detour() {
        // 0 -> 3 directly costs 20, via 1 and 2 costs 9.
        let g = graph(vec![
            vec![0, 3, 0, 20],
            vec![3, 0, 3, 0],
            vec![0, 3, 0, 3],
            vec![20, 0, 3, 0],
        ]);
        let path = solve(&g, 0, 3).unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
        assert_eq!(path.total_minutes, 9);
    }

    #[test]
    fn respects_direction() {
        // Only 0 -> 1 exists.
        let g = graph(vec![vec![0, 5], vec![0, 0]]);
        assert!(solve(&g, 0, 1).is_ok());
        assert_eq!(
            solve(&g, 1, 0),
            Err(Unreachable {
                origin: 1,
                destination: 0
            })
        );
    }

    #[test]
    fn disconnected_destination() {
        let g = graph(vec![
            vec![0, 2, 0, 0],
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 2],
            vec![0, 0, 2, 0],
        ]);
        let err = solve(&g, 0, 3).unwrap_err();
        assert_eq!(err.to_string(), "node 3 is unreachable from node 0");
        assert_eq!(solve(&g, 2, 3).unwrap().nodes, vec![2, 3]);
    }

    #[test]
    fn ties_keep_first_settled_predecessor() {
        // Two equal routes 0-1-3 and 0-2-3; node 1 settles first.
        let g = graph(vec![
            vec![0, 5, 5, 0],
            vec![5, 0, 0, 5],
            vec![5, 0, 0, 5],
            vec![0, 5, 5, 0],
        ]);
        let path = solve(&g, 0, 3).unwrap();
        assert_eq!(path.nodes, vec![0, 1, 3]);
        assert_eq!(path.total_minutes, 10);
    }

    #[test]
    fn broken_predecessor_chain_is_unreachable() {
        let mut state = DijkstraState::new(3, 0);
        state.distance[2] = 4;
        state.predecessor[2] = Some(1);
        assert_eq!(
            state.path_to(0, 2),
            Err(Unreachable {
                origin: 0,
                destination: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "must be nodes of the graph")]
    fn out_of_range_origin_panics() {
        let g = graph(vec![vec![0]]);
        let _ = solve(&g, 3, 0);
    }
}
