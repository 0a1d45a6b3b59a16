//! Trimming of interchange artifacts at the ends of a path.
//!
//! When the origin or destination is an interchange, the shortest path can
//! begin or end with a line change inside that station. Those steps are
//! dropped so the route starts and ends on the line actually ridden.

use crate::domain::Station;

/// Drop a leading and a trailing same-station step from `path`.
///
/// At most one node is trimmed at each end. A single-node path is returned
/// unchanged.
pub fn simplify(stations: &[&Station], path: &[usize]) -> Vec<usize> {
    let same_name = |a: usize, b: usize| stations[a].name() == stations[b].name();

    let mut path = path;
    if path.len() > 1 && same_name(path[0], path[1]) {
        path = &path[1..];
    }
    if path.len() > 1 && same_name(path[path.len() - 1], path[path.len() - 2]) {
        path = &path[..path.len() - 1];
    }
    path.to_vec()
}
