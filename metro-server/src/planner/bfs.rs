//! Unweighted breadth-first search over the network.
//!
//! Every connection costs one hop. Neighbours are expanded in first-seen
//! station order and the first discovery of a station fixes its parent,
//! so among several shortest paths the one found first always wins and
//! repeated queries return the same route.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::network::Network;

use super::error::PlanError;
use super::itinerary::Route;

/// Find the route with the fewest hops from `start` to `end`.
///
/// Station names are matched exactly (after trimming). A query from a
/// station to itself yields a single-station route with zero hops.
///
/// # Errors
///
/// - [`PlanError::StationNotFound`] if either station is unknown; `start`
///   is checked first.
/// - [`PlanError::NoRoute`] if the stations are in disconnected parts of
///   the network.
pub fn shortest_path(network: &Network, start: &str, end: &str) -> Result<Route, PlanError> {
    let from = lookup(network, start)?;
    let to = lookup(network, end)?;

    if from == to {
        return Ok(Route::new(vec![network.station_at(from).name.clone()]));
    }

    let mut parent: Vec<Option<NodeIndex>> = vec![None; network.node_count()];
    let mut visited = vec![false; network.node_count()];
    let mut queue = VecDeque::new();

    visited[from.index()] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        trace!(station = %network.station_at(current).name, "expanding");
        for next in network.neighbor_nodes(current) {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = Some(current);

            if next == to {
                let route = reconstruct(network, &parent, to);
                debug!(from = %start.trim(), to = %end.trim(), hops = route.hops(), "found route");
                return Ok(route);
            }
            queue.push_back(next);
        }
    }

    debug!(from = %start.trim(), to = %end.trim(), "no route");
    Err(PlanError::NoRoute {
        from: network.station_at(from).name.clone(),
        to: network.station_at(to).name.clone(),
    })
}

/// Hop distance from `start` to every station reachable from it.
///
/// The result is indexed in first-seen station order; unreachable stations
/// are `None` and `start` itself is `Some(0)`.
pub fn hop_distances(network: &Network, start: &str) -> Result<Vec<Option<usize>>, PlanError> {
    let from = lookup(network, start)?;
    Ok(distances_from(network, from))
}

pub(crate) fn distances_from(network: &Network, from: NodeIndex) -> Vec<Option<usize>> {
    let mut distance: Vec<Option<usize>> = vec![None; network.node_count()];
    let mut queue = VecDeque::new();

    distance[from.index()] = Some(0);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        let here = distance[current.index()].unwrap_or_default();
        for next in network.neighbor_nodes(current) {
            if distance[next.index()].is_none() {
                distance[next.index()] = Some(here + 1);
                queue.push_back(next);
            }
        }
    }

    distance
}

fn lookup(network: &Network, name: &str) -> Result<NodeIndex, PlanError> {
    network
        .node(name)
        .ok_or_else(|| PlanError::StationNotFound(name.trim().to_string()))
}

/// Walk parent links back from `to` and reverse them into a route.
fn reconstruct(network: &Network, parent: &[Option<NodeIndex>], to: NodeIndex) -> Route {
    let mut nodes = vec![to];
    let mut current = to;
    while let Some(prev) = parent[current.index()] {
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();

    Route::new(
        nodes
            .into_iter()
            .map(|ix| network.station_at(ix).name.clone())
            .collect(),
    )
}
