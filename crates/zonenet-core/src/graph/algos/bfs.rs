use std::collections::VecDeque;

use crate::error::{Result, ZoneNetError};
use crate::graph::algos::shared::{reconstruct, Step};
use crate::graph::types::{Route, ZoneId};
use crate::graph::Graph;

/// Find the route with the fewest hops, ignoring weights.
///
/// Zones are expanded in link insertion order and the first discovery of a
/// zone fixes its predecessor, so among equal-hop routes the one found first
/// in that order wins.
#[tracing::instrument(skip_all, fields(origin = %origin, destination = %destination))]
pub fn bfs_path<Z: ZoneId>(graph: &Graph<Z>, origin: &Z, destination: &Z) -> Result<Route<Z>> {
    let from = graph
        .position(origin)
        .ok_or_else(|| ZoneNetError::unknown_zone(origin))?;
    let to = graph
        .position(destination)
        .ok_or_else(|| ZoneNetError::unknown_zone(destination))?;

    let mut visited = vec![false; graph.zone_count()];
    let mut predecessors: Vec<Option<Step>> = vec![None; graph.zone_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    queue.push_back(from);
    visited[from] = true;

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == to {
            found = true;
            break;
        }

        for link in graph.links_at(current) {
            let Some(neighbor) = graph.position(&link.to) else {
                continue;
            };
            if visited[neighbor] {
                continue;
            }

            visited[neighbor] = true;
            predecessors[neighbor] = Some(Step {
                from: current,
                weight: link.weight,
            });
            queue.push_back(neighbor);
        }
    }

    if !found {
        tracing::debug!("destination not reached");
        return Err(ZoneNetError::unreachable(origin, destination));
    }

    let (positions, weight) = reconstruct(from, to, &predecessors)
        .ok_or_else(|| ZoneNetError::unreachable(origin, destination))?;
    let zones = positions
        .into_iter()
        .map(|position| graph.zone_at(position).clone())
        .collect();

    Ok(Route::new(zones, weight))
}
