use crate::error::{Result, ZoneNetError};
use crate::graph::algos::shared::{reconstruct, Step};
use crate::graph::types::{Route, Weight, ZoneId};
use crate::graph::Graph;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then
/// by the zone's position in the store)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub distance: Weight,
    pub position: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: Vec<Weight>,
    predecessors: Vec<Option<Step>>,
    settled: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(zone_count: usize, origin: usize) -> Self {
        let mut distances = vec![Weight::INFINITY; zone_count];
        distances[origin] = Weight::ZERO;

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            distance: Weight::ZERO,
            position: origin,
        }));

        Self {
            distances,
            predecessors: vec![None; zone_count],
            settled: vec![false; zone_count],
            heap,
        }
    }

    /// Pop the closest unsettled zone, skipping stale heap entries
    fn next_unsettled(&mut self) -> Option<usize> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.settled[entry.position] {
                continue;
            }
            self.settled[entry.position] = true;
            return Some(entry.position);
        }
        None
    }

    fn relax(&mut self, from: usize, to: usize, weight: Weight) {
        let candidate = self.distances[from] + weight;
        if candidate.total_cmp(&self.distances[to]) == Ordering::Less {
            self.distances[to] = candidate;
            self.predecessors[to] = Some(Step { from, weight });
            self.heap.push(Reverse(HeapEntry {
                distance: candidate,
                position: to,
            }));
        }
    }
}

/// Find the route with the lowest total weight.
///
/// Runs over the whole graph before reconstructing; it does not stop when
/// the destination is settled. Equal distances settle in zone creation
/// order. Weights must be non-negative.
#[tracing::instrument(skip_all, fields(origin = %origin, destination = %destination))]
pub fn dijkstra_path<Z: ZoneId>(
    graph: &Graph<Z>,
    origin: &Z,
    destination: &Z,
) -> Result<Route<Z>> {
    let from = graph
        .position(origin)
        .ok_or_else(|| ZoneNetError::unknown_zone(origin))?;
    let to = graph
        .position(destination)
        .ok_or_else(|| ZoneNetError::unknown_zone(destination))?;

    let mut state = DijkstraState::new(graph.zone_count(), from);
    let mut settled = 0usize;

    while let Some(current) = state.next_unsettled() {
        settled += 1;
        for link in graph.links_at(current) {
            let Some(neighbor) = graph.position(&link.to) else {
                continue;
            };
            if !state.settled[neighbor] {
                state.relax(current, neighbor, link.weight);
            }
        }
    }

    tracing::trace!(settled, zones = graph.zone_count(), "dijkstra finished");

    let (positions, weight) = reconstruct(from, to, &state.predecessors)
        .ok_or_else(|| ZoneNetError::unreachable(origin, destination))?;
    let zones = positions
        .into_iter()
        .map(|position| graph.zone_at(position).clone())
        .collect();

    Ok(Route::new(zones, weight))
}

#[cfg(test)]
mod tests;
