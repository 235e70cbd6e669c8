//! Adjacency store for the zone network
//!
//! Zones are kept in creation order. That order is what makes the
//! degree query and Dijkstra's tie-breaking deterministic.

use std::collections::HashMap;

use crate::error::Result;
use crate::graph::types::{Link, Route, Weight, ZoneId};

#[derive(Debug, Clone)]
struct Entry<Z> {
    zone: Z,
    links: Vec<Link<Z>>,
}

/// An undirected, weighted multigraph of zones.
///
/// Every street is stored as two [`Link`]s, one under each endpoint.
#[derive(Debug, Clone)]
pub struct Graph<Z> {
    entries: Vec<Entry<Z>>,
    positions: HashMap<Z, usize>,
}

impl<Z: ZoneId> Default for Graph<Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Z: ZoneId> Graph<Z> {
    pub fn new() -> Self {
        Graph {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Builds a graph from `(a, b, weight)` streets, in the given order
    pub fn from_streets<I, W>(streets: I) -> Self
    where
        I: IntoIterator<Item = (Z, Z, W)>,
        W: Into<Weight>,
    {
        let mut graph = Graph::new();
        for (a, b, weight) in streets {
            graph.add_street(a, b, weight);
        }
        graph
    }

    /// Adds a zone with no streets. Re-adding an existing zone changes nothing.
    pub fn add_zone(&mut self, zone: Z) {
        self.ensure_zone(zone);
    }

    fn ensure_zone(&mut self, zone: Z) -> usize {
        if let Some(&position) = self.positions.get(&zone) {
            return position;
        }

        let position = self.entries.len();
        tracing::trace!(zone = %zone, position, "zone created");
        self.positions.insert(zone.clone(), position);
        self.entries.push(Entry {
            zone,
            links: Vec::new(),
        });
        position
    }

    /// Adds a street between `a` and `b`, creating either zone if needed.
    ///
    /// Adding the same pair again creates a parallel street.
    pub fn add_street(&mut self, a: Z, b: Z, weight: impl Into<Weight>) {
        let weight = weight.into();
        let a_pos = self.ensure_zone(a.clone());
        let b_pos = self.ensure_zone(b.clone());

        tracing::trace!(from = %a, to = %b, weight = %weight, "street added");
        self.entries[a_pos].links.push(Link { to: b, weight });
        self.entries[b_pos].links.push(Link { to: a, weight });
    }

    /// Adds a street with the default weight of 1
    pub fn add_street_default(&mut self, a: Z, b: Z) {
        self.add_street(a, b, Weight::DEFAULT);
    }

    /// Removes a zone and every link pointing at it.
    ///
    /// Returns `false` if the zone did not exist.
    pub fn remove_zone(&mut self, zone: &Z) -> bool {
        let Some(position) = self.positions.remove(zone) else {
            return false;
        };

        self.entries.remove(position);
        for entry in &self.entries[position..] {
            if let Some(slot) = self.positions.get_mut(&entry.zone) {
                *slot -= 1;
            }
        }

        let mut swept = 0;
        for entry in &mut self.entries {
            let before = entry.links.len();
            entry.links.retain(|link| link.to != *zone);
            swept += before - entry.links.len();
        }

        tracing::debug!(zone = %zone, swept, "zone removed");
        true
    }

    /// Closes every street between `a` and `b`, parallel ones included.
    ///
    /// Returns the number of streets closed; unknown zones close nothing.
    pub fn close_street(&mut self, a: &Z, b: &Z) -> usize {
        let closed = match self.positions.get(a) {
            Some(&position) => {
                let links = &mut self.entries[position].links;
                let before = links.len();
                links.retain(|link| link.to != *b);
                before - links.len()
            }
            None => 0,
        };

        // A self-loop lives twice in the same entry and was already swept
        if a != b {
            if let Some(&position) = self.positions.get(b) {
                self.entries[position].links.retain(|link| link.to != *a);
            }
        }

        let streets = if a == b { closed / 2 } else { closed };
        tracing::debug!(from = %a, to = %b, streets, "street closed");
        streets
    }

    /// True if `a` has at least one link to `b`; false if `a` is unknown
    pub fn has_direct_link(&self, a: &Z, b: &Z) -> bool {
        self.links(a)
            .is_some_and(|links| links.iter().any(|link| link.to == *b))
    }

    /// The zone with the most stored links and its link count.
    ///
    /// Parallel streets count individually; ties go to the zone created first.
    pub fn most_connected_zone(&self) -> Option<(&Z, usize)> {
        let mut best: Option<(&Z, usize)> = None;
        for entry in &self.entries {
            let degree = entry.links.len();
            if best.is_none_or(|(_, max)| degree > max) {
                best = Some((&entry.zone, degree));
            }
        }
        best
    }

    /// Shortest route by number of hops
    pub fn bfs_path(&self, origin: &Z, destination: &Z) -> Result<Route<Z>> {
        crate::graph::algos::bfs_path(self, origin, destination)
    }

    /// Route with the lowest total weight
    pub fn dijkstra_path(&self, origin: &Z, destination: &Z) -> Result<Route<Z>> {
        crate::graph::algos::dijkstra_path(self, origin, destination)
    }

    pub fn contains_zone(&self, zone: &Z) -> bool {
        self.positions.contains_key(zone)
    }

    pub fn zone_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of undirected streets (each is stored as two links)
    pub fn street_count(&self) -> usize {
        self.entries.iter().map(|e| e.links.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zones in creation order
    pub fn zones(&self) -> impl Iterator<Item = &Z> {
        self.entries.iter().map(|e| &e.zone)
    }

    /// Outgoing links of a zone, in insertion order
    pub fn links(&self, zone: &Z) -> Option<&[Link<Z>]> {
        self.position(zone)
            .map(|position| self.entries[position].links.as_slice())
    }

    pub fn degree(&self, zone: &Z) -> Option<usize> {
        self.links(zone).map(<[Link<Z>]>::len)
    }

    pub(crate) fn position(&self, zone: &Z) -> Option<usize> {
        self.positions.get(zone).copied()
    }

    pub(crate) fn zone_at(&self, position: usize) -> &Z {
        &self.entries[position].zone
    }

    pub(crate) fn links_at(&self, position: usize) -> &[Link<Z>] {
        &self.entries[position].links
    }
}
