use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Identifier of a zone in the network.
///
/// Anything cloneable, hashable and printable qualifies: string labels,
/// numeric ids, small newtypes.
pub trait ZoneId: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> ZoneId for T {}

/// Represents the cost of travelling along a street.
///
/// Weights are expected to be non-negative; the engine does not check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const DEFAULT: Weight = Weight(1.0);
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order over weights, used by the priority queue
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(f64::from(weight))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One direction of a street, stored in the adjacency entry of its source zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link<Z> {
    pub to: Z,
    pub weight: Weight,
}

/// A successful path query: the zones visited in order, origin first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<Z> {
    pub zones: Vec<Z>,
    pub hops: usize,
    pub weight: Weight,
}

impl<Z> Route<Z> {
    pub fn new(zones: Vec<Z>, weight: Weight) -> Self {
        let hops = zones.len().saturating_sub(1);
        Route {
            zones,
            hops,
            weight,
        }
    }

    pub fn origin(&self) -> Option<&Z> {
        self.zones.first()
    }

    pub fn destination(&self) -> Option<&Z> {
        self.zones.last()
    }
}
