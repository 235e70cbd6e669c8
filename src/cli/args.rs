use clap::{Args, ValueEnum};

use super::parse::{parse_pair, parse_street, StreetSpec, ZonePair};

/// The zone network a query runs against.
///
/// Streets and zones are added first, then removals, then closures.
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Street as FROM:TO or FROM:TO:WEIGHT (can be repeated)
    #[arg(long = "street", short = 's', value_parser = parse_street, action = clap::ArgAction::Append)]
    pub streets: Vec<StreetSpec>,

    /// Zone with no streets (can be repeated)
    #[arg(long = "zone", short = 'z', action = clap::ArgAction::Append)]
    pub zones: Vec<String>,

    /// Remove a zone after building (can be repeated)
    #[arg(long = "remove", action = clap::ArgAction::Append)]
    pub removals: Vec<String>,

    /// Close every street between A:B after building (can be repeated)
    #[arg(long = "close", value_parser = parse_pair, action = clap::ArgAction::Append)]
    pub closures: Vec<ZonePair>,
}

/// Path-finding algorithm
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Fewest hops, weights ignored
    Bfs,
    /// Lowest total weight
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}
