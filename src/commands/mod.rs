//! CLI commands for zonenet

pub mod demo;
pub mod dispatch;
pub mod network;
pub mod path;
pub mod zones;

use zonenet_core::format::OutputFormat;
use zonenet_core::graph::{Route, Weight};

/// Settings resolved from flags and the config file
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub default_weight: Weight,
}

/// `A -> B -> C`
pub fn route_line(route: &Route<String>) -> String {
    route.zones.join(" -> ")
}

pub fn hop_label(hops: usize) -> &'static str {
    if hops == 1 {
        "hop"
    } else {
        "hops"
    }
}
