//! Builds the zone network described by the command line
use std::time::Instant;

use crate::cli::NetworkArgs;
use zonenet_core::graph::{Graph, Weight};

/// Streets and zones first, then removals, then closures
pub fn build(args: &NetworkArgs, default_weight: Weight) -> Graph<String> {
    let start = Instant::now();
    let mut graph = Graph::new();

    for zone in &args.zones {
        graph.add_zone(zone.clone());
    }

    for street in &args.streets {
        let weight = street.weight.map(Weight::new).unwrap_or(default_weight);
        graph.add_street(street.from.clone(), street.to.clone(), weight);
    }

    for zone in &args.removals {
        if !graph.remove_zone(zone) {
            tracing::warn!(zone = %zone, "zone to remove does not exist");
        }
    }

    for pair in &args.closures {
        if graph.close_street(&pair.a, &pair.b) == 0 {
            tracing::warn!(a = %pair.a, b = %pair.b, "no street to close");
        }
    }

    zonenet_core::trace_time!(
        start,
        "build_network",
        zones = graph.zone_count(),
        streets = graph.street_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::{parse_pair, parse_street};

    #[test]
    fn test_build_applies_steps_in_order() {
        let args = NetworkArgs {
            streets: vec![
                parse_street("A:B:2").unwrap(),
                parse_street("B:C").unwrap(),
                parse_street("C:D:4").unwrap(),
            ],
            zones: vec!["Island".to_string()],
            removals: vec!["D".to_string()],
            closures: vec![parse_pair("A:B").unwrap()],
        };

        let graph = build(&args, Weight::new(5.0));

        let zones: Vec<_> = graph.zones().cloned().collect();
        assert_eq!(zones, vec!["Island", "A", "B", "C"]);
        assert!(!graph.has_direct_link(&"A".to_string(), &"B".to_string()));
        let links = graph.links(&"B".to_string()).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].weight.value(), 5.0);
    }

    #[test]
    fn test_build_empty() {
        let graph = build(&NetworkArgs::default(), Weight::DEFAULT);
        assert!(graph.is_empty());
    }
}
