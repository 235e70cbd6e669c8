//! Demo command: the five-zone town walkthrough
use serde::Serialize;

use crate::commands::{route_line, Context};
use zonenet_core::error::{Result, ZoneNetError};
use zonenet_core::format::OutputFormat;
use zonenet_core::graph::{Graph, Route};

const TOWN: [(&str, &str, f64); 5] = [
    ("A", "B", 2.0),
    ("A", "C", 4.0),
    ("B", "C", 1.0),
    ("C", "D", 3.0),
    ("D", "E", 1.0),
];

#[derive(Debug, Serialize)]
struct Hub {
    zone: String,
    links: usize,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    bfs: Route<String>,
    dijkstra: Route<String>,
    most_connected: Option<Hub>,
    direct_link_a_c: bool,
    closed: [&'static str; 2],
    dijkstra_after_closing: Option<Route<String>>,
}

fn town() -> Graph<String> {
    Graph::from_streets(
        TOWN.iter()
            .map(|&(a, b, w)| (a.to_string(), b.to_string(), w)),
    )
}

fn run_demo() -> Result<DemoReport> {
    let a = "A".to_string();
    let c = "C".to_string();
    let d = "D".to_string();
    let e = "E".to_string();

    let mut graph = town();

    let bfs = graph.bfs_path(&a, &e)?;
    let dijkstra = graph.dijkstra_path(&a, &e)?;
    let most_connected = graph.most_connected_zone().map(|(zone, links)| Hub {
        zone: zone.clone(),
        links,
    });
    let direct_link_a_c = graph.has_direct_link(&a, &c);

    graph.close_street(&c, &d);
    let dijkstra_after_closing = match graph.dijkstra_path(&a, &e) {
        Ok(route) => Some(route),
        Err(ZoneNetError::Unreachable { .. }) => None,
        Err(err) => return Err(err),
    };

    Ok(DemoReport {
        bfs,
        dijkstra,
        most_connected,
        direct_link_a_c,
        closed: ["C", "D"],
        dijkstra_after_closing,
    })
}

/// Execute the demo command
pub fn execute(ctx: &Context) -> Result<()> {
    let report = run_demo()?;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("BFS route A -> E: {}", route_line(&report.bfs));
            println!(
                "Dijkstra route A -> E: {} (weight {})",
                route_line(&report.dijkstra),
                report.dijkstra.weight
            );
            match &report.most_connected {
                Some(hub) => println!("Most connected zone: {} ({} links)", hub.zone, hub.links),
                None => println!("Most connected zone: none"),
            }
            println!(
                "Direct link A-C: {}",
                if report.direct_link_a_c { "yes" } else { "no" }
            );
            match &report.dijkstra_after_closing {
                Some(route) => println!(
                    "After closing C-D, Dijkstra route A -> E: {} (weight {})",
                    route_line(route),
                    route.weight
                ),
                None => println!("After closing C-D, Dijkstra route A -> E: no route"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report() {
        let report = run_demo().unwrap();
        assert_eq!(report.bfs.zones, vec!["A", "C", "D", "E"]);
        assert_eq!(report.dijkstra.zones, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(report.dijkstra.weight.value(), 7.0);

        let hub = report.most_connected.unwrap();
        assert_eq!(hub.zone, "C");
        assert_eq!(hub.links, 3);

        assert!(report.direct_link_a_c);
        assert!(report.dijkstra_after_closing.is_none());
    }
}
