//! Zone queries: direct links, hub, zone listing
use crate::commands::Context;
use zonenet_core::error::Result;
use zonenet_core::format::OutputFormat;
use zonenet_core::graph::Graph;

/// Execute the linked command
pub fn execute_linked(ctx: &Context, graph: &Graph<String>, a: &str, b: &str) -> Result<()> {
    let linked = graph.has_direct_link(&a.to_string(), &b.to_string());

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "a": a, "b": b, "linked": linked });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "Direct link {}-{}: {}",
                a,
                b,
                if linked { "yes" } else { "no" }
            );
        }
    }

    Ok(())
}

/// Execute the hub command
pub fn execute_hub(ctx: &Context, graph: &Graph<String>) -> Result<()> {
    let hub = graph.most_connected_zone();

    match ctx.format {
        OutputFormat::Json => {
            let output = match hub {
                Some((zone, links)) => serde_json::json!({ "zone": zone, "links": links }),
                None => serde_json::json!({ "zone": null, "links": 0 }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match hub {
            Some((zone, links)) => println!("Most connected zone: {} ({} links)", zone, links),
            None => {
                if !ctx.quiet {
                    println!("No zones");
                }
            }
        },
    }

    Ok(())
}

/// Execute the zones command
pub fn execute_list(ctx: &Context, graph: &Graph<String>) -> Result<()> {
    let rows: Vec<(&String, usize)> = graph
        .zones()
        .map(|zone| (zone, graph.degree(zone).unwrap_or(0)))
        .collect();

    match ctx.format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|(zone, links)| serde_json::json!({ "zone": zone, "links": links }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (zone, links) in &rows {
                println!("{}\t{}", zone, links);
            }
            if !ctx.quiet {
                println!(
                    "{} zones, {} streets",
                    graph.zone_count(),
                    graph.street_count()
                );
            }
        }
    }

    Ok(())
}
