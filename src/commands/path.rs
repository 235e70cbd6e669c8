//! Path command
use crate::cli::Algorithm;
use crate::commands::{hop_label, route_line, Context};
use zonenet_core::error::Result;
use zonenet_core::format::OutputFormat;
use zonenet_core::graph::Graph;

/// Execute the path command
pub fn execute(
    ctx: &Context,
    graph: &Graph<String>,
    from: &str,
    to: &str,
    algorithm: Algorithm,
) -> Result<()> {
    let from = from.to_string();
    let to = to.to_string();

    let route = match algorithm {
        Algorithm::Bfs => graph.bfs_path(&from, &to)?,
        Algorithm::Dijkstra => graph.dijkstra_path(&from, &to)?,
    };

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "algorithm": algorithm.as_str(),
                "route": route,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", route_line(&route));
            if !ctx.quiet {
                println!(
                    "Path length: {} {}, weight {}",
                    route.hops,
                    hop_label(route.hops),
                    route.weight
                );
            }
        }
    }

    Ok(())
}
