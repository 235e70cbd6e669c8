//! Command dispatch logic for zonenet
use crate::cli::{Cli, Commands};
use crate::commands::{self, Context};
use zonenet_core::error::Result;

pub fn run(cli: &Cli, ctx: &Context) -> Result<()> {
    match &cli.command {
        Commands::Demo => commands::demo::execute(ctx),

        Commands::Path {
            from,
            to,
            algorithm,
            network,
        } => {
            let graph = commands::network::build(network, ctx.default_weight);
            commands::path::execute(ctx, &graph, from, to, *algorithm)
        }

        Commands::Linked { a, b, network } => {
            let graph = commands::network::build(network, ctx.default_weight);
            commands::zones::execute_linked(ctx, &graph, a, b)
        }

        Commands::Hub { network } => {
            let graph = commands::network::build(network, ctx.default_weight);
            commands::zones::execute_hub(ctx, &graph)
        }

        Commands::Zones { network } => {
            let graph = commands::network::build(network, ctx.default_weight);
            commands::zones::execute_list(ctx, &graph)
        }
    }
}
