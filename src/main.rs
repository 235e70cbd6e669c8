//! Zonenet - zone network route finder
//!
//! Builds a network of zones from command-line streets and answers
//! shortest-route, direct-link and hub queries over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use commands::Context;
use zonenet_core::config::ZoneNetConfig;
use zonenet_core::error::{ExitCode as ZoneNetExitCode, ZoneNetError};
use zonenet_core::format::OutputFormat;
use zonenet_core::graph::Weight;
use zonenet_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // If the user asked for JSON, parse failures get the JSON error envelope too
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => ZoneNetError::UsageError(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = match ZoneNetConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e, cli.format.unwrap_or_default(), cli.quiet),
    };

    let log_level = cli.log_level.as_deref().or(config.log_level.as_deref());
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let ctx = Context {
        format: cli.format.unwrap_or(config.format),
        quiet: cli.quiet,
        default_weight: Weight::new(config.default_weight),
    };

    match commands::dispatch::run(&cli, &ctx) {
        Ok(()) => {
            zonenet_core::trace_time!(start, "total");
            ExitCode::from(ZoneNetExitCode::Success as u8)
        }
        Err(e) => report(&e, ctx.format, ctx.quiet),
    }
}

fn report(error: &ZoneNetError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }

    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
