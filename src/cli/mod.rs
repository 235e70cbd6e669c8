//! CLI argument parsing for zonenet
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use zonenet_core::format::OutputFormat;

pub use args::{Algorithm, NetworkArgs};
use parse::parse_format;

/// Zonenet - shortest routes and connectivity over a network of zones
#[derive(Parser, Debug)]
#[command(name = "zonenet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json (defaults to the config file, then human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. info, debug, zonenet_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file path
    #[arg(long, global = true, env = "ZONENET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the five-zone town walkthrough
    Demo,

    /// Find a route between two zones
    Path {
        /// Origin zone
        from: String,

        /// Destination zone
        to: String,

        /// Path-finding algorithm
        #[arg(long, short, value_enum, default_value = "dijkstra")]
        algorithm: Algorithm,

        #[command(flatten)]
        network: NetworkArgs,
    },

    /// Check whether two zones share a street
    Linked {
        /// First zone
        a: String,

        /// Second zone
        b: String,

        #[command(flatten)]
        network: NetworkArgs,
    },

    /// Show the zone with the most streets
    Hub {
        #[command(flatten)]
        network: NetworkArgs,
    },

    /// List zones with their street counts
    Zones {
        #[command(flatten)]
        network: NetworkArgs,
    },
}
