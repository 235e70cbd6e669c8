//! Zonenet Core Library
//!
//! In-memory graph engine for networks of zones joined by weighted,
//! bidirectional streets, plus the error, config and logging plumbing
//! shared with the `zonenet` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use error::{Result, ZoneNetError};
pub use graph::{Graph, Link, Route, Weight, ZoneId};
