//! Zone network graph and its queries
//!
//! - Adjacency store with zone/street mutation
//! - Direct-link and degree queries
//! - BFS and Dijkstra shortest routes

pub mod adjacency;
pub mod algos;
pub mod types;

pub use adjacency::Graph;
pub use algos::{bfs_path, dijkstra_path};
pub use types::{Link, Route, Weight, ZoneId};
