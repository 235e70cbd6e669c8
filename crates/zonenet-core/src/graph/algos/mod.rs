//! Path-finding algorithms over the adjacency store
//!
//! - `bfs`: fewest-hops route, weights ignored
//! - `dijkstra`: lowest-weight route
//! - `shared`: predecessor-chain reconstruction used by both

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_path;
pub use dijkstra::dijkstra_path;
