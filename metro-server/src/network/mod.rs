//! Network construction and read-only access.
//!
//! Stations are nodes and consecutive same-line station pairs are edges.
//! The network is built once from a line table and is immutable afterwards,
//! so the visualisation layer and the route planner can share it freely.

mod builder;
mod graph;

pub use builder::{BuildError, NetworkBuilder};
pub use graph::{Connection, Network, Station};
