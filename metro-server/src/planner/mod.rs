//! Route planner using breadth-first search.
//!
//! This module answers: "what is the quickest way, in stops, from this
//! station to that one, and where do I change lines?"
//!
//! All operations are pure functions of an immutable [`Network`] and the
//! query, so any number of queries can run against one network at once.
//!
//! [`Network`]: crate::network::Network

mod bfs;
mod config;
mod error;
mod itinerary;
mod search;


pub use bfs::{hop_distances, shortest_path};
pub(crate) use bfs::distances_from;
pub use config::PlannerConfig;
pub use error::PlanError;
pub use itinerary::{Instruction, Itinerary, Ride, Route, build_itinerary};
pub use search::Planner;
