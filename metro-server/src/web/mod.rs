//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for planning routes, searching stations, and
//! reading the network structure for map rendering.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
