//! Route planning errors.
//!
//! Every error is terminal for the query that raised it and leaves the
//! network untouched.

use crate::domain::StationName;

/// Error from planning a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The query names a station that is not in the network
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// Both stations exist but no connections join them
    #[error("no route from {from} to {to}")]
    NoRoute { from: StationName, to: StationName },

    /// An itinerary was requested for a route with no stations
    #[error("route must contain at least one station")]
    EmptyRoute,

    /// Consecutive stations of a route are not adjacent
    #[error("stations {from} and {to} are not connected")]
    NotConnected { from: StationName, to: StationName },
}
