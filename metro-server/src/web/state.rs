//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::{Planner, PlannerConfig};
use crate::stats::NetworkStats;

/// Shared application state.
///
/// The network is built once at startup and only ever read, so handlers
/// share it through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// The metro network
    pub network: Arc<Network>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,

    /// Statistics, computed once when the state is created
    pub stats: Arc<NetworkStats>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: PlannerConfig) -> Self {
        let stats = NetworkStats::compute(&network);
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            stats: Arc::new(stats),
        }
    }

    /// A planner borrowing this state.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&self.network, &self.config)
    }
}
