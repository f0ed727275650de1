//! Query entry point combining path search and itinerary building.

use tracing::debug;

use crate::network::{Network, Station};

use super::bfs::shortest_path;
use super::config::PlannerConfig;
use super::error::PlanError;
use super::itinerary::{Itinerary, Route, build_itinerary};

/// Route planner over a shared network.
///
/// Holds only borrowed, read-only state, so a `Planner` can be created
/// per request at no cost.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// The network this planner searches.
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Shortest route between two stations given as user input.
    ///
    /// Names are resolved with [`Network::resolve`], so casing may differ
    /// from the canonical station name.
    pub fn route(&self, from: &str, to: &str) -> Result<Route, PlanError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        shortest_path(self.network, from, to)
    }

    /// Plan a journey: shortest route plus ride instructions.
    pub fn plan(&self, from: &str, to: &str) -> Result<Itinerary, PlanError> {
        let route = self.route(from, to)?;
        let itinerary = build_itinerary(self.network, &route)?;

        debug!(
            from = %from.trim(),
            to = %to.trim(),
            hops = itinerary.hops,
            transfers = itinerary.transfers(),
            "planned route"
        );

        Ok(itinerary)
    }

    /// Stations whose names contain `query`, for station pickers.
    pub fn search_stations(&self, query: &str, limit: Option<usize>) -> Vec<&'a Station> {
        self.network
            .search(query, self.config.effective_limit(limit))
    }

    fn resolve(&self, input: &str) -> Result<&'a str, PlanError> {
        self.network
            .resolve(input)
            .map(|name| name.as_str())
            .ok_or_else(|| PlanError::StationNotFound(input.trim().to_string()))
    }
}
