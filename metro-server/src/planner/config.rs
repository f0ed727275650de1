//! Planner configuration.

/// Configuration parameters for route planning and station search.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of station search results returned when no limit is given.
    pub search_limit: usize,

    /// Upper bound on any requested search limit.
    pub max_search_limit: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(search_limit: usize, max_search_limit: usize) -> Self {
        Self {
            search_limit,
            max_search_limit,
        }
    }

    /// Clamp a requested search limit to the configured bounds.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.search_limit)
            .min(self.max_search_limit)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search_limit: 10,
            max_search_limit: 50,
        }
    }
}
