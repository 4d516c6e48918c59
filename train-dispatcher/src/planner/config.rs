//! Planner configuration.

/// Tuning knobs for the route planner.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Stop enumerating once this many routes have been found.
    ///
    /// Exhaustive enumeration can grow combinatorially on dense maps; the
    /// cap bounds that cost at the price of possibly missing better route
    /// sets. `None` enumerates every simple path.
    pub max_routes: Option<usize>,
}

impl PlannerConfig {
    /// A configuration that enumerates at most `limit` routes.
    pub fn with_max_routes(limit: usize) -> Self {
        Self {
            max_routes: Some(limit),
        }
    }
}
