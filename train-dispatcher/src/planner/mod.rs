//! The route planning pipeline.
//!
//! Turns a network and a pair of endpoints into an allocation plan for a
//! train budget, in four stages:
//!
//! 1. [`explore_routes`] enumerates every simple path from source to
//!    destination (breadth-first over partial paths).
//! 2. [`build_combos`] greedily covers the route list with maximal sets of
//!    interior-disjoint routes, which can all run simultaneously.
//! 3. [`rank_candidates`] expands each combo into its length-prefixes and
//!    orders all of them by a shortest-route-first heuristic.
//! 4. [`allocate`] balances the train budget over each candidate and keeps
//!    the one that finishes in the fewest turns.

mod allocate;
mod combos;
mod config;
mod error;
mod explore;
mod rank;

pub use allocate::{AllocationPlan, allocate};
pub use combos::{Combo, build_combos};
pub use config::PlannerConfig;
pub use error::PlanError;
pub use explore::explore_routes;
pub use rank::{Candidate, rank_candidates};

use crate::domain::StationName;
use crate::network::Network;

/// Run the whole pipeline: explore, combine, rank, allocate.
pub fn plan(
    network: &Network,
    source: &StationName,
    destination: &StationName,
    train_count: usize,
    config: &PlannerConfig,
) -> Result<AllocationPlan, PlanError> {
    if train_count == 0 {
        return Err(PlanError::EmptyTrainBudget);
    }
    let routes = explore_routes(network, source, destination, config)?;
    let combos = build_combos(&routes);
    let candidates = rank_candidates(&combos);
    allocate(train_count, &candidates)
}
