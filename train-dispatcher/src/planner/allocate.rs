//! Train allocation over ranked candidates.
//!
//! For each candidate, the train budget is balanced greedily across its
//! routes; the candidate finishing in the fewest turns wins, first one on
//! ties. Only the winner is turned into an [`AllocationPlan`]; nothing is
//! shared between candidate evaluations.

use tracing::debug;

use crate::domain::Route;

use super::error::PlanError;
use super::rank::Candidate;

/// The chosen routes, how many trains each dispatches, and the turn count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    routes: Vec<Route>,
    dispatches: Vec<usize>,
    total_turns: usize,
}

impl AllocationPlan {
    /// The winning candidate's routes, shortest first.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Trains to dispatch on each route, indexed like [`routes`].
    ///
    /// [`routes`]: AllocationPlan::routes
    pub fn dispatches(&self) -> &[usize] {
        &self.dispatches
    }

    /// Turns until the last train reaches the destination.
    pub fn total_turns(&self) -> usize {
        self.total_turns
    }
}

/// Distribute `train_count` trains over the best of the ranked candidates.
///
/// Each candidate's per-route loads are seeded with the route's
/// turns-after-dispatch value; the budget is then placed one train at a
/// time on the route with the minimum load, ties to the lowest index. A
/// route's final load is the turn on which its last train arrives, so the
/// candidate's turn count is read from index 0: with members sorted
/// shortest-first, route 0 takes the first train, and the lowest-index
/// tie-break never leaves any route that received a train above route 0's
/// final load. The maximum over *all* routes would overstate the count
/// whenever a long route ends up with no trains at all.
pub fn allocate(train_count: usize, candidates: &[Candidate]) -> Result<AllocationPlan, PlanError> {
    if train_count == 0 {
        return Err(PlanError::EmptyTrainBudget);
    }

    let mut best: Option<(usize, &Candidate, Vec<usize>)> = None;

    for candidate in candidates {
        let mut loads: Vec<usize> = candidate
            .routes()
            .iter()
            .map(Route::turns_after_dispatch)
            .collect();
        for _ in 0..train_count {
            let idx = min_load_index(&loads);
            loads[idx] += 1;
        }

        let Some(&total_turns) = loads.first() else {
            continue;
        };
        debug_assert!(
            loads
                .iter()
                .zip(candidate.routes())
                .all(|(&load, route)| load <= total_turns
                    || load == route.turns_after_dispatch()),
            "a loaded route exceeded the index-0 turn count"
        );

        if best
            .as_ref()
            .is_none_or(|&(best_turns, _, _)| total_turns < best_turns)
        {
            best = Some((total_turns, candidate, loads));
        }
    }

    let Some((total_turns, winner, loads)) = best else {
        return Err(PlanError::NoCandidates);
    };

    // Turn absolute loads into dispatch counts for the simulator. This is
    // a local transformation of the winning plan only.
    let dispatches: Vec<usize> = loads
        .iter()
        .zip(winner.routes())
        .map(|(&load, route)| load - route.turns_after_dispatch())
        .collect();

    debug!(
        total_turns,
        routes = winner.routes().len(),
        "allocation selected"
    );

    Ok(AllocationPlan {
        routes: winner.routes().to_vec(),
        dispatches,
        total_turns,
    })
}

/// Index of the smallest load, lowest index on ties.
fn min_load_index(loads: &[usize]) -> usize {
    let mut min_idx = 0;
    for (idx, &load) in loads.iter().enumerate().skip(1) {
        if load < loads[min_idx] {
            min_idx = idx;
        }
    }
    min_idx
}
