//! Candidate generation and ranking.

use crate::domain::Route;

use super::combos::Combo;

/// A prefix of some combo: the route set actually handed to allocation.
///
/// Because combo members are sorted shortest-first, a prefix of length `k`
/// is the combo's `k` shortest routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    routes: Vec<Route>,
}

impl Candidate {
    pub(crate) fn new(routes: Vec<Route>) -> Self {
        debug_assert!(!routes.is_empty());
        Candidate { routes }
    }

    /// The candidate's routes, shortest first.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Hop count of the candidate's shortest route.
    fn shortest_hops(&self) -> usize {
        self.routes.first().map_or(0, Route::hop_count)
    }
}

/// Expand each combo into all its prefixes and order the lot.
///
/// Prefixes are generated for `k` from 1 up to the largest combo size, in
/// combo-emission order within each `k`. The final ordering is a stable
/// sort ascending by the hop count of each candidate's shortest route, so
/// ties keep the `(k, combo)` generation order and smaller prefixes rank
/// ahead of larger ones. This is a heuristic proxy for "fewest turns";
/// the allocator settles it exactly.
pub fn rank_candidates(combos: &[Combo]) -> Vec<Candidate> {
    let max_size = combos.iter().map(Combo::len).max().unwrap_or(0);
    let mut candidates = Vec::new();

    for k in 1..=max_size {
        for combo in combos {
            if combo.len() >= k {
                candidates.push(Candidate::new(combo.routes()[..k].to_vec()));
            }
        }
    }

    candidates.sort_by_key(Candidate::shortest_hops);
    candidates
}
