//! Interior-disjoint route sets.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Route, StationName};

/// A set of routes whose interiors are pairwise disjoint.
///
/// All member routes can be run simultaneously without two trains meeting
/// at an intermediate station. Members are sorted ascending by hop count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    routes: Vec<Route>,
}

impl Combo {
    /// Member routes, shortest first.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of member routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// A combo always has at least its anchor route.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Greedily cover the route list with maximal interior-disjoint sets.
///
/// Walks the routes in enumeration order; each still-unclaimed route
/// anchors a new combo, which then absorbs every later unclaimed route
/// whose interior avoids the stations the combo already occupies. Every
/// input route ends up in exactly one combo.
pub fn build_combos(routes: &[Route]) -> Vec<Combo> {
    let mut claimed = vec![false; routes.len()];
    let mut combos = Vec::new();

    for anchor in 0..routes.len() {
        if claimed[anchor] {
            continue;
        }
        claimed[anchor] = true;
        let mut occupied: HashSet<&StationName> = routes[anchor].interior().iter().collect();
        let mut members = vec![routes[anchor].clone()];

        for (idx, candidate) in routes.iter().enumerate() {
            if claimed[idx] {
                continue;
            }
            if candidate.interior().iter().any(|s| occupied.contains(s)) {
                continue;
            }
            claimed[idx] = true;
            occupied.extend(candidate.interior());
            members.push(candidate.clone());
        }

        // Stable: equal-length members keep their enumeration order.
        members.sort_by_key(Route::hop_count);
        combos.push(Combo { routes: members });
    }

    debug!(combos = combos.len(), routes = routes.len(), "combos built");
    combos
}
