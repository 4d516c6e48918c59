//! Exhaustive route enumeration.
//!
//! Breadth-first search over *partial paths*, not over stations: the
//! frontier holds station sequences, and every queued sequence is extended
//! by each unvisited neighbor of its last station. This enumerates every
//! simple path between the endpoints, not just the shortest ones, at a
//! cost that can grow combinatorially with map density.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::{Route, StationName};
use crate::network::Network;

use super::config::PlannerConfig;
use super::error::PlanError;

/// Enumerate every simple path from `source` to `destination`.
///
/// Routes come out in non-decreasing hop-count order because the frontier
/// is expanded level by level; ties keep the order in which extensions were
/// queued, which follows the network's neighbor order.
pub fn explore_routes(
    network: &Network,
    source: &StationName,
    destination: &StationName,
    config: &PlannerConfig,
) -> Result<Vec<Route>, PlanError> {
    if source == destination {
        return Err(PlanError::SameStation);
    }
    for endpoint in [source, destination] {
        if !network.contains(endpoint.as_str()) {
            return Err(PlanError::UnknownStation(endpoint.clone()));
        }
    }

    let mut frontier: VecDeque<Vec<StationName>> = VecDeque::new();
    frontier.push_back(vec![source.clone()]);
    let mut routes = Vec::new();

    while let Some(path) = frontier.pop_front() {
        let Some(last) = path.last() else { continue };

        if last == destination {
            // A queued path never repeats a station and is at least two
            // long here, so construction cannot fail.
            if let Ok(route) = Route::new(path) {
                routes.push(route);
            }
            if config.max_routes.is_some_and(|cap| routes.len() >= cap) {
                debug!(cap = routes.len(), "route cap reached, stopping search");
                break;
            }
            continue;
        }

        for neighbor in network.neighbors(last.as_str()) {
            if !path.contains(neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                frontier.push_back(extended);
            }
        }
    }

    if routes.is_empty() {
        return Err(PlanError::NoRouteFound {
            origin: source.clone(),
            destination: destination.clone(),
        });
    }

    debug!(routes = routes.len(), "route enumeration complete");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn network(stations: &[&str], links: &[(&str, &str)]) -> Network {
        let mut network = Network::new();
        for station in stations {
            network.add_station(name(station));
        }
        for (a, b) in links {
            network.add_link(name(a), name(b)).unwrap();
        }
        network
    }

    fn explore(network: &Network, source: &str, destination: &str) -> Result<Vec<Route>, PlanError> {
        explore_routes(
            network,
            &name(source),
            &name(destination),
            &PlannerConfig::default(),
        )
    }

    #[test]
    fn same_station_is_rejected() {
        let network = network(&["part"], &[]);
        assert_eq!(explore(&network, "part", "part"), Err(PlanError::SameStation));
    }

    #[test]
    fn unknown_source_is_rejected() {
        let network = network(&["part"], &[]);
        assert_eq!(
            explore(&network, "beethoven", "part"),
            Err(PlanError::UnknownStation(name("beethoven")))
        );
    }

    #[test]
    fn unknown_destination_is_rejected() {
        let network = network(&["beethoven"], &[]);
        assert_eq!(
            explore(&network, "beethoven", "part"),
            Err(PlanError::UnknownStation(name("part")))
        );
    }

    #[test]
    fn disconnected_endpoints_find_no_route() {
        let network = network(&["beethoven", "part"], &[]);
        assert_eq!(
            explore(&network, "beethoven", "part"),
            Err(PlanError::NoRouteFound {
                origin: name("beethoven"),
                destination: name("part"),
            })
        );
    }

    #[test]
    fn direct_route() {
        let network = network(&["beethoven", "part"], &[("beethoven", "part")]);
        let routes = explore(&network, "beethoven", "part").unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].stations(), &[name("beethoven"), name("part")]);
    }

    #[test]
    fn route_with_intermediate_station() {
        let network = network(
            &["beethoven", "mozart", "part"],
            &[("beethoven", "mozart"), ("mozart", "part")],
        );
        let routes = explore(&network, "beethoven", "part").unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(
            routes[0].stations(),
            &[name("beethoven"), name("mozart"), name("part")]
        );
    }

    #[test]
    fn multiple_routes_shortest_first() {
        // Direct link plus a detour through mozart.
        let network = network(
            &["beethoven", "mozart", "part"],
            &[("beethoven", "part"), ("beethoven", "mozart"), ("mozart", "part")],
        );
        let routes = explore(&network, "beethoven", "part").unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].hop_count(), 1);
        assert_eq!(routes[1].hop_count(), 2);
    }

    #[test]
    fn enumeration_is_exhaustive_on_a_diamond() {
        let network = network(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("b", "c")],
        );
        let routes = explore(&network, "a", "d").unwrap();
        // a-b-d, a-c-d, a-b-c-d, a-c-b-d.
        assert_eq!(routes.len(), 4);
        for window in routes.windows(2) {
            assert!(window[0].hop_count() <= window[1].hop_count());
        }
    }

    #[test]
    fn route_cap_stops_enumeration() {
        let network = network(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("b", "c")],
        );
        let routes = explore_routes(
            &network,
            &name("a"),
            &name("d"),
            &PlannerConfig::with_max_routes(2),
        )
        .unwrap();
        assert_eq!(routes.len(), 2);
    }
}
