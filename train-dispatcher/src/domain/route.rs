//! A route through the network.

use super::StationName;

/// Error returned when constructing an invalid route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A route needs at least a source and a destination.
    #[error("route must visit at least two stations")]
    TooShort,

    /// A route is a simple path: no station may appear twice.
    #[error("route visits {0} more than once")]
    RepeatedStation(StationName),
}

/// A simple path of stations from a source to a destination.
///
/// The first station is where trains are dispatched from and the last is
/// where they finish. Every station on a route is distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationName>,
}

impl Route {
    /// Build a route from an ordered station sequence.
    ///
    /// Requires at least two stations, all distinct. Adjacency is the
    /// responsibility of the path explorer, which only ever extends a
    /// partial path along real links.
    pub fn new(stations: Vec<StationName>) -> Result<Self, RouteError> {
        if stations.len() < 2 {
            return Err(RouteError::TooShort);
        }
        for (idx, station) in stations.iter().enumerate() {
            if stations[..idx].contains(station) {
                return Err(RouteError::RepeatedStation(station.clone()));
            }
        }
        Ok(Route { stations })
    }

    /// The station trains depart from.
    pub fn source(&self) -> &StationName {
        &self.stations[0]
    }

    /// The station trains finish at.
    pub fn destination(&self) -> &StationName {
        &self.stations[self.stations.len() - 1]
    }

    /// Every station on the route, in travel order.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// The stations strictly between source and destination.
    ///
    /// Only these are subject to the one-train-per-station rule; source and
    /// destination may hold any number of trains. A direct route has an
    /// empty interior.
    pub fn interior(&self) -> &[StationName] {
        &self.stations[1..self.stations.len() - 1]
    }

    /// Number of links a train crosses travelling the whole route.
    pub fn hop_count(&self) -> usize {
        self.stations.len() - 1
    }

    /// Turns a train still needs after its dispatch turn.
    ///
    /// The dispatch turn already moves a new train onto the route's second
    /// station, leaving `len - 2` further moves to the destination.
    pub fn turns_after_dispatch(&self) -> usize {
        self.stations.len() - 2
    }
}
