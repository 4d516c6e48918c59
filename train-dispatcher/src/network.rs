//! The rail network graph.
//!
//! Stations plus a symmetric, irreflexive, duplicate-free adjacency
//! relation. The network is built once by the map loader and read-only for
//! the rest of a planning run.

use std::collections::HashMap;

use crate::domain::StationName;

/// Error raised while building the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A link referenced a station that was never added.
    #[error("station {0} does not exist")]
    UnknownStation(StationName),

    /// The pair is already linked, in either direction.
    #[error("duplicate connection between {0} and {1}")]
    DuplicateLink(StationName, StationName),

    /// A station cannot link to itself.
    #[error("station {0} cannot connect to itself")]
    SelfLink(StationName),
}

/// An undirected graph of stations.
///
/// Neighbors are kept in link-insertion order, which makes every downstream
/// stage deterministic for a given map file.
#[derive(Debug, Clone, Default)]
pub struct Network {
    links: HashMap<StationName, Vec<StationName>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station. Re-adding an existing station is a no-op.
    pub fn add_station(&mut self, name: StationName) {
        self.links.entry(name).or_default();
    }

    /// Add an undirected link between two existing stations.
    pub fn add_link(&mut self, a: StationName, b: StationName) -> Result<(), NetworkError> {
        if a == b {
            return Err(NetworkError::SelfLink(a));
        }
        if !self.links.contains_key(&a) {
            return Err(NetworkError::UnknownStation(a));
        }
        if !self.links.contains_key(&b) {
            return Err(NetworkError::UnknownStation(b));
        }
        if self.neighbors(a.as_str()).contains(&b) || self.neighbors(b.as_str()).contains(&a) {
            return Err(NetworkError::DuplicateLink(a, b));
        }

        if let Some(neighbors) = self.links.get_mut(&a) {
            neighbors.push(b.clone());
        }
        if let Some(neighbors) = self.links.get_mut(&b) {
            neighbors.push(a);
        }
        Ok(())
    }

    /// Whether a station with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.links.contains_key(name)
    }

    /// The stations directly linked to `name`, in link-insertion order.
    ///
    /// Unknown names have no neighbors.
    pub fn neighbors(&self, name: &str) -> &[StationName] {
        self.links.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of stations on the network.
    pub fn station_count(&self) -> usize {
        self.links.len()
    }
}
