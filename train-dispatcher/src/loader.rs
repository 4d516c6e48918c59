//! Network map file loading.
//!
//! A map file has two sections. `stations:` lists one `name, x, y` triple
//! per line; `connections:` lists one `a-b` pair per line. `#` starts a
//! comment and blank lines are skipped. Coordinates are validated but not
//! kept: the planner only needs names and links.
//!
//! ```text
//! stations:
//! waterloo, 3, 1      # terminus
//! victoria, 6, 7
//!
//! connections:
//! waterloo-victoria
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{InvalidStationName, StationName};
use crate::network::{Network, NetworkError};

/// Maps with more stations than this are rejected.
pub const MAX_STATIONS: usize = 10_000;

/// Errors raised while loading a map file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing but comments and blank lines.
    #[error("map file is empty")]
    EmptyFile,

    /// The `stations:` header never appears.
    #[error("'stations:' section does not exist")]
    MissingStationsSection,

    /// The `connections:` header never appears.
    #[error("'connections:' section does not exist")]
    MissingConnectionsSection,

    /// A station line does not have exactly name plus two coordinates.
    #[error("station {0} does not have exactly two coordinates")]
    MalformedStation(String),

    /// A coordinate is not a non-negative integer.
    #[error("station {station} has invalid coordinate {value}")]
    InvalidCoordinate { station: String, value: String },

    /// A station name is not representable.
    #[error("invalid station name {name:?}")]
    InvalidName {
        name: String,
        #[source]
        source: InvalidStationName,
    },

    /// Two station lines share a name.
    #[error("station list has two stations with same name: {0}")]
    DuplicateStation(StationName),

    /// Two station lines share a coordinate pair.
    #[error("stations {0} and {1} have the same coordinates")]
    DuplicateCoordinates(StationName, StationName),

    /// A connection line does not name exactly two stations.
    #[error("connection '{0}' must name exactly two stations")]
    MalformedConnection(String),

    /// The station cap was exceeded.
    #[error("map contains more than {MAX_STATIONS} stations")]
    TooManyStations,

    /// A connection referenced an unknown station or duplicated a link.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Read and parse a map file.
pub fn load_network(path: &Path) -> Result<Network, LoadError> {
    let text = fs::read_to_string(path)?;
    let network = parse_network(&text)?;
    debug!(
        path = %path.display(),
        stations = network.station_count(),
        "network map loaded"
    );
    Ok(network)
}

/// Parse a map from text.
pub fn parse_network(text: &str) -> Result<Network, LoadError> {
    check_sections(text)?;

    let mut network = Network::new();
    let mut coordinates: HashMap<(u32, u32), StationName> = HashMap::new();
    let mut station_count = 0usize;
    let mut section = Section::None;

    for line in content_lines(text) {
        match line {
            "stations:" => section = Section::Stations,
            "connections:" => section = Section::Connections,
            _ => match section {
                Section::Stations => {
                    station_count += 1;
                    if station_count > MAX_STATIONS {
                        return Err(LoadError::TooManyStations);
                    }
                    parse_station(line, &mut network, &mut coordinates)?;
                }
                Section::Connections => parse_connection(line, &mut network)?,
                // Content before the first header is ignored.
                Section::None => {}
            },
        }
    }

    Ok(network)
}

#[derive(Clone, Copy)]
enum Section {
    None,
    Stations,
    Connections,
}

/// Lines with comments stripped and whitespace trimmed, blanks skipped.
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
}

fn check_sections(text: &str) -> Result<(), LoadError> {
    let mut any = false;
    let mut stations = false;
    let mut connections = false;

    for line in content_lines(text) {
        any = true;
        match line {
            "stations:" => stations = true,
            "connections:" => connections = true,
            _ => {}
        }
    }

    if !any {
        return Err(LoadError::EmptyFile);
    }
    if !stations {
        return Err(LoadError::MissingStationsSection);
    }
    if !connections {
        return Err(LoadError::MissingConnectionsSection);
    }
    Ok(())
}

fn parse_station(
    line: &str,
    network: &mut Network,
    coordinates: &mut HashMap<(u32, u32), StationName>,
) -> Result<(), LoadError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [raw_name, raw_x, raw_y] = parts[..] else {
        let head = parts.first().copied().unwrap_or_default();
        return Err(LoadError::MalformedStation(head.to_string()));
    };

    let name = StationName::parse(raw_name).map_err(|source| LoadError::InvalidName {
        name: raw_name.to_string(),
        source,
    })?;

    let x = parse_coordinate(&name, raw_x)?;
    let y = parse_coordinate(&name, raw_y)?;

    if network.contains(name.as_str()) {
        return Err(LoadError::DuplicateStation(name));
    }
    if let Some(previous) = coordinates.insert((x, y), name.clone()) {
        return Err(LoadError::DuplicateCoordinates(previous, name));
    }

    network.add_station(name);
    Ok(())
}

fn parse_coordinate(station: &StationName, raw: &str) -> Result<u32, LoadError> {
    raw.parse().map_err(|_| LoadError::InvalidCoordinate {
        station: station.to_string(),
        value: raw.to_string(),
    })
}

fn parse_connection(line: &str, network: &mut Network) -> Result<(), LoadError> {
    let parts: Vec<&str> = line.split('-').map(str::trim).collect();
    let [raw_a, raw_b] = parts[..] else {
        let head = parts.first().copied().unwrap_or_default();
        return Err(LoadError::MalformedConnection(head.to_string()));
    };

    let a = StationName::parse(raw_a).map_err(|source| LoadError::InvalidName {
        name: raw_a.to_string(),
        source,
    })?;
    let b = StationName::parse(raw_b).map_err(|source| LoadError::InvalidName {
        name: raw_b.to_string(),
        source,
    })?;

    network.add_link(a, b)?;
    Ok(())
}
