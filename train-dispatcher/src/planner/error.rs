//! Planner error type.

use crate::domain::StationName;

/// Errors raised by the planning pipeline.
///
/// All are terminal for the current run; the planner never retries or
/// recovers partially.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Source and destination are the same station.
    #[error("source and destination stations are the same")]
    SameStation,

    /// An endpoint is not on the network.
    #[error("station {0} does not exist")]
    UnknownStation(StationName),

    /// The endpoints are not connected by any path.
    #[error("no routes found from {origin} to {destination}")]
    NoRouteFound {
        origin: StationName,
        destination: StationName,
    },

    /// A train budget of zero is a caller error, not a no-op.
    #[error("number of trains must be at least 1")]
    EmptyTrainBudget,

    /// Allocation was asked to choose from an empty candidate list.
    #[error("no candidate route sets to allocate trains to")]
    NoCandidates,
}
