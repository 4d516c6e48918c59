//! Domain types for the train scheduler.
//!
//! The types here represent validated rail data. Invariants are enforced at
//! construction time, so code that receives these values can trust them.

mod route;
mod station;

pub use route::{Route, RouteError};
pub use station::{InvalidStationName, StationName};
