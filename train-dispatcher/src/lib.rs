//! Turn-based train movement scheduler.
//!
//! Given an undirected rail network, a source station, a destination station
//! and a number of trains, computes a movement schedule that brings every
//! train to the destination in as few turns as possible, with at most one
//! train per intermediate station per turn.

pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod schedule;
