//! Core utilities for the roster collector
//!
//! This module consolidates the pieces the command layer is built from:
//! - `http`: shared HTTP client construction
//! - `roster`: grouping players under their teams

pub mod http;
pub mod roster;

// Re-export commonly used items for convenience
pub use http::build_client;
pub use roster::{build_rosters, players_for_team, Roster};
