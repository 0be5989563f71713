//! # liveboard-types
//!
//! Shared types and errors for the **Liveboard** scoreboard engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MatchId`]
//! - **Participants**: [`TeamPair`]
//! - **Match record**: [`Match`]
//! - **Errors**: [`ScoreboardError`] with `LB_ERR_` prefix codes, plus the
//!   [`ErrorKind`] classification
//! - **Constants**: version and engine name

pub mod constants;
pub mod error;
pub mod ids;
pub mod record;
pub mod team;

// Re-export all primary types at crate root for ergonomic imports:
//   use liveboard_types::{Match, MatchId, TeamPair, ScoreboardError};

pub use error::*;
pub use ids::*;
pub use record::*;
pub use team::*;

// Constants are accessed via `liveboard_types::constants::FOO`
// (not re-exported to avoid name collisions).
