//! The two participants of a match.
//!
//! A [`TeamPair`] keeps the home/away distinction for presentation, but
//! uniqueness and lookup treat the pair as unordered: no two active matches
//! may share the same two teams regardless of which side is "home".

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two teams contesting one match, home side first.
///
/// Names are stored exactly as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPair {
    /// The home team name.
    pub home: String,
    /// The away team name.
    pub away: String,
}

impl TeamPair {
    #[must_use]
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// Order-insensitive containment: true when `(home=a, away=b)` or
    /// `(home=b, away=a)`.
    #[must_use]
    pub fn is_pairing(&self, a: &str, b: &str) -> bool {
        (self.home == a && self.away == b) || (self.home == b && self.away == a)
    }
}

impl fmt::Display for TeamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}
