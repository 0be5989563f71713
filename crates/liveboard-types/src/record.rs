//! The match record — one active contest on the board.
//!
//! Records are value types: a score update produces a new record that
//! replaces the stored one, it never mutates shared state in place. The
//! storage layer holds the canonical copy; everything handed to callers
//! is an independent clone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MatchId, TeamPair};

/// A live match: two teams, a running score, and the moment it started.
///
/// `id`, `teams`, and `started_at` are fixed at creation; only the score
/// fields change over the match's lifetime, and only through the manager's
/// update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub teams: TeamPair,
    pub home_score: u32,
    pub away_score: u32,
    pub started_at: DateTime<Utc>,
}

impl Match {
    /// Create a fresh 0-0 record.
    #[must_use]
    pub fn new(id: MatchId, teams: TeamPair, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            teams,
            home_score: 0,
            away_score: 0,
            started_at,
        }
    }

    /// Combined score of both sides — the primary summary sort key.
    ///
    /// Widened to `u64` so the sum cannot overflow.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.teams.home, self.home_score, self.teams.away, self.away_score
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Match {
    pub fn dummy(home: &str, away: &str) -> Self {
        Self::new(MatchId::new(), TeamPair::new(home, away), Utc::now())
    }

    pub fn dummy_at(home: &str, away: &str, started_at: DateTime<Utc>) -> Self {
        Self::new(MatchId::new(), TeamPair::new(home, away), started_at)
    }

    pub fn with_score(mut self, home_score: u32, away_score: u32) -> Self {
        self.home_score = home_score;
        self.away_score = away_score;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_starts_at_nil_nil() {
        let m = Match::dummy("Germany", "France");
        assert_eq!(m.home_score, 0);
        assert_eq!(m.away_score, 0);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn total_score_sums_both_sides() {
        let m = Match::dummy("Uruguay", "Italy").with_score(6, 6);
        assert_eq!(m.total_score(), 12);
    }

    #[test]
    fn total_score_cannot_overflow() {
        let m = Match::dummy("A", "B").with_score(u32::MAX, u32::MAX);
        assert_eq!(m.total_score(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn display_is_the_score_line() {
        let m = Match::dummy("Spain", "Brazil").with_score(10, 2);
        assert_eq!(m.to_string(), "Spain 10 - Brazil 2");
    }

    #[test]
    fn serde_roundtrip() {
        let m = Match::dummy("Mexico", "Canada").with_score(0, 5);
        let json = serde_json::to_string(&m).unwrap();
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
