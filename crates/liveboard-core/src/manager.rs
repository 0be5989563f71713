//! The scoreboard manager — the lifecycle rules engine.
//!
//! Every operation validates its input, reads or writes through the
//! storage seam, and either fully succeeds or leaves the board untouched.
//! There is no partial-failure state and nothing is retried internally.

use liveboard_types::{Match, MatchId, Result, ScoreboardError, TeamPair};

use crate::clock::{Clock, SystemClock};
use crate::storage::{InMemoryStorage, ScoreboardStorage};
use crate::summary;

/// Tracks the set of in-progress matches and enforces the lifecycle rules:
/// start, score update, finish, and the ranked summary view.
///
/// The manager owns its storage and clock. Callers receive independent
/// copies of every record; the canonical state only changes through the
/// operations below.
pub struct ScoreboardManager<S = InMemoryStorage, C = SystemClock> {
    storage: S,
    clock: C,
}

impl ScoreboardManager {
    /// Manager over fresh in-memory storage and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(InMemoryStorage::new(), SystemClock)
    }
}

impl Default for ScoreboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScoreboardStorage, C: Clock> ScoreboardManager<S, C> {
    /// Manager over a caller-supplied storage backend and clock.
    #[must_use]
    pub fn with_parts(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    /// Start a new match at 0-0.
    ///
    /// # Errors
    /// - `BlankTeamName` if either name is empty after trimming
    /// - `IdenticalTeams` if both sides name the same team
    /// - `MatchAlreadyStarted` if an active match between these two teams
    ///   exists in either orientation
    pub fn start_match(&mut self, home: &str, away: &str) -> Result<Match> {
        if home.trim().is_empty() || away.trim().is_empty() {
            return Err(ScoreboardError::BlankTeamName);
        }
        if home == away {
            return Err(ScoreboardError::IdenticalTeams {
                name: home.to_string(),
            });
        }
        if let Some(existing) = self.storage.find_by_teams(home, away) {
            return Err(ScoreboardError::MatchAlreadyStarted(existing.teams));
        }

        let record = Match::new(
            MatchId::new(),
            TeamPair::new(home, away),
            self.clock.now(),
        );
        self.storage.save(record.clone());

        tracing::info!(
            match_id = %record.id,
            teams = %record.teams,
            "Match started"
        );

        Ok(record)
    }

    /// Replace both score fields of an active match.
    ///
    /// Identity and start time are untouched; the stored record is
    /// overwritten with the new value.
    ///
    /// # Errors
    /// Returns `MatchNotFound` for an unknown id.
    pub fn update_score(
        &mut self,
        id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> Result<Match> {
        let current = self.match_by_id(id)?;

        let updated = Match {
            home_score,
            away_score,
            ..current
        };
        self.storage.save(updated.clone());

        tracing::debug!(
            match_id = %updated.id,
            home_score,
            away_score,
            "Score updated"
        );

        Ok(updated)
    }

    /// End a match. The record is removed; nothing is retained.
    ///
    /// # Errors
    /// Returns `MatchNotFound` for an unknown id.
    pub fn finish_match(&mut self, id: MatchId) -> Result<()> {
        let record = self.match_by_id(id)?;
        self.storage.remove(&id);

        tracing::info!(
            match_id = %record.id,
            teams = %record.teams,
            final_score = %record,
            "Match finished"
        );

        Ok(())
    }

    /// All active matches, ranked: total score descending, ties broken by
    /// most recent start.
    #[must_use]
    pub fn summary(&self) -> Vec<Match> {
        summary::rank(self.storage.all())
    }

    /// All active matches, unordered.
    #[must_use]
    pub fn all_matches(&self) -> Vec<Match> {
        self.storage.all()
    }

    /// The active match with the given id.
    ///
    /// # Errors
    /// Returns `MatchNotFound` when absent.
    pub fn match_by_id(&self, id: MatchId) -> Result<Match> {
        self.storage
            .find_by_id(&id)
            .ok_or(ScoreboardError::MatchNotFound(id))
    }

    /// The active match between the two teams, in either orientation.
    /// Absence is a normal empty result, not an error.
    #[must_use]
    pub fn find_match(&self, home: &str, away: &str) -> Option<Match> {
        self.storage.find_by_teams(home, away)
    }
}

#[cfg(test)]
mod tests {
    use liveboard_types::ErrorKind;

    use super::*;

    #[test]
    fn start_match_creates_a_nil_nil_record() {
        let mut board = ScoreboardManager::new();
        let record = board.start_match("Mexico", "Canada").unwrap();

        assert_eq!(record.teams, TeamPair::new("Mexico", "Canada"));
        assert_eq!((record.home_score, record.away_score), (0, 0));

        let all = board.all_matches();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], record);
    }

    #[test]
    fn start_match_rejects_blank_names() {
        let mut board = ScoreboardManager::new();
        for (home, away) in [("", "Spain"), ("Spain", ""), ("   ", "Spain")] {
            let err = board.start_match(home, away).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "{home:?} vs {away:?}");
        }
        assert!(board.all_matches().is_empty());
    }

    #[test]
    fn start_match_rejects_identical_teams() {
        let mut board = ScoreboardManager::new();
        let err = board.start_match("Spain", "Spain").unwrap_err();
        assert!(matches!(err, ScoreboardError::IdenticalTeams { .. }));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn start_match_rejects_duplicate_pair_in_either_orientation() {
        let mut board = ScoreboardManager::new();
        board.start_match("Mexico", "Canada").unwrap();

        let same = board.start_match("Mexico", "Canada").unwrap_err();
        assert!(matches!(same, ScoreboardError::MatchAlreadyStarted(_)));

        let reversed = board.start_match("Canada", "Mexico").unwrap_err();
        assert_eq!(reversed.kind(), ErrorKind::Conflict);

        assert_eq!(board.all_matches().len(), 1);
    }

    #[test]
    fn update_score_changes_only_the_score_fields() {
        let mut board = ScoreboardManager::new();
        let started = board.start_match("Spain", "Brazil").unwrap();

        let updated = board.update_score(started.id, 10, 2).unwrap();
        assert_eq!((updated.home_score, updated.away_score), (10, 2));
        assert_eq!(updated.id, started.id);
        assert_eq!(updated.teams, started.teams);
        assert_eq!(updated.started_at, started.started_at);

        // The stored record was overwritten.
        assert_eq!(board.match_by_id(started.id).unwrap(), updated);
    }

    #[test]
    fn update_score_unknown_id_is_not_found() {
        let mut board = ScoreboardManager::new();
        let err = board.update_score(MatchId::new(), 1, 1).unwrap_err();
        assert!(matches!(err, ScoreboardError::MatchNotFound(_)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn finish_match_removes_the_record() {
        let mut board = ScoreboardManager::new();
        let record = board.start_match("Germany", "France").unwrap();

        board.finish_match(record.id).unwrap();
        assert!(board.all_matches().is_empty());

        let err = board.match_by_id(record.id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn finish_match_unknown_id_is_not_found() {
        let mut board = ScoreboardManager::new();
        let err = board.finish_match(MatchId::new()).unwrap_err();
        assert!(matches!(err, ScoreboardError::MatchNotFound(_)));
    }

    #[test]
    fn finished_pair_can_start_again() {
        let mut board = ScoreboardManager::new();
        let first = board.start_match("Uruguay", "Italy").unwrap();
        board.finish_match(first.id).unwrap();

        let second = board.start_match("Italy", "Uruguay").unwrap();
        assert_ne!(second.id, first.id);
    }

    #[test]
    fn find_match_is_order_insensitive_and_non_failing() {
        let mut board = ScoreboardManager::new();
        board.start_match("Argentina", "Australia").unwrap();

        assert!(board.find_match("Argentina", "Australia").is_some());
        assert!(board.find_match("Australia", "Argentina").is_some());
        assert!(board.find_match("Argentina", "Brazil").is_none());
    }

    #[test]
    fn summary_of_empty_board_is_empty() {
        let board = ScoreboardManager::new();
        assert!(board.summary().is_empty());
    }
}
