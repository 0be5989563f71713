//! Match storage.
//!
//! [`ScoreboardStorage`] is the seam between the rules engine and whatever
//! holds the records. The in-memory implementation is the default; a
//! replacement backend must keep the same read-after-write visibility and
//! never expose a partially written record.

use std::collections::HashMap;

use liveboard_types::{Match, MatchId};

/// Keyed container for active match records.
///
/// `save` both inserts and overwrites, keyed by id. `remove` is idempotent.
/// Lookups hand out owned copies — the canonical record never leaves the
/// store.
pub trait ScoreboardStorage {
    /// Insert a new record or overwrite the one with the same id.
    fn save(&mut self, record: Match);

    /// Remove the record with the given id. No-op when absent.
    fn remove(&mut self, id: &MatchId);

    /// Copy of the record with the given id.
    fn find_by_id(&self, id: &MatchId) -> Option<Match>;

    /// Copy of a record between the two teams, ignoring home/away
    /// orientation. If misuse ever stored several such records, one
    /// consistent (first found) record is returned.
    fn find_by_teams(&self, a: &str, b: &str) -> Option<Match>;

    /// Copies of all stored records. No ordering guarantee.
    fn all(&self) -> Vec<Match>;
}

/// In-memory implementation of [`ScoreboardStorage`].
///
/// Id lookup is O(1); team lookup is a linear scan, which is fine at the
/// scale of concurrently live matches.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    matches: HashMap<MatchId, Match>,
}

impl InMemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matches: HashMap::new(),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl ScoreboardStorage for InMemoryStorage {
    fn save(&mut self, record: Match) {
        self.matches.insert(record.id, record);
    }

    fn remove(&mut self, id: &MatchId) {
        self.matches.remove(id);
    }

    fn find_by_id(&self, id: &MatchId) -> Option<Match> {
        self.matches.get(id).cloned()
    }

    fn find_by_teams(&self, a: &str, b: &str) -> Option<Match> {
        self.matches
            .values()
            .find(|m| m.teams.is_pairing(a, b))
            .cloned()
    }

    fn all(&self) -> Vec<Match> {
        self.matches.values().cloned().collect()
    }
}
