//! Summary ordering policy.
//!
//! The board ranks matches by combined score, highest first. Ties go to the
//! match that started most recently. The sort is stable, so records with
//! identical total score and start time keep their retrieval order.

use liveboard_types::Match;

/// Order matches for the summary view: total score descending, then
/// `started_at` most-recent-first.
#[must_use]
pub fn rank(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| {
        b.total_score()
            .cmp(&a.total_score())
            .then_with(|| b.started_at.cmp(&a.started_at))
    });
    matches
}
