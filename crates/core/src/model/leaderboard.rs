use serde::{Deserialize, Serialize};

/// One completed, named session's average score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: f64,
}

/// Growing collection of completed-session results.
///
/// Entries are kept in insertion order; duplicates by name are not merged.
/// Ranking happens at display time via [`Leaderboard::ranked`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry. The score is expected to be an average already
    /// rounded to two decimals.
    pub fn record(&mut self, name: impl Into<String>, score: f64) {
        self.entries.push(LeaderboardEntry {
            name: name.into(),
            score,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted descending by score.
    ///
    /// The sort is stable, so entries with equal scores keep their insertion
    /// order.
    #[must_use]
    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}
