//! Session leaderboard
//!
//! Lives only as long as the process. Runs are ordered by score; on equal
//! scores a won run ranks above a lost one, then more bricks cleared wins.
//! A run that exactly ties an existing entry goes below it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Bricks destroyed during the run
    pub bricks_cleared: u32,
    /// Run ended in Victory
    pub won: bool,
}

impl HighScoreEntry {
    /// Leaderboard order, best first
    fn rank_cmp(&self, other: &Self) -> Ordering {
        (other.score, other.won, other.bricks_cleared).cmp(&(
            self.score,
            self.won,
            self.bricks_cleared,
        ))
    }

    /// Strictly better than `other`
    pub fn outranks(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    /// Best first
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-indexed slot `entry` would take, or None if it stays off the board
    pub fn potential_rank(&self, entry: &HighScoreEntry) -> Option<usize> {
        if entry.score == 0 {
            return None;
        }
        let slot = self
            .entries
            .iter()
            .position(|e| entry.outranks(e))
            .unwrap_or(self.entries.len());
        (slot < MAX_HIGH_SCORES).then_some(slot + 1)
    }

    pub fn qualifies(&self, entry: &HighScoreEntry) -> bool {
        self.potential_rank(entry).is_some()
    }

    /// Record a finished run; returns its rank if it made the board
    pub fn add_score(&mut self, score: u64, bricks_cleared: u32, won: bool) -> Option<usize> {
        let entry = HighScoreEntry {
            score,
            bricks_cleared,
            won,
        };
        let rank = self.potential_rank(&entry)?;

        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
