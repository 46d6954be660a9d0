use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier handed out when a match starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub(crate) fn new(raw: String) -> Self {
        MatchId(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MatchId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MatchId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A validated scoreline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Score { home, away }
    }

    /// Combined goals of both sides, the primary ranking key.
    pub fn total(&self) -> u64 {
        super::validator::total(self.home, self.away)
    }
}

/// One live match on the board.
///
/// The registry owns the canonical copy; every `Match` a caller receives is a
/// detached clone, so mutating it never reaches back into the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub(crate) id: MatchId,
    pub(crate) home_team: String,
    pub(crate) away_team: String,
    pub(crate) score: Score,
    pub(crate) started_at: DateTime<Utc>,
    /// Creation order within the owning registry; final ranking tie-break
    #[serde(skip)]
    pub(crate) sequence: u64,
}

impl Match {
    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn home_score(&self) -> u32 {
        self.score.home
    }

    pub fn away_score(&self) -> u32 {
        self.score.away
    }

    pub fn total_score(&self) -> u64 {
        self.score.total()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Overwrite the scoreline of a detached copy. Has no effect on any
    /// registry the match came from.
    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.score.home, self.away_team, self.score.away
        )
    }
}
