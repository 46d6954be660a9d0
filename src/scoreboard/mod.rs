//! The live scoreboard: an owning registry of in-progress matches.
//!
//! ```text
//!  start ──▶ factory::create_match ──▶ matches.insert
//!  update_score ──▶ validator::to_score ──▶ overwrite in place
//!  finish ──▶ matches.remove
//!  summary ──▶ clone all ──▶ sort (total ↓, started_at ↓, sequence ↓)
//! ```
//!
//! Every operation validates before it mutates, so a failed call leaves the
//! board exactly as it was.

pub mod clock;
pub mod factory;
pub mod models;
pub mod validator;

pub use clock::{Clock, ManualClock, SystemClock};
pub use models::{Match, MatchId, Score};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::error::{Result, ScoreboardError};

/// Single-owner registry of live matches.
pub struct Scoreboard {
    /// match id → match
    matches: HashMap<MatchId, Match>,
    clock: Box<dyn Clock>,
    rng: StdRng,
    next_sequence: u64,
    /// Latest start time handed out; keeps start times non-decreasing even
    /// if the clock steps backwards.
    last_started_at: Option<DateTime<Utc>>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::with_sources(SystemClock, StdRng::from_entropy())
    }

    /// Build a board with explicit time and randomness sources.
    pub fn with_sources(clock: impl Clock + 'static, rng: StdRng) -> Self {
        Scoreboard {
            matches: HashMap::new(),
            clock: Box::new(clock),
            rng,
            next_sequence: 0,
            last_started_at: None,
        }
    }

    /// Start a new 0-0 match and return its id.
    pub fn start(&mut self, home_team: &str, away_team: &str) -> Result<MatchId> {
        let now = self.clock.now();
        let started_at = match self.last_started_at {
            Some(last) if last > now => last,
            _ => now,
        };

        let mut created = factory::create_match(
            home_team,
            away_team,
            started_at,
            self.next_sequence,
            &mut self.rng,
        )?;
        while self.matches.contains_key(&created.id) {
            created.id = factory::generate_match_id(started_at, &mut self.rng);
        }

        self.next_sequence += 1;
        self.last_started_at = Some(started_at);

        let id = created.id.clone();
        debug!(
            "Match started: {} vs {} ({})",
            created.home_team, created.away_team, id
        );
        self.matches.insert(id.clone(), created);
        Ok(id)
    }

    /// Replace the scoreline of a live match. Scores may go down as well as
    /// up, so corrections are accepted.
    ///
    /// Scores are taken as anything losslessly convertible to `f64`: `u8`..`u32`,
    /// `i8`..`i32`, `f32` and `f64`. Raw feed values like `1.5`, `NaN` or `-1`
    /// therefore reach validation instead of being rejected at the type level.
    /// `i64`, `u64` and `usize` have no lossless conversion and need an explicit
    /// `as f64` (or `u32::try_from`) at the call site.
    pub fn update_score<I, H, A>(&mut self, id: I, home: H, away: A) -> Result<()>
    where
        I: AsRef<str>,
        H: Into<f64>,
        A: Into<f64>,
    {
        let id = id.as_ref();
        let entry = self
            .matches
            .get_mut(id)
            .ok_or_else(|| ScoreboardError::not_found(id))?;
        let score = validator::to_score(home.into(), away.into())?;

        entry.score = score;
        debug!("Score updated: {} ({})", entry, id);
        Ok(())
    }

    /// Remove a match from the board for good.
    pub fn finish<I: AsRef<str>>(&mut self, id: I) -> Result<()> {
        let id = id.as_ref();
        let finished = self
            .matches
            .remove(id)
            .ok_or_else(|| ScoreboardError::not_found(id))?;
        debug!("Match finished: {} ({})", finished, id);
        Ok(())
    }

    /// All live matches, highest total first; equal totals put the most
    /// recently started match first.
    pub fn summary(&self) -> Vec<Match> {
        let mut out: Vec<Match> = self.matches.values().cloned().collect();
        out.sort_by(rank);
        out
    }

    /// Detached copy of a single live match.
    pub fn get<I: AsRef<str>>(&self, id: I) -> Option<Match> {
        self.matches.get(id.as_ref()).cloned()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

fn rank(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at.cmp(&a.started_at))
        .then_with(|| b.sequence.cmp(&a.sequence))
}

/// Thread-safe scoreboard handle (one mutex around the whole board).
///
/// Each call holds the lock for its full duration, so no operation observes
/// another half-applied.
#[derive(Clone)]
pub struct SharedScoreboard {
    inner: Arc<Mutex<Scoreboard>>,
}

impl SharedScoreboard {
    pub fn new(board: Scoreboard) -> Self {
        SharedScoreboard {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    // Operations never leave the board half-mutated, so a poisoned lock
    // still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Scoreboard> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self, home_team: &str, away_team: &str) -> Result<MatchId> {
        self.lock().start(home_team, away_team)
    }

    pub fn update_score<I, H, A>(&self, id: I, home: H, away: A) -> Result<()>
    where
        I: AsRef<str>,
        H: Into<f64>,
        A: Into<f64>,
    {
        self.lock().update_score(id, home, away)
    }

    pub fn finish<I: AsRef<str>>(&self, id: I) -> Result<()> {
        self.lock().finish(id)
    }

    pub fn summary(&self) -> Vec<Match> {
        self.lock().summary()
    }

    pub fn get<I: AsRef<str>>(&self, id: I) -> Option<Match> {
        self.lock().get(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for SharedScoreboard {
    fn default() -> Self {
        Self::new(Scoreboard::new())
    }
}

impl From<Scoreboard> for SharedScoreboard {
    fn from(board: Scoreboard) -> Self {
        Self::new(board)
    }
}
