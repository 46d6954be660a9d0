//! Score validation and totals.
//!
//! Raw scores arrive as plain numbers (feeds, scripts, JSON) and are only
//! turned into a [`Score`] once every rule below has passed. Rules are
//! checked in a fixed order and only the first failure is reported:
//!
//! 1. home is an integer (NaN and infinities are not)
//! 2. away is an integer
//! 3. home is non-negative
//! 4. away is non-negative
//! 5. home, then away, fits the stored score width

use crate::error::{Result, ScoreboardError};

use super::models::Score;

const MAX_SCORE: f64 = u32::MAX as f64;

fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Check a raw scoreline without converting it.
pub fn validate(home: f64, away: f64) -> Result<()> {
    if !is_integer(home) {
        return Err(ScoreboardError::invalid_score("Home score must be an integer"));
    }
    if !is_integer(away) {
        return Err(ScoreboardError::invalid_score("Away score must be an integer"));
    }
    if home < 0.0 {
        return Err(ScoreboardError::invalid_score("Home score cannot be negative"));
    }
    if away < 0.0 {
        return Err(ScoreboardError::invalid_score("Away score cannot be negative"));
    }
    if home > MAX_SCORE {
        return Err(ScoreboardError::invalid_score("Home score is too large"));
    }
    if away > MAX_SCORE {
        return Err(ScoreboardError::invalid_score("Away score is too large"));
    }
    Ok(())
}

/// Validate a raw scoreline and convert it into a [`Score`].
pub fn to_score(home: f64, away: f64) -> Result<Score> {
    validate(home, away)?;
    // Both values are integral and within u32 range at this point.
    Ok(Score::new(home as u32, away as u32))
}

/// Sum of both sides. Performs no validation.
pub fn total(home: u32, away: u32) -> u64 {
    home as u64 + away as u64
}
