//! In-memory live match scoreboard.
//!
//! ```no_run
//! use live_scoreboard::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! let id = board.start("Mexico", "Canada")?;
//! board.update_score(&id, 0, 5)?;
//! for m in board.summary() {
//!     println!("{}", m);
//! }
//! board.finish(&id)?;
//! # Ok::<(), live_scoreboard::ScoreboardError>(())
//! ```

pub mod error;
pub mod scoreboard;
pub mod script;

pub use error::{ErrorKind, Result, ScoreboardError};
pub use scoreboard::{
    Clock, ManualClock, Match, MatchId, Score, Scoreboard, SharedScoreboard, SystemClock,
};
