//! Line-oriented command scripts that drive a [`Scoreboard`].
//!
//! ```text
//! # comments and blank lines are skipped
//! start mex Mexico vs Canada
//! update mex 0 5
//! finish mex
//! summary
//! ```
//!
//! Labels are script-local names for the generated match ids. A label keeps
//! pointing at its match after `finish`, so later commands on it surface the
//! board's own not-found error. A label can only be reused by `start` once
//! its match has finished.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::error::ScoreboardError;
use crate::scoreboard::{Match, MatchId, Scoreboard};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start {
        label: String,
        home_team: String,
        away_team: String,
    },
    Update {
        label: String,
        home: f64,
        away: f64,
    },
    Finish {
        label: String,
    },
    Summary,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: unknown match label '{label}'")]
    UnknownLabel { line: usize, label: String },

    #[error("line {line}: label '{label}' is already bound to a live match")]
    DuplicateLabel { line: usize, label: String },

    #[error("line {line}: {source}")]
    Scoreboard {
        line: usize,
        #[source]
        source: ScoreboardError,
    },
}

/// Result of one executed command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Started { label: String, id: MatchId },
    Updated { label: String },
    Finished { label: String },
    Summary(Vec<Match>),
}

/// Parse one script line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let verb = tokens.next().unwrap_or_default();
    let rest: Vec<&str> = tokens.collect();

    let command = match verb.to_lowercase().as_str() {
        "start" => {
            let (label, teams) = rest
                .split_first()
                .ok_or("usage: start <label> <home team> vs <away team>")?;
            let split = teams
                .iter()
                .position(|t| t.eq_ignore_ascii_case("vs"))
                .ok_or("expected 'vs' between team names")?;
            Command::Start {
                label: label.to_string(),
                home_team: teams[..split].join(" "),
                away_team: teams[split + 1..].join(" "),
            }
        }
        "update" => match rest.as_slice() {
            [label, home, away] => Command::Update {
                label: label.to_string(),
                home: parse_number(home)?,
                away: parse_number(away)?,
            },
            _ => return Err("usage: update <label> <home score> <away score>".into()),
        },
        "finish" => match rest.as_slice() {
            [label] => Command::Finish {
                label: label.to_string(),
            },
            _ => return Err("usage: finish <label>".into()),
        },
        "summary" => {
            if !rest.is_empty() {
                return Err("summary takes no arguments".into());
            }
            Command::Summary
        }
        other => return Err(format!("unknown command '{}'", other)),
    };
    Ok(Some(command))
}

fn parse_number(token: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", token))
}

/// Executes script commands against a board it owns.
pub struct ScriptRunner {
    board: Scoreboard,
    labels: HashMap<String, MatchId>,
}

impl ScriptRunner {
    pub fn new(board: Scoreboard) -> Self {
        ScriptRunner {
            board,
            labels: HashMap::new(),
        }
    }

    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Parse and run a single line. `line_no` is 1-based and only used in errors.
    pub fn execute(&mut self, line_no: usize, line: &str) -> Result<Option<Outcome>, ScriptError> {
        let command = parse_line(line).map_err(|message| ScriptError::Parse {
            line: line_no,
            message,
        })?;
        match command {
            Some(command) => self.run(line_no, command).map(Some),
            None => Ok(None),
        }
    }

    pub fn run(&mut self, line_no: usize, command: Command) -> Result<Outcome, ScriptError> {
        let board_err = |source| ScriptError::Scoreboard {
            line: line_no,
            source,
        };

        let outcome = match command {
            Command::Start {
                label,
                home_team,
                away_team,
            } => {
                if self.is_live(&label) {
                    return Err(ScriptError::DuplicateLabel {
                        line: line_no,
                        label,
                    });
                }
                let id = self
                    .board
                    .start(&home_team, &away_team)
                    .map_err(board_err)?;
                self.labels.insert(label.clone(), id.clone());
                Outcome::Started { label, id }
            }
            Command::Update { label, home, away } => {
                let id = self.resolve(line_no, &label)?;
                self.board.update_score(&id, home, away).map_err(board_err)?;
                Outcome::Updated { label }
            }
            Command::Finish { label } => {
                let id = self.resolve(line_no, &label)?;
                self.board.finish(&id).map_err(board_err)?;
                Outcome::Finished { label }
            }
            Command::Summary => Outcome::Summary(self.board.summary()),
        };
        debug!("line {}: {:?}", line_no, outcome);
        Ok(outcome)
    }

    fn is_live(&self, label: &str) -> bool {
        self.labels
            .get(label)
            .is_some_and(|id| self.board.get(id).is_some())
    }

    fn resolve(&self, line_no: usize, label: &str) -> Result<MatchId, ScriptError> {
        self.labels
            .get(label)
            .cloned()
            .ok_or_else(|| ScriptError::UnknownLabel {
                line: line_no,
                label: label.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Render a ranked summary for display.
pub fn render_summary(summary: &[Match], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(summary),
        OutputFormat::Text => {
            if summary.is_empty() {
                return Ok("(no live matches)".to_string());
            }
            let lines: Vec<String> = summary
                .iter()
                .enumerate()
                .map(|(i, m)| format!("{}. {}", i + 1, m))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
