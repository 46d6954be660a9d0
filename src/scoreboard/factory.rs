use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::{Result, ScoreboardError};

use super::models::{Match, MatchId, Score};

const ID_SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Build a fresh 0-0 match.
///
/// Team names are trimmed; both must be non-empty and must differ ignoring
/// case. The id is derived from `started_at` and `rng`; `sequence` is the
/// creation order assigned by the owning registry.
pub fn create_match<R: Rng>(
    home_team: &str,
    away_team: &str,
    started_at: DateTime<Utc>,
    sequence: u64,
    rng: &mut R,
) -> Result<Match> {
    let (home_team, away_team) = validate_team_names(home_team, away_team)?;

    Ok(Match {
        id: generate_match_id(started_at, rng),
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        score: Score::default(),
        started_at,
        sequence,
    })
}

/// Returns the trimmed names when they form a valid pairing.
pub fn validate_team_names<'a>(
    home_team: &'a str,
    away_team: &'a str,
) -> Result<(&'a str, &'a str)> {
    let home = home_team.trim();
    let away = away_team.trim();

    if home.is_empty() {
        return Err(ScoreboardError::validation("Home team name cannot be empty"));
    }
    if away.is_empty() {
        return Err(ScoreboardError::validation("Away team name cannot be empty"));
    }
    if home.to_lowercase() == away.to_lowercase() {
        return Err(ScoreboardError::validation(
            "Home team and away team must be different",
        ));
    }
    Ok((home, away))
}

/// `<unix millis>-<7 random base-36 chars>`, e.g. `1700000000000-k3x9q2a`.
pub fn generate_match_id<R: Rng>(at: DateTime<Utc>, rng: &mut R) -> MatchId {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    MatchId::new(format!("{}-{}", at.timestamp_millis(), suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn at() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_123).unwrap()
    }

    fn validation_message(home: &str, away: &str) -> String {
        let err = create_match(home, away, at(), 0, &mut rng()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        err.to_string()
    }

    #[test]
    fn test_create_match_starts_at_nil_nil() {
        let m = create_match("Mexico", "Canada", at(), 3, &mut rng()).unwrap();
        assert_eq!(m.home_team(), "Mexico");
        assert_eq!(m.away_team(), "Canada");
        assert_eq!(m.score(), Score::new(0, 0));
        assert_eq!(m.started_at(), at());
        assert_eq!(m.sequence, 3);
    }

    #[test]
    fn test_create_match_trims_names() {
        let m = create_match("  Mexico  ", "\tCanada ", at(), 0, &mut rng()).unwrap();
        assert_eq!(m.home_team(), "Mexico");
        assert_eq!(m.away_team(), "Canada");
    }

    #[test]
    fn test_empty_names_rejected() {
        assert_eq!(validation_message("", "Canada"), "Home team name cannot be empty");
        assert_eq!(validation_message("Mexico", ""), "Away team name cannot be empty");
        assert_eq!(validation_message("   ", "Canada"), "Home team name cannot be empty");
        assert_eq!(validation_message("Mexico", "   "), "Away team name cannot be empty");
    }

    #[test]
    fn test_same_team_rejected() {
        let expected = "Home team and away team must be different";
        assert_eq!(validation_message("Mexico", "Mexico"), expected);
        assert_eq!(validation_message("Mexico", "MEXICO"), expected);
        assert_eq!(validation_message(" mexico ", "Mexico"), expected);
    }

    #[test]
    fn test_similar_names_allowed() {
        assert!(create_match("Mexico", "Mexico U21", at(), 0, &mut rng()).is_ok());
        assert!(create_match("Korea Republic", "Korea DPR", at(), 0, &mut rng()).is_ok());
    }

    #[test]
    fn test_id_format() {
        let id = generate_match_id(at(), &mut rng());
        let (millis, suffix) = id.as_str().split_once('-').unwrap();
        assert_eq!(millis, "1700000000123");
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_ids_differ_for_same_instant() {
        let mut r = rng();
        let a = generate_match_id(at(), &mut r);
        let b = generate_match_id(at(), &mut r);
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_generation_is_reproducible_with_seed() {
        let a = generate_match_id(at(), &mut rng());
        let b = generate_match_id(at(), &mut rng());
        assert_eq!(a, b);
    }
}
