use chrono::{DateTime, Duration};
use rand::rngs::StdRng;
use rand::SeedableRng;

use live_scoreboard::{ErrorKind, ManualClock, MatchId, Score, Scoreboard};

fn board() -> (Scoreboard, ManualClock) {
    let clock = ManualClock::new(DateTime::from_timestamp(1_668_960_000, 0).unwrap());
    let board = Scoreboard::with_sources(clock.clone(), StdRng::seed_from_u64(2022));
    (board, clock)
}

fn start(board: &mut Scoreboard, clock: &ManualClock, home: &str, away: &str) -> MatchId {
    let id = board.start(home, away).unwrap();
    clock.advance(Duration::milliseconds(5));
    id
}

#[test]
fn world_cup_summary_ranks_by_total_then_recency() {
    let (mut board, clock) = board();
    let mexico = start(&mut board, &clock, "Mexico", "Canada");
    let spain = start(&mut board, &clock, "Spain", "Brazil");
    let germany = start(&mut board, &clock, "Germany", "France");
    let uruguay = start(&mut board, &clock, "Uruguay", "Italy");
    let argentina = start(&mut board, &clock, "Argentina", "Australia");

    board.update_score(&mexico, 0, 5).unwrap();
    board.update_score(&spain, 10, 2).unwrap();
    board.update_score(&germany, 2, 2).unwrap();
    board.update_score(&uruguay, 6, 6).unwrap();
    board.update_score(&argentina, 3, 1).unwrap();

    let lines: Vec<String> = board.summary().iter().map(|m| m.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Uruguay 6 - Italy 6",
            "Spain 10 - Brazil 2",
            "Mexico 0 - Canada 5",
            "Argentina 3 - Australia 1",
            "Germany 2 - France 2",
        ]
    );
}

#[test]
fn lifecycle_from_kickoff_to_final_whistle() {
    let (mut board, clock) = board();
    let poland = start(&mut board, &clock, "Poland", "Germany");
    let spain = start(&mut board, &clock, "Spain", "Brazil");

    let summary = board.summary();
    assert_eq!(summary.len(), 2);
    assert!(summary.iter().all(|m| m.score() == Score::new(0, 0)));

    board.update_score(&poland, 2, 0).unwrap();
    board.update_score(&spain, 1, 1).unwrap();

    board.finish(&poland).unwrap();
    let summary = board.summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].home_team(), "Spain");

    board.finish(&spain).unwrap();
    assert!(board.summary().is_empty());

    for id in [&poland, &spain] {
        assert_eq!(board.finish(id).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(board.update_score(id, 1, 1).unwrap_err().kind(), ErrorKind::NotFound);
    }
}

#[test]
fn rematch_after_finish_gets_fresh_id() {
    let (mut board, clock) = board();
    let first = start(&mut board, &clock, "Mexico", "Canada");
    board.update_score(&first, 1, 0).unwrap();
    board.finish(&first).unwrap();

    let second = start(&mut board, &clock, "Mexico", "Canada");
    assert_ne!(first, second);
    assert_eq!(board.get(&second).unwrap().score(), Score::new(0, 0));
}

#[test]
fn error_kinds_are_distinguishable() {
    let (mut board, _clock) = board();
    let id = board.start("Mexico", "Canada").unwrap();

    let kinds = [
        board.start("Mexico", "mexico").unwrap_err().kind(),
        board.finish("missing").unwrap_err().kind(),
        board.update_score(&id, 0.5, 0).unwrap_err().kind(),
    ];
    assert_eq!(
        kinds,
        [ErrorKind::Validation, ErrorKind::NotFound, ErrorKind::InvalidScore]
    );
}
