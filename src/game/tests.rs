use super::journal::{self, LogEntry};
use super::{Event, Game, Side};
use crate::book::TeamScorebook;
use crate::cell::{Base, Bases, ResultCode};
use crate::config::GameConfig;
use crate::error::ScoringError;
use crate::export::write_csv;
use crate::fielding::FieldingType;
use std::sync::Arc;

fn game() -> Game {
    Game::new(&GameConfig::default())
}

fn bat(game: &mut Game, row: usize, code: &str) {
    game.record_batting_result(Side::Away, row, 0, code).unwrap();
}

fn three_outs(game: &mut Game, side: Side, inning: usize) {
    for row in 0..3 {
        game.record_batting_result(side, row, inning, "K").unwrap();
    }
}

#[test]
fn batter_placement() {
    let cases = [
        ("K", Bases::default(), false, 1),
        ("ꓘ", Bases::default(), false, 1),
        ("BB", Bases::only(Base::First), false, 0),
        ("1B", Bases::only(Base::First), false, 0),
        ("2B", Bases::only(Base::Second), false, 0),
        ("3B", Bases::only(Base::Third), false, 0),
        ("HR", Bases::default(), true, 0),
    ];
    for (code, bases, scored, outs) in cases {
        let mut game = game();
        bat(&mut game, 0, code);
        let cell = game.book(Side::Away).cell(0, 0).unwrap().clone();
        assert_eq!(cell.batted_bases, bases, "{}", code);
        assert_eq!(cell.scored, scored, "{}", code);
        assert_eq!(cell.outs_contributed, outs, "{}", code);
        assert_eq!(cell.display(), code);
    }
}

#[test]
fn grand_slam() {
    let mut game = game();
    for row in 0..3 {
        bat(&mut game, row, "1B");
    }
    let bases = game.book(Side::Away).innings[0].bases;
    assert_eq!((bases.first, bases.second, bases.third), (Some(2), Some(1), Some(0)));

    bat(&mut game, 3, "HR");
    let book = game.team(Side::Away);
    for row in 0..4 {
        assert!(book.cell(row, 0).unwrap().scored, "row {}", row);
    }
    assert_eq!(book.cell(0, 0).unwrap().advances.last().unwrap().to_string(), "3-H");
    assert_eq!(book.cell(1, 0).unwrap().advances.last().unwrap().to_string(), "2-H");
    assert_eq!(book.cell(2, 0).unwrap().advances.last().unwrap().to_string(), "1-H");
    assert!(book.innings[0].bases.is_empty());
    assert_eq!(game.team_totals(Side::Away).runs, 4);
    assert_eq!(game.team_totals(Side::Away).hits, 4);
    assert_eq!(game.line_score(Side::Away), [4, 0, 0]);
    assert_eq!(game.team_totals(Side::Home).runs, 0);
}

#[test]
fn single_double_single() {
    let mut game = game();
    bat(&mut game, 0, "1B");
    bat(&mut game, 1, "2B");
    bat(&mut game, 2, "1B");

    let book = game.book(Side::Away);
    let advances = |row| {
        book.cell(row, 0)
            .unwrap()
            .advances
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    };
    assert_eq!(advances(0), ["1-3", "3-H"]);
    assert_eq!(advances(1), ["2-3"]);
    assert!(advances(2).is_empty());
    assert!(book.cell(0, 0).unwrap().scored);
    assert_eq!(book.innings[0].bases.third, Some(1));
    assert_eq!(book.innings[0].bases.first, Some(2));
    assert_eq!(game.team_totals(Side::Away).runs, 1);
}

#[test]
fn completing_an_inning() {
    let mut game = game();
    bat(&mut game, 0, "K");
    bat(&mut game, 1, "1B");
    bat(&mut game, 2, "ꓘ");
    assert_eq!(
        game.complete_inning(Side::Away, 0),
        Err(ScoringError::InningNotEligible { inning: 0, outs: 2 })
    );
    assert!(!game.book(Side::Away).is_complete(0));
    assert_eq!(game.active(), Side::Away);

    game.record_fielding_play(Side::Away, 3, 0, &[8], Some(FieldingType::Fly))
        .unwrap();
    assert_eq!(game.book(Side::Away).running_outs(3, 0), Ok(3));
    game.complete_inning(Side::Away, 0).unwrap();

    let book = game.book(Side::Away);
    assert!(book.is_complete(0));
    assert_eq!(book.next_batter, 4);
    assert_eq!(book.next_inning, 1);
    assert_eq!(game.active(), Side::Home);

    assert_eq!(
        game.record_batting_result(Side::Away, 5, 0, "HR"),
        Err(ScoringError::InningComplete(0))
    );
    assert_eq!(
        game.clear_cell(Side::Away, 0, 0),
        Err(ScoringError::InningComplete(0))
    );
    assert_eq!(
        game.complete_inning(Side::Away, 0),
        Err(ScoringError::InningComplete(0))
    );
}

#[test]
fn next_batter_wraps() {
    let mut game = game();
    for row in 6..9 {
        bat(&mut game, row, "K");
    }
    game.complete_inning(Side::Away, 0).unwrap();
    assert_eq!(game.book(Side::Away).next_batter, 0);
}

#[test]
fn rejected_changes_leave_no_trace() {
    let mut game = game();
    bat(&mut game, 0, "1B");
    let before = game.team(Side::Away);

    assert_eq!(
        game.record_batting_result(Side::Away, 1, 0, "4B"),
        Err(ScoringError::InvalidResultCode("4B".into()))
    );
    assert_eq!(
        game.record_fielding_play(Side::Away, 1, 0, &[], Some(FieldingType::Fly)),
        Err(ScoringError::InvalidSequence)
    );
    assert_eq!(
        game.record_fielding_play(Side::Away, 1, 0, &[6, 10], None),
        Err(ScoringError::InvalidFielder(10))
    );
    assert!(matches!(
        game.record_batting_result(Side::Away, 9, 0, "1B"),
        Err(ScoringError::CoordinateOutOfRange { row: 9, inning: 0, rows: 9, innings: 3 })
    ));
    assert!(matches!(
        game.mark_run(Side::Away, 0, 3),
        Err(ScoringError::CoordinateOutOfRange { inning: 3, .. })
    ));
    assert!(game.set_player(Side::Away, 12, "Nobody", "P").is_err());
    assert!(Arc::ptr_eq(&before, &game.team(Side::Away)));
}

#[test]
fn snapshots_are_stable() {
    let mut game = game();
    let before: Arc<TeamScorebook> = game.team(Side::Away);
    bat(&mut game, 0, "2B");
    assert!(before.cell(0, 0).unwrap().is_empty());
    assert_eq!(
        game.book(Side::Away).cell(0, 0).unwrap().result,
        Some(ResultCode::Double)
    );
}

#[test]
fn clearing_rolls_back_the_inning() {
    let mut game = game();
    bat(&mut game, 0, "1B");
    bat(&mut game, 1, "3B");
    assert!(game.book(Side::Away).cell(0, 0).unwrap().scored);

    game.clear_cell(Side::Away, 1, 0).unwrap();
    let book = game.book(Side::Away);
    assert!(book.cell(1, 0).unwrap().is_empty());
    assert!(!book.cell(0, 0).unwrap().scored);
    assert!(book.cell(0, 0).unwrap().advances.is_empty());
    assert_eq!(book.innings[0].bases.first, Some(0));
    assert_eq!(game.team_totals(Side::Away).runs, 0);
}

#[test]
fn manual_moves() {
    let mut game = game();
    assert_eq!(game.manual_advance(Side::Away, 0, 0), Ok(false));

    bat(&mut game, 0, "1B");
    bat(&mut game, 1, "BB");
    // the runner on first is stuck behind the one on second
    assert_eq!(game.manual_advance(Side::Away, 1, 0), Ok(false));
    assert_eq!(game.manual_advance(Side::Away, 0, 0), Ok(true));
    assert_eq!(game.book(Side::Away).innings[0].bases.third, Some(0));
    assert_eq!(
        game.book(Side::Away).cell(0, 0).unwrap().batted_bases,
        Bases::only(Base::Third)
    );

    // a route that doesn't start where the runner stands is noted but moves nobody
    game.record_advance(Side::Away, 1, 0, "2-3".parse().unwrap())
        .unwrap();
    assert_eq!(game.book(Side::Away).innings[0].bases.first, Some(1));
    game.record_advance(Side::Away, 1, 0, "1-2".parse().unwrap())
        .unwrap();
    assert_eq!(game.book(Side::Away).innings[0].bases.second, Some(1));

    game.mark_run(Side::Away, 0, 0).unwrap();
    let book = game.book(Side::Away);
    assert!(book.cell(0, 0).unwrap().scored);
    assert!(book.cell(0, 0).unwrap().batted_bases.is_empty());
    assert_eq!(book.innings[0].bases.third, None);
    assert_eq!(game.team_totals(Side::Away).runs, 1);

    game.record_advance(Side::Away, 1, 0, "2-H".parse().unwrap())
        .unwrap();
    assert!(game.book(Side::Away).cell(1, 0).unwrap().scored);
    assert!(game.book(Side::Away).innings[0].bases.is_empty());
    assert_eq!(game.line_score(Side::Away), [2, 0, 0]);
}

#[test]
fn growing_the_book() {
    let mut game = game();
    game.add_inning(Side::Home);
    game.add_player(Side::Home);
    game.set_player(Side::Home, 9, "R. Ortiz", "PH").unwrap();

    let book = game.book(Side::Home);
    assert_eq!(book.players(), 10);
    assert_eq!(book.inning_count(), 4);
    assert_eq!(book.lineup[9].name, "R. Ortiz");
    assert_eq!(game.book(Side::Away).players(), 9);
    game.record_batting_result(Side::Home, 9, 3, "HR").unwrap();
    assert_eq!(game.line_score(Side::Home), [0, 0, 0, 1]);
}

#[test]
fn box_score_after_an_inning() {
    let mut game = game();
    game.set_player(Side::Away, 0, "A. Carter", "CF").unwrap();
    bat(&mut game, 0, "HR");
    bat(&mut game, 1, "BB");
    three_outs(&mut game, Side::Away, 1);
    for row in 2..5 {
        bat(&mut game, row, "K");
    }
    // inning 1 is never completed, so it doesn't count
    game.complete_inning(Side::Away, 0).unwrap();

    let stats = game.game_stats(Side::Away, 0).unwrap();
    assert_eq!(stats.at_bats, 1);
    assert_eq!(stats.home_runs, 1);
    assert_eq!(stats.runs, 1);
    assert_eq!(game.game_stats(Side::Away, 1).unwrap().walks, 1);
    assert_eq!(game.game_stats(Side::Away, 1).unwrap().at_bats, 0);

    let csv = write_csv(&game.box_score(Side::Away).unwrap()).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Player,Pos,AB,R,H,HR,RBI,BB,SO,AVG"));
    assert_eq!(lines.next(), Some("A. Carter,CF,1,1,1,1,1,0,0,1.000"));
    assert_eq!(lines.next(), Some(",,0,0,0,0,0,1,0,--"));
    assert_eq!(lines.last(), Some("Totals,,4,1,1,1,1,1,3,.250"));
}

#[test]
fn events_from_json() {
    let events = journal::parse_events(
        r#"[
            {"type": "batting_result", "team": "away", "row": 0, "inning": 0, "code": "1B"},
            {"type": "fielding_play", "team": "away", "row": 1, "inning": 0, "fielders": [6, 4, 3], "play_type": "DP"},
            {"type": "advance", "team": "home", "row": 2, "inning": 1, "route": "2-H"},
            {"type": "complete_inning", "team": "away", "inning": 0},
            {"type": "add_player", "team": "home"}
        ]"#,
    )
    .unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(
        events[0],
        Event::BattingResult {
            team: Side::Away,
            row: 0,
            inning: 0,
            code: "1B".into(),
        }
    );
    assert_eq!(events[1].kind(), "fielding_play");
    assert!(matches!(
        &events[1],
        Event::FieldingPlay { fielders, play_type: Some(FieldingType::DoublePlay), .. } if *fielders == [6, 4, 3]
    ));
    assert!(matches!(&events[2], Event::Advance { route, .. } if route.to_string() == "2-H"));

    assert!(journal::parse_events(r#"[{"type": "advance", "team": "home", "row": 2, "inning": 1, "route": "3-1"}]"#).is_err());
}

#[test]
fn replay_keeps_a_journal() {
    let events = vec![
        Event::BattingResult {
            team: Side::Away,
            row: 0,
            inning: 0,
            code: "HR".into(),
        },
        Event::BattingResult {
            team: Side::Away,
            row: 1,
            inning: 0,
            code: "5B".into(),
        },
        Event::AddInning { team: Side::Home },
    ];
    let (game, log) = journal::replay(&GameConfig::default(), &events).unwrap();
    assert_eq!(log.len(), 3);
    assert!(!log[0].is_err());
    assert!(log[1].is_err());
    assert!(log[1].info().contains("5B"));
    assert!(log[0].info().contains("scored"));
    assert!(matches!(&log[2], LogEntry::Ok { patch, .. } if !patch.0.is_empty()));
    assert_eq!(game.team_totals(Side::Away).runs, 1);
    assert_eq!(game.book(Side::Home).inning_count(), 4);

    let mut game = Game::new(&GameConfig::default());
    let err = journal::apply_all(&mut game, &events).unwrap_err();
    assert_eq!(err.to_string(), "while processing event 1, type batting_result");
    assert_eq!(
        err.downcast_ref::<ScoringError>(),
        Some(&ScoringError::InvalidResultCode("5B".into()))
    );
    // everything before the bad event stays applied
    assert_eq!(game.team_totals(Side::Away).runs, 1);
}
