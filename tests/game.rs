//! Live play integration tests.

use dartrs::{
    FixedClock, GameMode, Match, MatchOptions, MatchState, RosterEntry, SetupError, ThrowError,
    ThrowOutcome, TurnError,
};

fn roster(names: &[&str]) -> Vec<RosterEntry> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| RosterEntry::new(index.to_string(), *name))
        .collect()
}

fn new_match(mode: GameMode, target: i32, names: &[&str]) -> Match {
    let options = MatchOptions::default().with_mode(mode).with_target(target);
    Match::with_clock(options, &roster(names), FixedClock::new(1_000).with_step(1)).unwrap()
}

/// Throws every dart and confirms the round if it filled up.
fn play_round(game: &mut Match, darts: &[(u8, u8)]) -> ThrowOutcome {
    let mut outcome = ThrowOutcome::Continue;
    for &(segment, multiplier) in darts {
        outcome = game.throw_dart(segment, multiplier).unwrap();
    }
    if outcome == ThrowOutcome::AutoAdvance {
        game.confirm_round().unwrap();
    }
    outcome
}

#[test]
fn setup_errors() {
    let options = MatchOptions::default();
    assert_eq!(
        Match::with_clock(options, &[], FixedClock::new(0)).unwrap_err(),
        SetupError::NoPlayers
    );
    assert_eq!(
        Match::with_clock(options.with_target(0), &roster(&["Ann"]), FixedClock::new(0))
            .unwrap_err(),
        SetupError::InvalidTarget
    );

    let registry = roster(&["Ann", "Bo", "Cy"]);
    let picked = RosterEntry::select(&registry, &["2", "0"]).unwrap();
    assert_eq!(picked[0].name, "Cy");
    assert_eq!(picked[1].name, "Ann");
    assert_eq!(
        RosterEntry::select(&registry, &["9"]).unwrap_err(),
        SetupError::UnknownPlayer
    );
}

#[test]
fn players_start_at_mode_score() {
    let game = new_match(GameMode::Standard, 501, &["Ann", "Bo"]);
    assert!(game.players().iter().all(|p| p.score == 501));
    assert_eq!(game.state(), MatchState::AwaitingThrow);
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.started_at(), 1_000);

    let game = new_match(GameMode::CountUp, 501, &["Ann", "Bo"]);
    assert!(game.players().iter().all(|p| p.score == 0));
    assert!(game.players().iter().all(|p| p.darts_thrown == 0));
}

#[test]
fn basic_round_flow() {
    let mut game = new_match(GameMode::Standard, 501, &["Ann", "Bo"]);

    assert_eq!(game.throw_dart(20, 3).unwrap(), ThrowOutcome::Continue);
    assert_eq!(game.throw_dart(20, 3).unwrap(), ThrowOutcome::Continue);
    assert_eq!(game.throw_dart(20, 3).unwrap(), ThrowOutcome::AutoAdvance);
    assert_eq!(game.state(), MatchState::RoundComplete);
    assert_eq!(game.remaining(), 321);

    assert_eq!(game.throw_dart(1, 1).unwrap_err(), ThrowError::RoundFull);
    assert_eq!(game.round().len(), 3);

    let turn = game.confirm_round().unwrap();
    assert_eq!(turn.turn_number, 1);
    assert_eq!(turn.player_index, 0);
    assert_eq!(turn.player_name, "Ann");
    assert_eq!(turn.turn_score, 180);
    assert_eq!(turn.score_before, 501);
    assert_eq!(turn.score_after, 321);
    assert!(!turn.is_bust);

    let ann = game.player(0).unwrap();
    assert_eq!(ann.score, 321);
    assert_eq!(ann.darts_thrown, 3);
    assert_eq!(ann.history.len(), 3);

    assert_eq!(game.current_player().name, "Bo");
    assert!(game.round().is_empty());
    assert_eq!(game.state(), MatchState::AwaitingThrow);
}

#[test]
fn throws_carry_sequence_and_timestamp() {
    let mut game = new_match(GameMode::Standard, 301, &["Ann"]);
    game.throw_dart(5, 1).unwrap();
    game.throw_dart(1, 2).unwrap();

    let throws = game.round().throws();
    assert_eq!(throws[0].sequence, 1);
    assert_eq!(throws[1].sequence, 2);
    assert_eq!(throws[0].timestamp, 1_001);
    assert_eq!(throws[1].timestamp, 1_002);
}

#[test]
fn play_rotates_round_robin() {
    let mut game = new_match(GameMode::Standard, 301, &["Ann", "Bo", "Cy"]);
    let mut order = Vec::new();
    for _ in 0..4 {
        order.push(game.current_player_index());
        game.confirm_round().unwrap();
    }
    assert_eq!(order, [0, 1, 2, 0]);

    // a passed turn charges no darts and scores nothing
    assert_eq!(game.turns()[0].darts.len(), 0);
    assert_eq!(game.players()[0].score, 301);
    assert_eq!(game.players()[0].darts_thrown, 0);
}

#[test]
fn countdown_exact_finish() {
    let mut game = new_match(GameMode::Standard, 301, &["Ann"]);

    play_round(&mut game, &[(20, 3), (20, 3), (20, 3)]);
    assert_eq!(game.current_player().score, 121);
    assert_eq!(game.current_player().darts_thrown, 3);
    assert_eq!(
        game.checkout_suggestion().as_deref(),
        Some("Triple 20 Triple 11 Double 14")
    );

    assert_eq!(game.throw_dart(20, 3).unwrap(), ThrowOutcome::Continue);
    assert_eq!(game.throw_dart(19, 3).unwrap(), ThrowOutcome::Continue);
    assert_eq!(game.remaining(), 4);
    assert_eq!(game.checkout_suggestion().as_deref(), Some("Double 2"));

    let outcome = game.throw_dart(2, 2).unwrap();
    let result = outcome.result().unwrap();
    assert_eq!(result.winner_id, "0");
    assert_eq!(result.winner_index, 0);
    assert_eq!(result.target, 301);
    assert_eq!(result.started_at, 1_000);
    assert!(result.finished_at > result.started_at);

    let winner = result.winner().unwrap();
    assert_eq!(winner.score, 0);
    assert_eq!(winner.darts_thrown, 6);
    assert_eq!(winner.history.len(), 6);
    assert_eq!(result.turns.len(), 2);
    assert_eq!(result.turns[1].score_after, 0);

    assert_eq!(game.state(), MatchState::Finished);
    assert!(game.is_over());
    assert_eq!(game.result(), Some(result));
    assert!(game.round().is_empty());
}

/// Brings a single player in a 301 match down to 40.
fn match_on_forty() -> Match {
    let mut game = new_match(GameMode::Standard, 301, &["Ann"]);
    play_round(&mut game, &[(20, 3), (20, 3), (20, 3)]);
    game.throw_dart(20, 3).unwrap();
    game.throw_dart(7, 3).unwrap();
    game.confirm_round().unwrap();
    assert_eq!(game.current_player().score, 40);
    assert_eq!(game.current_player().darts_thrown, 5);
    game
}

#[test]
fn two_singles_check_out_forty() {
    let mut game = match_on_forty();
    assert_eq!(game.throw_dart(20, 1).unwrap(), ThrowOutcome::Continue);
    let outcome = game.throw_dart(20, 1).unwrap();

    let result = outcome.result().unwrap();
    assert_eq!(result.players[0].score, 0);
    assert_eq!(result.players[0].darts_thrown, 7);
}

#[test]
fn overshoot_busts_and_keeps_score() {
    let mut game = match_on_forty();

    let outcome = game.throw_dart(20, 3).unwrap();
    let turn = outcome.bust().unwrap();
    assert!(turn.is_bust);
    assert_eq!(turn.turn_score, 0);
    assert_eq!(turn.score_before, 40);
    assert_eq!(turn.score_after, 40);
    assert_eq!(turn.darts.len(), 1);
    assert!(turn.darts[0].is_bust_placeholder());

    let ann = game.current_player();
    assert_eq!(ann.score, 40);
    assert_eq!(ann.darts_thrown, 8);
    assert!(ann.history.last().unwrap().is_bust_placeholder());
    assert!(game.round().is_empty());
    assert_eq!(game.state(), MatchState::AwaitingThrow);
    assert_eq!(game.turns().len(), 3);
}

#[test]
fn leaving_one_busts_and_discards_the_busting_dart() {
    let mut game = new_match(GameMode::Standard, 301, &["Ann", "Bo"]);
    play_round(&mut game, &[(20, 3), (20, 3), (20, 3)]);
    play_round(&mut game, &[(1, 1), (1, 1), (1, 1)]);
    game.throw_dart(20, 3).unwrap();
    game.throw_dart(7, 3).unwrap();
    game.confirm_round().unwrap();
    game.confirm_round().unwrap();
    assert_eq!(game.current_player().score, 40);

    game.throw_dart(20, 1).unwrap();
    let outcome = game.throw_dart(19, 1).unwrap();
    let turn = outcome.bust().unwrap();
    assert_eq!(turn.darts.len(), 1);
    assert_eq!(turn.darts[0].total_value, 20);
    assert_eq!(turn.score_after, 40);

    let ann = game.player(0).unwrap();
    assert_eq!(ann.score, 40);
    assert_eq!(ann.darts_thrown, 3 + 2 + 3);
    assert_eq!(game.current_player().name, "Bo");
}

#[test]
fn count_up_finishes_past_target() {
    let mut game = new_match(GameMode::CountUp, 50, &["Ann"]);
    assert_eq!(game.remaining(), 50);
    assert_eq!(game.checkout_suggestion(), None);

    assert_eq!(game.throw_dart(20, 1).unwrap(), ThrowOutcome::Continue);
    assert_eq!(game.throw_dart(20, 1).unwrap(), ThrowOutcome::Continue);
    assert_eq!(game.remaining(), 10);

    let outcome = game.throw_dart(20, 1).unwrap();
    let result = outcome.result().unwrap();
    assert_eq!(result.players[0].score, 60);
    assert_eq!(result.players[0].darts_thrown, 3);
    assert_eq!(result.mode, GameMode::CountUp);
}

#[test]
fn count_up_rounds_accumulate() {
    let mut game = new_match(GameMode::CountUp, 301, &["Ann", "Bo"]);
    assert_eq!(
        play_round(&mut game, &[(20, 3), (20, 3), (20, 3)]),
        ThrowOutcome::AutoAdvance
    );
    assert_eq!(game.players()[0].score, 180);
    assert_eq!(game.turns()[0].score_after, 180);
    assert_eq!(game.current_player().name, "Bo");
    assert_eq!(game.checkout_suggestion(), None);
}

#[test]
fn rejected_throws_leave_round_untouched() {
    let mut game = new_match(GameMode::Standard, 301, &["Ann"]);
    game.throw_dart(20, 1).unwrap();

    assert_eq!(game.throw_dart(25, 3).unwrap_err(), ThrowError::TripleBull);
    assert_eq!(game.throw_dart(22, 1).unwrap_err(), ThrowError::InvalidSegment);
    assert_eq!(game.throw_dart(5, 0).unwrap_err(), ThrowError::InvalidMultiplier);

    assert_eq!(game.round().len(), 1);
    assert_eq!(game.remaining(), 281);
    assert_eq!(game.throw_dart(25, 2).unwrap(), ThrowOutcome::Continue);
    assert_eq!(game.round().throws()[1].sequence, 2);
}

#[test]
fn undo_only_touches_pending_round() {
    let mut game = new_match(GameMode::Standard, 301, &["Ann"]);
    assert_eq!(game.undo_last_dart().unwrap(), None);

    play_round(&mut game, &[(20, 1), (20, 1), (20, 1)]);
    game.throw_dart(5, 1).unwrap();
    game.throw_dart(1, 1).unwrap();
    assert_eq!(game.throw_dart(19, 1).unwrap(), ThrowOutcome::AutoAdvance);

    let removed = game.undo_last_dart().unwrap().unwrap();
    assert_eq!(removed.segment, 19);
    assert_eq!(game.state(), MatchState::AwaitingThrow);
    assert_eq!(game.round().len(), 2);
    assert_eq!(game.turns().len(), 1);
    assert_eq!(game.current_player().score, 241);

    assert_eq!(game.throw_dart(18, 1).unwrap(), ThrowOutcome::AutoAdvance);
    assert_eq!(game.confirm_round().unwrap().turn_score, 24);
}

#[test]
fn abandoned_match_rejects_changes() {
    let mut game = new_match(GameMode::Standard, 301, &["Ann", "Bo"]);
    game.throw_dart(20, 1).unwrap();
    game.abandon();

    assert_eq!(game.state(), MatchState::Abandoned);
    assert!(game.round().is_empty());
    assert_eq!(game.result(), None);
    assert_eq!(game.throw_dart(20, 1).unwrap_err(), ThrowError::InvalidState);
    assert_eq!(game.confirm_round().unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.undo_last_dart().unwrap_err(), TurnError::InvalidState);
}

#[test]
fn finished_match_rejects_changes() {
    let mut game = new_match(GameMode::CountUp, 10, &["Ann"]);
    game.throw_dart(10, 1).unwrap();
    assert_eq!(game.state(), MatchState::Finished);

    assert_eq!(game.throw_dart(20, 1).unwrap_err(), ThrowError::InvalidState);
    assert_eq!(game.confirm_round().unwrap_err(), TurnError::InvalidState);
    assert_eq!(game.undo_last_dart().unwrap_err(), TurnError::InvalidState);

    game.abandon();
    assert_eq!(game.state(), MatchState::Finished);
}
