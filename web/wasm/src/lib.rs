use dartrs::{
    Clock, GameMode, Match, MatchOptions, MatchResult, MatchState, Player, RosterEntry, Throw,
    ThrowOutcome, Turn,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Reads the browser's wall clock.
#[derive(Debug, Clone, Copy)]
struct JsClock;

impl Clock for JsClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

#[wasm_bindgen]
pub struct WasmMatch {
    game: Match,
}

#[wasm_bindgen]
impl WasmMatch {
    #[wasm_bindgen(constructor)]
    pub fn new(names: Vec<String>, mode: &str, target: i32) -> Result<WasmMatch, JsValue> {
        let game = start(&names, mode, target)?;
        Ok(Self { game })
    }

    pub fn reset(&mut self, names: Vec<String>, mode: &str, target: i32) -> Result<(), JsValue> {
        self.game = start(&names, mode, target)?;
        Ok(())
    }

    pub fn throw_dart(&mut self, segment: u8, multiplier: u8) -> Result<JsValue, JsValue> {
        let outcome = self
            .game
            .throw_dart(segment, multiplier)
            .map_err(js_err)?;
        to_js_value(&JsThrowOutcome::from(outcome))
    }

    pub fn confirm_round(&mut self) -> Result<JsValue, JsValue> {
        let turn = self.game.confirm_round().map_err(js_err)?;
        to_js_value(&JsTurn::from(&turn))
    }

    pub fn undo_last_dart(&mut self) -> Result<bool, JsValue> {
        self.game
            .undo_last_dart()
            .map(|dart| dart.is_some())
            .map_err(js_err)
    }

    pub fn edit_turn(
        &mut self,
        index: u32,
        segments: Vec<u8>,
        multipliers: Vec<u8>,
    ) -> Result<(), JsValue> {
        if segments.len() != multipliers.len() {
            return Err(JsValue::from_str("segments and multipliers differ in length"));
        }

        let darts = segments
            .into_iter()
            .zip(multipliers)
            .map(|(segment, multiplier)| Throw::score(segment, multiplier, 1, 0))
            .collect::<Result<Vec<_>, _>>()
            .map_err(js_err)?;
        self.game.edit_turn(index as usize, darts).map_err(js_err)
    }

    pub fn delete_turn(&mut self, index: u32) -> Result<JsValue, JsValue> {
        let turn = self.game.delete_turn(index as usize).map_err(js_err)?;
        to_js_value(&JsTurn::from(&turn))
    }

    pub fn abandon(&mut self) {
        self.game.abandon();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = JsSnapshot {
            state: state_to_str(self.game.state()),
            mode: mode_to_str(self.game.options().mode),
            target: self.game.options().target,
            current_player: self.game.current_player_index() as u32,
            remaining: self.game.remaining(),
            checkout: self.game.checkout_suggestion(),
            round: self.game.round().throws().iter().map(JsThrow::from).collect(),
            players: self.game.players().iter().map(JsPlayer::from).collect(),
            turns: self.game.turns().iter().map(JsTurn::from).collect(),
            result: self.game.result().map(JsMatchResult::from),
        };
        to_js_value(&snapshot)
    }
}

fn start(names: &[String], mode: &str, target: i32) -> Result<Match, JsValue> {
    let mode = match mode {
        "Standard" => GameMode::Standard,
        "CountUp" => GameMode::CountUp,
        other => return Err(JsValue::from_str(&format!("unknown mode: {other}"))),
    };

    let roster: Vec<RosterEntry> = names
        .iter()
        .enumerate()
        .map(|(index, name)| RosterEntry::new(index.to_string(), name.clone()))
        .collect();
    let options = MatchOptions::default().with_mode(mode).with_target(target);
    Match::with_clock(options, &roster, JsClock).map_err(js_err)
}

#[derive(Serialize)]
struct JsSnapshot {
    state: &'static str,
    mode: &'static str,
    target: i32,
    current_player: u32,
    remaining: i32,
    checkout: Option<String>,
    round: Vec<JsThrow>,
    players: Vec<JsPlayer>,
    turns: Vec<JsTurn>,
    result: Option<JsMatchResult>,
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsThrowOutcome {
    Continue,
    AutoAdvance,
    Bust { turn: JsTurn },
    Finish { result: JsMatchResult },
}

impl From<ThrowOutcome> for JsThrowOutcome {
    fn from(outcome: ThrowOutcome) -> Self {
        match outcome {
            ThrowOutcome::Continue => Self::Continue,
            ThrowOutcome::AutoAdvance => Self::AutoAdvance,
            ThrowOutcome::Bust(turn) => Self::Bust {
                turn: JsTurn::from(&turn),
            },
            ThrowOutcome::Finish(result) => Self::Finish {
                result: JsMatchResult::from(&result),
            },
        }
    }
}

#[derive(Serialize)]
struct JsThrow {
    segment: u8,
    multiplier: u8,
    total_value: u8,
    sequence: u8,
    timestamp: f64,
    label: String,
}

impl From<&Throw> for JsThrow {
    fn from(dart: &Throw) -> Self {
        Self {
            segment: dart.segment,
            multiplier: dart.multiplier,
            total_value: dart.total_value,
            sequence: dart.sequence,
            timestamp: dart.timestamp as f64,
            label: dart.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsTurn {
    turn_number: u32,
    player_index: u32,
    player_name: String,
    darts: Vec<JsThrow>,
    turn_score: i32,
    score_before: i32,
    score_after: i32,
    is_bust: bool,
}

impl From<&Turn> for JsTurn {
    fn from(turn: &Turn) -> Self {
        Self {
            turn_number: turn.turn_number as u32,
            player_index: turn.player_index as u32,
            player_name: turn.player_name.clone(),
            darts: turn.darts.iter().map(JsThrow::from).collect(),
            turn_score: turn.turn_score,
            score_before: turn.score_before,
            score_after: turn.score_after,
            is_bust: turn.is_bust,
        }
    }
}

#[derive(Serialize)]
struct JsPlayer {
    id: String,
    name: String,
    score: i32,
    darts_thrown: u32,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            score: player.score,
            darts_thrown: player.darts_thrown,
        }
    }
}

#[derive(Serialize)]
struct JsMatchResult {
    winner_id: String,
    winner_index: u32,
    mode: &'static str,
    target: i32,
    started_at: f64,
    finished_at: f64,
    players: Vec<JsPlayer>,
    turns: Vec<JsTurn>,
}

impl From<&MatchResult> for JsMatchResult {
    fn from(result: &MatchResult) -> Self {
        Self {
            winner_id: result.winner_id.clone(),
            winner_index: result.winner_index as u32,
            mode: mode_to_str(result.mode),
            target: result.target,
            started_at: result.started_at as f64,
            finished_at: result.finished_at as f64,
            players: result.players.iter().map(JsPlayer::from).collect(),
            turns: result.turns.iter().map(JsTurn::from).collect(),
        }
    }
}

fn state_to_str(state: MatchState) -> &'static str {
    match state {
        MatchState::AwaitingThrow => "AwaitingThrow",
        MatchState::RoundComplete => "RoundComplete",
        MatchState::Finished => "Finished",
        MatchState::Abandoned => "Abandoned",
    }
}

fn mode_to_str(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Standard => "Standard",
        GameMode::CountUp => "CountUp",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
