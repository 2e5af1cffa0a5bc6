//! CLI darts scorer example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

#![expect(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use dartrs::{
    GameMode, Match, MatchOptions, MatchState, RosterEntry, STANDARD_TARGETS, Throw, ThrowError,
    ThrowOutcome, Turn,
};

fn main() {
    env_logger::init();
    println!("Darts CLI example (type 'q' to quit)");

    let mut roster = Vec::new();
    loop {
        let name = prompt_line(&format!("Player {} name (empty to start): ", roster.len() + 1));
        if name.is_empty() {
            break;
        }
        roster.push(RosterEntry::new(roster.len().to_string(), name));
    }

    let mode = prompt_line("Mode: [s]tandard or [c]ount up? ").to_lowercase();
    let mode = match mode.as_str() {
        "c" | "count" | "count up" => GameMode::CountUp,
        _ => GameMode::Standard,
    };

    let targets = STANDARD_TARGETS.map(|t| t.to_string()).join("/");
    let Some(target) = prompt_number(&format!("Target ({targets}): ")) else {
        return;
    };

    let options = MatchOptions::default().with_mode(mode).with_target(target);
    let mut game = match Match::new(options, &roster) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    while !game.is_over() {
        print_board(&game);

        let input = prompt_line(&format!("{} > ", game.current_player().name)).to_lowercase();
        let mut words = input.split_whitespace();
        match words.next() {
            None => {}
            Some("q" | "quit") => {
                game.abandon();
                println!("Match abandoned.");
            }
            Some("u" | "undo") => match game.undo_last_dart() {
                Ok(Some(dart)) => println!("Removed {dart}"),
                Ok(None) => println!("Nothing to undo."),
                Err(err) => println!("Undo error: {err}"),
            },
            Some("c" | "confirm") => match game.confirm_round() {
                Ok(turn) => println!("{}", format_turn(&turn)),
                Err(err) => println!("Confirm error: {err}"),
            },
            Some("h" | "history") => {
                for turn in game.turns() {
                    println!("{}", format_turn(turn));
                }
            }
            Some("x" | "delete") => {
                let Some(index) = words.next().and_then(parse_turn_index) else {
                    println!("Usage: x <turn number>");
                    continue;
                };
                match game.delete_turn(index) {
                    Ok(turn) => println!("Deleted turn {}", turn.turn_number),
                    Err(err) => println!("Delete error: {err}"),
                }
            }
            Some("e" | "edit") => {
                let Some(index) = words.next().and_then(parse_turn_index) else {
                    println!("Usage: e <turn number> <dart> [dart] [dart]");
                    continue;
                };
                let darts: Option<Vec<Throw>> = words
                    .map(|word| {
                        let (segment, multiplier) = parse_dart(word)?;
                        Throw::score(segment, multiplier, 1, 0).ok()
                    })
                    .collect();
                let Some(darts) = darts else {
                    println!("Could not read those darts.");
                    continue;
                };
                match game.edit_turn(index, darts) {
                    Ok(()) => println!("Turn {} updated.", index + 1),
                    Err(err) => println!("Edit error: {err}"),
                }
            }
            Some(word) => {
                let Some((segment, multiplier)) = parse_dart(word) else {
                    println!("Enter a dart like 20, D16, T19, 25, bull, or 0 for a miss.");
                    continue;
                };
                handle_throw(&mut game, segment, multiplier);
            }
        }
    }

    if game.state() == MatchState::Finished {
        print_board(&game);
    }
}

fn handle_throw(game: &mut Match, segment: u8, multiplier: u8) {
    match game.throw_dart(segment, multiplier) {
        Ok(ThrowOutcome::Continue) => {}
        Ok(ThrowOutcome::AutoAdvance) => {
            if let Ok(turn) = game.confirm_round() {
                println!("{}", format_turn(&turn));
            }
        }
        Ok(ThrowOutcome::Bust(turn)) => {
            println!("{}", colorize("BUST!", "31"));
            println!("{}", format_turn(&turn));
        }
        Ok(ThrowOutcome::Finish(result)) => {
            let winner = result.winner().map_or("?", |p| p.name.as_str());
            println!("{}", colorize(&format!("Game shot! {winner} wins."), "32"));
            for player in &result.players {
                println!(
                    "  {}: score {} in {} darts",
                    player.name, player.score, player.darts_thrown
                );
            }
        }
        Err(ThrowError::TripleBull) => println!("Triple bull doesn't exist!"),
        Err(ThrowError::RoundFull) => println!("Round is full. Confirm with 'c' or undo with 'u'."),
        Err(err) => println!("Throw error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_number(prompt: &str) -> Option<i32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn parse_turn_index(word: &str) -> Option<usize> {
    word.parse::<usize>().ok()?.checked_sub(1)
}

fn parse_dart(word: &str) -> Option<(u8, u8)> {
    match word {
        "bull" | "50" => return Some((25, 2)),
        "m" | "miss" => return Some((0, 1)),
        _ => {}
    }

    let (multiplier, number) = if let Some(rest) = word.strip_prefix('t') {
        (3, rest)
    } else if let Some(rest) = word.strip_prefix('d') {
        (2, rest)
    } else {
        (1, word)
    };
    number.parse::<u8>().ok().map(|segment| (segment, multiplier))
}

fn print_board(game: &Match) {
    println!();
    for (index, player) in game.players().iter().enumerate() {
        let marker = if index == game.current_player_index() {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:<12} {:>5} | {} darts",
            marker, player.name, player.score, player.darts_thrown
        );
    }

    if game.is_over() {
        return;
    }

    let round: Vec<String> = game.round().throws().iter().map(ToString::to_string).collect();
    println!("Round: [{}] To go: {}", round.join(" "), game.remaining());
    if let Some(suggestion) = game.checkout_suggestion() {
        println!("Aim for: {}", colorize(&suggestion, "32"));
    }
}

fn format_turn(turn: &Turn) -> String {
    let darts: Vec<String> = turn.darts.iter().map(ToString::to_string).collect();
    let line = format!(
        "Turn {}: {} [{}] {} -> {}",
        turn.turn_number,
        turn.player_name,
        darts.join(" "),
        turn.score_before,
        turn.score_after
    );
    if turn.is_bust {
        colorize(&line, "31")
    } else {
        line
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
