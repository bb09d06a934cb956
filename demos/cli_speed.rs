//! CLI Speed example.
//!
//! Run with `cargo run --example cli_speed -- hard` to pick a difficulty.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use speedrs::{
    AiTick, Card, Difficulty, Game, GameOptions, PileKind, Player, Status, Suit, Table,
};

fn main() {
    println!("Speed CLI example (type 'q' to quit)");

    let difficulty = match std::env::args().nth(1).as_deref() {
        Some("easy") => Difficulty::Easy,
        Some("hard") => Difficulty::Hard,
        _ => Difficulty::Medium,
    };
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default()
        .with_difficulty(difficulty)
        .with_ai_interval(difficulty.suggested_interval());

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };
    println!("Difficulty {difficulty:?}, seed {seed}");

    while !game.is_over() {
        print_table(game.table());
        if game.poll_stuck() {
            println!("Neither player can move. Type 'c' to reshuffle the centers.");
        }

        let input = prompt_line("[p <card> <pile>]play [d]raw [c]an't play [q]uit: ");
        let mut words = input.split_whitespace();
        match words.next() {
            Some("p" | "play") => {
                let card = words.next().map(str::parse::<Card>);
                let pile = words.next().map(str::parse::<usize>);
                match (card, pile) {
                    (Some(Ok(card)), Some(Ok(pile))) => {
                        if let Err(err) = game.attempt_move(Player::Human, card, pile) {
                            println!("Move error: {err}");
                            continue;
                        }
                    }
                    _ => {
                        println!("Usage: p 8H 0");
                        continue;
                    }
                }
            }
            Some("d" | "draw") => match game.draw(Player::Human) {
                Ok(card) => println!("You drew {}", format_card(card)),
                Err(err) => {
                    println!("Draw error: {err}");
                    continue;
                }
            },
            Some("c") => {
                if !game.poll_stuck() {
                    println!("Somebody can still move.");
                    continue;
                }
                match game.reshuffle() {
                    Ok(status) => println!("Centers reshuffled ({status:?})."),
                    Err(err) => println!("Reshuffle error: {err}"),
                }
            }
            Some("q" | "quit") => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        }

        if game.is_over() {
            break;
        }
        match game.ai_tick() {
            Ok(AiTick::Played(result)) => println!(
                "Computer plays {} on pile {}",
                format_card(result.card),
                result.center
            ),
            Ok(AiTick::Drew(_)) => println!("Computer draws a card"),
            Ok(AiTick::Idle) => {}
            Err(err) => println!("Computer error: {err}"),
        }
    }

    print_table(game.table());
    match game.status() {
        Status::Win(Player::Human) => println!("You win!"),
        Status::Win(Player::Ai) => println!("The computer wins."),
        Status::Tie => println!("It's a tie."),
        Status::InProgress | Status::Stuck => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(table: &Table) {
    let ai = Player::Ai;
    println!(
        "\nComputer: draw {} | hand {}",
        table.draw_pile(ai).len(),
        format_pile(table, PileKind::Hand(ai))
    );
    for index in 0..speedrs::CENTER_PILES {
        println!(
            "Pile {index}: {} ({} cards)",
            format_pile(table, PileKind::Center(index)),
            table.center(index).map_or(0, speedrs::Pile::len)
        );
    }
    println!(
        "You:      draw {} | hand {}\n",
        table.draw_pile(Player::Human).len(),
        format_pile(table, PileKind::Hand(Player::Human))
    );
}

fn format_pile(table: &Table, kind: PileKind) -> String {
    let Some(pile) = table.pile(kind) else {
        return String::new();
    };
    if pile.is_empty() {
        return "(empty)".to_string();
    }

    let shown: Vec<String> = pile
        .cards()
        .iter()
        .rev()
        .enumerate()
        .filter_map(|(depth, &card)| match kind {
            PileKind::Center(_) if depth > 0 => None,
            _ if kind.is_face_up(depth) => Some(format_card(card)),
            _ => Some("??".to_string()),
        })
        .collect();
    shown.join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
