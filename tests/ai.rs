//! Computer opponent tests.

mod common;

use std::collections::HashSet;

use common::{arrange, card};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use speedrs::{AiTick, Card, Difficulty, Game, GameOptions, Move, MoveRejected, Player, Suit, choose_move};

const NINE_AND_TWO: [Card; 2] = [card(Suit::Clubs, 9), card(Suit::Spades, 2)];

const HUMAN_HAND: [Card; 5] = [
    card(Suit::Hearts, 4),
    card(Suit::Diamonds, 4),
    card(Suit::Clubs, 6),
    card(Suit::Spades, 6),
    card(Suit::Diamonds, 12),
];

/// Ten then Jack chains onto the nine; the eight strands the ten and Jack.
fn branching_position(options: GameOptions) -> Game {
    arrange(
        options,
        &HUMAN_HAND,
        &[
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 10),
            card(Suit::Hearts, 11),
        ],
        NINE_AND_TWO,
        [15, 15],
    )
}

#[test]
fn hard_prefers_the_move_that_empties_the_hand_faster() {
    let game = branching_position(GameOptions::default());
    let ten_on_nine = Move {
        card: card(Suit::Hearts, 10),
        center: 0,
    };

    assert_eq!(game.legal_moves(Player::Ai).len(), 2);
    for seed in 0..32 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert_eq!(
            choose_move(game.table(), Difficulty::Hard, &mut rng),
            Some(ten_on_nine)
        );
    }
    assert_eq!(game.ai_move(Difficulty::Hard), Some(ten_on_nine));
}

#[test]
fn medium_takes_the_first_legal_move() {
    let game = branching_position(GameOptions::default());

    assert_eq!(
        game.ai_move(Difficulty::Medium),
        Some(Move {
            card: card(Suit::Diamonds, 8),
            center: 0,
        })
    );
}

#[test]
fn hard_breaks_clearing_ties_by_follow_up_count() {
    let game = arrange(
        GameOptions::default(),
        &HUMAN_HAND,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Hearts, 11),
            card(Suit::Diamonds, 3),
        ],
        NINE_AND_TWO,
        [15, 15],
    );

    assert_eq!(
        game.ai_move(Difficulty::Hard),
        Some(Move {
            card: card(Suit::Hearts, 10),
            center: 0,
        })
    );
}

#[test]
fn easy_picks_among_all_legal_moves() {
    let game = branching_position(GameOptions::default());
    let legal = game.legal_moves(Player::Ai);

    let picked: HashSet<Move> = (0..64)
        .filter_map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            choose_move(game.table(), Difficulty::Easy, &mut rng)
        })
        .collect();

    assert!(picked.iter().all(|mv| legal.contains(mv)));
    assert_eq!(picked.len(), legal.len());
}

#[test]
fn stuck_ai_has_no_move() {
    let game = arrange(
        GameOptions::default(),
        &HUMAN_HAND,
        &[card(Suit::Hearts, 5), card(Suit::Clubs, 12)],
        NINE_AND_TWO,
        [15, 15],
    );

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(game.ai_move(difficulty), None);
    }
}

#[test]
fn polling_does_not_change_the_game() {
    let game = branching_position(GameOptions::default());
    let before = game.table().clone();

    let first = game.ai_move(Difficulty::Easy);
    for _ in 0..10 {
        assert_eq!(game.ai_move(Difficulty::Easy), first);
    }
    assert_eq!(game.table(), &before);
    assert_eq!(game.revision(), 0);
}

#[test]
fn tick_plays_the_chosen_move() {
    let mut game = branching_position(GameOptions::default().with_difficulty(Difficulty::Hard));

    let tick = game.ai_tick().unwrap();
    let AiTick::Played(result) = tick else {
        panic!("expected a play, got {tick:?}");
    };
    assert_eq!(result.card, card(Suit::Hearts, 10));
    assert_eq!(game.table().center_top(0), Some(card(Suit::Hearts, 10)));
    assert_eq!(game.table().hand(Player::Ai).len(), 2);
}

#[test]
fn tick_draws_when_nothing_is_playable() {
    let mut game = arrange(
        GameOptions::default(),
        &HUMAN_HAND,
        &[card(Suit::Hearts, 5), card(Suit::Clubs, 12)],
        NINE_AND_TWO,
        [15, 15],
    );
    let next = game.table().draw_pile(Player::Ai).top().unwrap();

    assert_eq!(game.ai_tick().unwrap(), AiTick::Drew(next));
    assert_eq!(game.table().hand(Player::Ai).len(), 3);
}

#[test]
fn tick_idles_with_a_full_stuck_hand() {
    let mut game = arrange(
        GameOptions::default(),
        &HUMAN_HAND,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 12),
            card(Suit::Diamonds, 5),
            card(Suit::Spades, 12),
            card(Suit::Hearts, 6),
        ],
        NINE_AND_TWO,
        [15, 15],
    );

    assert_eq!(game.ai_tick().unwrap(), AiTick::Idle);
    assert_eq!(game.revision(), 0);
}

#[test]
fn tick_can_win_the_game() {
    let ten = card(Suit::Diamonds, 10);
    let mut game = arrange(
        GameOptions::default(),
        &HUMAN_HAND,
        &[ten],
        NINE_AND_TWO,
        [15, 0],
    );

    let tick = game.ai_tick().unwrap();
    assert!(matches!(tick, AiTick::Played(result) if result.card == ten));
    assert_eq!(game.status(), speedrs::Status::Win(Player::Ai));
    assert_eq!(game.ai_move(Difficulty::Easy), None);
    assert_eq!(game.ai_tick().unwrap_err(), MoveRejected::GameOver);
}
