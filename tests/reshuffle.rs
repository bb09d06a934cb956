//! Stuck detection, the center reshuffle, and invariant checks.

mod common;

use common::{arrange, card};
use speedrs::{
    Card, DealError, Deck, Game, GameOptions, InvariantViolation, MoveRejected, Phase, Player,
    ReshuffleError, Status, Suit, Table, rules,
};

const HUMAN_HAND: [Card; 5] = [
    card(Suit::Hearts, 2),
    card(Suit::Diamonds, 2),
    card(Suit::Clubs, 4),
    card(Suit::Spades, 12),
    card(Suit::Hearts, 13),
];

const AI_HAND: [Card; 5] = [
    card(Suit::Hearts, 11),
    card(Suit::Diamonds, 11),
    card(Suit::Clubs, 5),
    card(Suit::Spades, 5),
    card(Suit::Diamonds, 3),
];

const SEVEN_AND_NINE: [Card; 2] = [card(Suit::Spades, 7), card(Suit::Clubs, 9)];

fn stuck(draw_sizes: [usize; 2], options: GameOptions) -> Game {
    arrange(options, &HUMAN_HAND, &AI_HAND, SEVEN_AND_NINE, draw_sizes)
}

fn someone_can_move(game: &Game) -> bool {
    Player::BOTH
        .iter()
        .any(|&player| rules::has_legal_move(game.table(), player))
}

#[test]
fn poll_detects_stuck_players() {
    let mut game = stuck([15, 15], GameOptions::default());

    assert!(rules::both_stuck(game.table()));
    assert_eq!(game.status(), Status::InProgress);
    assert!(game.poll_stuck());
    assert_eq!(game.status(), Status::Stuck);
    assert_eq!(game.phase(), Phase::Stuck);

    assert_eq!(
        game.attempt_move(Player::Human, card(Suit::Clubs, 4), 0)
            .unwrap_err(),
        MoveRejected::NotAdjacent
    );
}

#[test]
fn poll_is_false_while_a_move_exists() {
    let mut game = arrange(
        GameOptions::default(),
        &[card(Suit::Hearts, 8)],
        &AI_HAND,
        SEVEN_AND_NINE,
        [15, 15],
    );

    assert!(!game.poll_stuck());
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::NotStuck);
}

#[test]
fn reshuffle_reseeds_centers_and_conserves_cards() {
    let mut game = stuck([15, 15], GameOptions::default());
    assert!(game.poll_stuck());

    let status = game.reshuffle().unwrap();

    assert_eq!(status, Status::InProgress);
    assert_eq!(game.phase(), Phase::AwaitingMove);
    assert!(someone_can_move(&game));

    let table = game.table();
    assert_eq!(table.card_count(), 52);
    assert!(game.check_invariants().is_ok());
    assert_eq!(table.center(0).unwrap().len(), 1);
    assert_eq!(table.center(1).unwrap().len(), 1);
    assert_eq!(
        table.draw_pile(Player::Human).len() + table.draw_pile(Player::Ai).len(),
        40
    );
    assert_eq!(table.hand(Player::Human).cards(), &HUMAN_HAND);
    assert_eq!(table.hand(Player::Ai).cards(), &AI_HAND);
    assert_eq!(game.revision(), 1);
}

#[test]
fn reshuffle_pulls_a_playable_card_from_a_draw_pile() {
    // Only the two center tops are pooled and neither fits any hand card.
    let mut game = stuck([20, 20], GameOptions::default());
    assert!(game.poll_stuck());

    assert_eq!(game.reshuffle().unwrap(), Status::InProgress);

    let table = game.table();
    assert!(someone_can_move(&game));
    assert_eq!(table.card_count(), 52);
    assert!(game.check_invariants().is_ok());
    assert_eq!(
        table.draw_pile(Player::Human).len() + table.draw_pile(Player::Ai).len(),
        40
    );
    let tops = table.center_tops();
    assert!(
        tops.contains(&Some(card(Suit::Spades, 7))) || tops.contains(&Some(card(Suit::Clubs, 9)))
    );
}

#[test]
fn reshuffle_is_reproducible_from_the_seed() {
    let mut a = stuck([15, 15], GameOptions::default());
    let mut b = stuck([15, 15], GameOptions::default());
    a.poll_stuck();
    b.poll_stuck();

    a.reshuffle().unwrap();
    b.reshuffle().unwrap();

    assert_eq!(a.table(), b.table());
}

#[test]
fn drawing_can_release_a_stuck_game() {
    let mut game = arrange(
        GameOptions::default(),
        &HUMAN_HAND[..4],
        &AI_HAND,
        SEVEN_AND_NINE,
        [15, 15],
    );
    assert!(game.poll_stuck());

    game.draw(Player::Human).unwrap();

    let still_stuck = rules::both_stuck(game.table());
    assert_eq!(game.phase() == Phase::Stuck, still_stuck);
}

#[test]
fn reshuffle_after_game_over_is_rejected() {
    let mut game = arrange(
        GameOptions::default(),
        &[],
        &AI_HAND,
        SEVEN_AND_NINE,
        [0, 15],
    );

    assert_eq!(game.status(), Status::Win(Player::Human));
    assert!(!game.poll_stuck());
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::GameOver);
}

#[test]
fn malformed_tables_are_refused() {
    let deck = Deck::ordered();
    let cards = deck.cards();

    let duplicated = Table::from_piles(
        [cards[..20].to_vec(), cards[20..40].to_vec()],
        [cards[40..45].to_vec(), cards[45..50].to_vec()],
        [vec![cards[50]], vec![cards[50]]],
    );
    assert_eq!(
        Game::with_table(duplicated, GameOptions::default(), 1).unwrap_err(),
        InvariantViolation::DuplicateCard(cards[50])
    );

    let short = Table::from_piles(
        [cards[..20].to_vec(), cards[20..40].to_vec()],
        [cards[40..45].to_vec(), cards[45..50].to_vec()],
        [vec![cards[50]], Vec::new()],
    );
    assert_eq!(
        Game::with_table(short, GameOptions::default(), 1).unwrap_err(),
        InvariantViolation::EmptyCenter(1)
    );

    let missing = Table::from_piles(
        [cards[..20].to_vec(), cards[20..39].to_vec()],
        [cards[40..45].to_vec(), cards[45..50].to_vec()],
        [vec![cards[50]], vec![cards[51]]],
    );
    assert_eq!(
        Game::with_table(missing, GameOptions::default(), 1).unwrap_err(),
        InvariantViolation::CardCount {
            expected: 52,
            found: 51,
        }
    );
}

#[test]
fn malformed_decks_are_refused() {
    let mut cards = Deck::ordered().cards().to_vec();
    cards[0] = Card::new(Suit::Hearts, 14);
    assert_eq!(
        Deck::from_cards(cards).unwrap_err(),
        InvariantViolation::InvalidRank(14)
    );

    let mut cards = Deck::ordered().cards().to_vec();
    cards.pop();
    assert_eq!(
        Deck::from_cards(cards).unwrap_err(),
        InvariantViolation::CardCount {
            expected: 52,
            found: 51,
        }
    );

    assert_eq!(Deck::from_seed(5).unwrap(), Deck::from_seed(5).unwrap());
    assert_eq!(Deck::from_seed(5).unwrap().len(), 52);

    let bad_layout = GameOptions::default().with_draw_pile_size(30);
    assert_eq!(
        Game::new(bad_layout, 1).unwrap_err(),
        DealError::InvalidLayout
    );
}
