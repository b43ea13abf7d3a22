#![allow(dead_code)]

use std::collections::HashSet;

use crazy_eights::{Card, Game, GameError, Rank, Side, Suit, full_deck};

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Lays out a deck so the deal hands out exactly `human` and `computer`,
/// turns up `discard` and leaves `stock_top` on top of the stock. The rest of
/// the canonical deck follows in order.
pub fn forced_deck(human: &[Card], computer: &[Card], discard: Card, stock_top: &[Card]) -> Vec<Card> {
    assert_eq!(human.len(), computer.len(), "both hands must be the same size");
    assert!(!discard.is_eight(), "an eight would be skipped as first discard");
    let mut deck = Vec::with_capacity(52);
    deck.extend_from_slice(human);
    deck.extend_from_slice(computer);
    deck.push(discard);
    deck.extend_from_slice(stock_top);
    for card in full_deck() {
        if !deck.contains(&card) {
            deck.push(card);
        }
    }
    deck
}

pub fn started_game(
    human: &[Card],
    computer: &[Card],
    discard: Card,
    stock_top: &[Card],
) -> Result<Game, GameError> {
    let deck = forced_deck(human, computer, discard, stock_top);
    let mut game = Game::builder()
        .with_hand_size(human.len())
        .with_deck(deck)
        .build()?;
    game.start()?;
    Ok(game)
}

/// Asserts every one of the 52 cards sits in exactly one place.
pub fn assert_conserved(game: &Game) {
    let all: Vec<Card> = game
        .stock()
        .chain(game.hand(Side::Human).iter().copied())
        .chain(game.hand(Side::Computer).iter().copied())
        .chain(game.snapshot().discard_pile)
        .collect();
    let distinct: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(all.len(), 52);
    assert_eq!(distinct.len(), 52);
}
