//! Legality of plays against the discard pile.

use crate::card::{Card, Suit};

/// Checks whether `card` may be played onto `top` while `active_suit` is in force.
///
/// Eights are always playable. Any other card must follow the active suit or
/// match the top card's rank. Without a top card nothing is playable.
#[inline]
pub fn is_playable(card: Card, top: Option<Card>, active_suit: Suit) -> bool {
    let Some(top) = top else {
        return false;
    };
    card.is_eight() || card.suit == active_suit || card.rank == top.rank
}

/// Playable cards of `hand`, in hand order.
pub fn playable_cards(hand: &[Card], top: Option<Card>, active_suit: Suit) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|card| is_playable(*card, top, active_suit))
        .collect()
}
