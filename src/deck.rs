//! Shuffling and the opening deal.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::GameError;

/// Result of the opening deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub human_hand: Vec<Card>,
    pub computer_hand: Vec<Card>,
    /// Remaining stock, top card at the front.
    pub stock: VecDeque<Card>,
    pub first_discard: Card,
}

/// Returns a uniformly random permutation of `cards` without touching the input.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Deals `hand_size` cards to the human, the next `hand_size` to the computer,
/// then turns up the first non-eight left in the deck as the starting discard.
/// When only eights remain, the first remaining card is used regardless.
pub fn deal_initial(deck: Vec<Card>, hand_size: usize) -> Result<Deal, GameError> {
    if deck.len() <= hand_size * 2 {
        return Err(GameError::InvalidConfiguration(
            "deck does not contain enough cards to deal both hands and a discard",
        ));
    }
    let mut stock: VecDeque<Card> = deck.into();
    let human_hand: Vec<Card> = stock.drain(..hand_size).collect();
    let computer_hand: Vec<Card> = stock.drain(..hand_size).collect();

    let discard_index = stock.iter().position(|card| !card.is_eight()).unwrap_or(0);
    let first_discard = stock.remove(discard_index).ok_or(GameError::InvalidConfiguration(
        "deck exhausted while turning up the first discard",
    ))?;

    Ok(Deal {
        human_hand,
        computer_hand,
        stock,
        first_discard,
    })
}
