//! Scoring for a single finished game.
//!
//! The winner collects the ordinal value of every card left in the loser's
//! hand (ace 1 through king 13). Unfinished games score nothing.

use crate::action::Side;
use crate::card::Card;
use crate::state::GameSnapshot;

/// Sum of card ordinals in `hand`.
pub fn penalty_points(hand: &[Card]) -> u32 {
    hand.iter().map(|card| u32::from(card.ordinal())).sum()
}

/// Points earned by the winner of a finished game, if there is one.
pub fn winner_points(state: &GameSnapshot) -> Option<(Side, u32)> {
    let winner = state.winner?;
    Some((winner, penalty_points(state.hand(winner.other()))))
}
