use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit};

/// The two seats at the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Action available to a side during its turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from hand onto the discard pile.
    Play(Card),
    /// Take the top card of the stock (or forfeit the turn if it is empty).
    Draw,
    /// Name the suit to follow after an eight.
    ChooseSuit(Suit),
}
