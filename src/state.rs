use serde::{Deserialize, Serialize};

use crate::action::Side;
use crate::card::{Card, Suit};
use crate::rules::is_playable;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    /// Normal turn in progress for the turn owner.
    AwaitingPlay,
    /// The human played an eight and must name a suit before play continues.
    AwaitingSuitChoice,
    Finished,
}

/// Read-only copy of the game state handed to the presentation layer and bots.
///
/// Both hands are visible; a front end decides what to reveal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Incremented by every accepted command.
    pub version: u64,
    pub phase: Phase,
    pub turn_owner: Side,
    pub human_hand: Vec<Card>,
    pub computer_hand: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub active_suit: Option<Suit>,
    pub stock_count: usize,
    pub winner: Option<Side>,
    /// Advisory: the human holds no playable card and should draw.
    pub must_draw: bool,
    pub status_message: String,
}

impl GameSnapshot {
    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Human => &self.human_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Whether `card` can be played right now, ignoring whose turn it is.
    pub fn is_playable(&self, card: Card) -> bool {
        match self.active_suit {
            Some(suit) => is_playable(card, self.top_discard(), suit),
            None => false,
        }
    }
}
