use thiserror::Error;

use crate::action::Side;
use crate::card::{Card, Suit};
use crate::state::Phase;

/// Reasons a command is rejected. A rejected command leaves the game untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("command is not valid while the game is {0:?}")]
    WrongPhase(Phase),
    #[error("it is not the {0:?} side's turn")]
    NotPlayersTurn(Side),
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of invalid plays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("{card} does not follow {active_suit} or the top card's rank")]
    Unplayable { card: Card, active_suit: Suit },
}
