use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Side;
use crate::card::{Card, Suit};

/// Notification emitted by an accepted transition.
///
/// Events queue up inside the game until the front end drains them. The events
/// of the last accepted command also make up the snapshot's status message.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEvent {
    Started { first_discard: Card },
    CardPlayed { side: Side, card: Card },
    /// An eight was played by the human, who now has to name a suit.
    SuitChoiceRequired,
    SuitChosen { side: Side, suit: Suit },
    CardDrawn { side: Side, card: Card, playable: bool },
    /// Draw attempted on an empty stock; the turn passes.
    DrawForfeited { side: Side },
    TurnPassed { to: Side },
    /// The human has no playable card and should draw.
    MustDraw,
    /// The human has no playable card and the stock is empty; the turn is skipped.
    Stalemate,
    Won { winner: Side },
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Human => "You",
        Side::Computer => "Computer",
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Started { first_discard } => {
                write!(f, "New game started, {first_discard} turned up")
            }
            GameEvent::CardPlayed { side, card } => {
                write!(f, "{} played {card}", side_name(*side))
            }
            GameEvent::SuitChoiceRequired => write!(f, "Choose a suit"),
            GameEvent::SuitChosen { side, suit } => {
                write!(f, "{} chose {suit}", side_name(*side))
            }
            GameEvent::CardDrawn {
                side: Side::Human,
                card,
                playable,
            } => {
                if *playable {
                    write!(f, "You drew {card}, which can be played")
                } else {
                    write!(f, "You drew {card}")
                }
            }
            GameEvent::CardDrawn {
                side: Side::Computer,
                ..
            } => write!(f, "Computer drew a card"),
            GameEvent::DrawForfeited { side } => {
                write!(f, "Stock is empty, {} skipped a turn", side_name(*side))
            }
            GameEvent::TurnPassed { to: Side::Human } => write!(f, "Your turn"),
            GameEvent::TurnPassed { to: Side::Computer } => write!(f, "Computer is thinking"),
            GameEvent::MustDraw => write!(f, "No playable cards, you must draw"),
            GameEvent::Stalemate => {
                write!(f, "No playable cards and the stock is empty, turn skipped")
            }
            GameEvent::Won { winner: Side::Human } => write!(f, "You win!"),
            GameEvent::Won {
                winner: Side::Computer,
            } => write!(f, "Computer wins!"),
        }
    }
}
