//! Crazy Eights rule engine: a human plays the computer, first empty hand wins.
//!
//! The [`Game`] owns all state and exposes one method per command; the
//! presentation layer redraws from [`GameSnapshot`] and listens to
//! [`GameEvent`]s.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod policy;
pub mod rules;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, Side};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{HeuristicBot, HumanBot, RandomBot};
pub use crate::card::{Card, Rank, Suit, full_deck};
pub use crate::deck::{Deal, deal_initial, shuffle};
pub use crate::error::{GameError, InvalidAction};
pub use crate::event::GameEvent;
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::rules::{is_playable, playable_cards};
pub use crate::score::{penalty_points, winner_points};
pub use crate::state::{GameSnapshot, Phase};
pub use crate::visualize::{VisualOptions, describe_action, render_state};
