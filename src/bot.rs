use crate::action::Action;
use crate::state::GameSnapshot;

/// Interface for anything that can take a seat at the table.
///
/// Bots are only asked on their own turn, so `state.turn_owner` is the side
/// they play for. `legal_actions` is never empty.
pub trait Bot {
    fn select_action(&mut self, state: &GameSnapshot, legal_actions: &[Action]) -> Action;
}
