use crate::action::Action;
use crate::bot::Bot;
use crate::policy::{choose_suit, select_move};
use crate::state::GameSnapshot;

/// Seat driver that plays exactly like the built-in computer opponent.
///
/// Handy for putting the policy in the human's chair during batch runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for HeuristicBot {
    fn select_action(&mut self, state: &GameSnapshot, legal_actions: &[Action]) -> Action {
        let hand = state.hand(state.turn_owner);
        let wanted = if legal_actions
            .iter()
            .any(|action| matches!(action, Action::ChooseSuit(_)))
        {
            Action::ChooseSuit(choose_suit(hand))
        } else {
            match state.active_suit {
                Some(suit) => select_move(hand, state.top_discard(), suit),
                None => Action::Draw,
            }
        };
        if legal_actions.contains(&wanted) {
            wanted
        } else {
            legal_actions.first().copied().unwrap_or(wanted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Side;
    use crate::card::{Card, Rank, Suit};
    use crate::state::Phase;

    fn snapshot(hand: Vec<Card>, top: Card, suit: Suit, phase: Phase) -> GameSnapshot {
        GameSnapshot {
            version: 1,
            phase,
            turn_owner: Side::Human,
            human_hand: hand,
            computer_hand: Vec::new(),
            discard_pile: vec![top],
            active_suit: Some(suit),
            stock_count: 10,
            winner: None,
            must_draw: false,
            status_message: String::new(),
        }
    }

    #[test]
    fn follows_policy_for_plays() {
        let hand = vec![
            Card::new(Rank::Eight, Suit::Spades),
            Card::new(Rank::Three, Suit::Hearts),
        ];
        let state = snapshot(
            hand.clone(),
            Card::new(Rank::Five, Suit::Hearts),
            Suit::Hearts,
            Phase::AwaitingPlay,
        );
        let legal = [Action::Play(hand[0]), Action::Play(hand[1]), Action::Draw];
        let chosen = HeuristicBot::new().select_action(&state, &legal);
        assert_eq!(chosen, Action::Play(hand[1]));
    }

    #[test]
    fn names_suit_from_remaining_hand() {
        let hand = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Three, Suit::Hearts),
        ];
        let state = snapshot(
            hand,
            Card::new(Rank::Eight, Suit::Spades),
            Suit::Hearts,
            Phase::AwaitingSuitChoice,
        );
        let legal: Vec<Action> = Suit::ALL.into_iter().map(Action::ChooseSuit).collect();
        let chosen = HeuristicBot::new().select_action(&state, &legal);
        assert_eq!(chosen, Action::ChooseSuit(Suit::Clubs));
    }
}
