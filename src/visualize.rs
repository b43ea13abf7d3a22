use std::fmt::Write;

use crate::action::{Action, Side};
use crate::card::Card;
use crate::state::{GameSnapshot, Phase};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// Print the computer's cards face up instead of just a count.
    pub reveal_computer_hand: bool,
    /// Number of discard cards shown under the top card.
    pub discard_history: usize,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            reveal_computer_hand: false,
            discard_history: 4,
        }
    }
}

pub fn render_state(state: &GameSnapshot) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameSnapshot, options: VisualOptions) -> String {
    let mut out = String::new();
    let phase = match (state.phase, state.winner) {
        (Phase::Finished, Some(Side::Human)) => String::from("Finished (you won)"),
        (Phase::Finished, Some(Side::Computer)) => String::from("Finished (computer won)"),
        (phase, _) => format!("{phase:?}"),
    };
    let _ = writeln!(out, "Phase: {phase}");
    let _ = writeln!(out, "Turn: {}", side_label(state.turn_owner));

    let top = state
        .top_discard()
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"));
    let suit = state
        .active_suit
        .map(|suit| format!("{suit} ({})", suit.name()))
        .unwrap_or_else(|| String::from("--"));
    let _ = writeln!(out, "Discard: {top}  |  Active suit: {suit}  |  Stock: {}", state.stock_count);

    if options.discard_history > 0 && state.discard_pile.len() > 1 {
        let below = &state.discard_pile[..state.discard_pile.len() - 1];
        let start = below.len().saturating_sub(options.discard_history);
        let history = below[start..]
            .iter()
            .rev()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "  beneath: {history}");
    }

    if options.reveal_computer_hand {
        let _ = writeln!(out, "Computer: {}", format_hand(&state.computer_hand, state));
    } else {
        let _ = writeln!(out, "Computer: {} cards", state.computer_hand.len());
    }
    if state.human_hand.is_empty() {
        let _ = writeln!(out, "Your hand: (empty)");
    } else {
        let _ = writeln!(out, "Your hand: {}", format_hand(&state.human_hand, state));
    }
    if state.must_draw {
        let _ = writeln!(out, "No playable cards: draw from the stock.");
    }
    if !state.status_message.is_empty() {
        let _ = writeln!(out, "> {}", state.status_message);
    }
    out
}

pub fn describe_action(state: &GameSnapshot, action: &Action) -> String {
    match action {
        Action::Play(card) if card.is_eight() => format!("Play {card} (wild)"),
        Action::Play(card) => format!("Play {card}"),
        Action::Draw if state.stock_count == 0 => String::from("Pass (stock is empty)"),
        Action::Draw => format!("Draw from stock ({} left)", state.stock_count),
        Action::ChooseSuit(suit) => format!("Choose {suit} ({})", suit.name()),
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Human => "You",
        Side::Computer => "Computer",
    }
}

/// Playable cards are marked with `*`.
fn format_hand(hand: &[Card], state: &GameSnapshot) -> String {
    hand.iter()
        .map(|card| {
            if state.phase == Phase::AwaitingPlay && state.is_playable(*card) {
                format!("{card}*")
            } else {
                card.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::game::GameBuilder;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let mut game = GameBuilder::new().build().expect("game");
        game.start().expect("start");
        let view = game.snapshot();
        let text = render_state(&view);
        assert!(text.contains("Your hand:"));
        assert!(text.contains("Computer: 8 cards"));
        assert!(text.contains("Active suit:"));
        let actions = game.legal_actions(Side::Human);
        let draw = actions.last().expect("draw is always legal");
        assert!(describe_action(&view, draw).starts_with("Draw from stock"));
    }

    #[test]
    fn reveals_computer_hand_on_request() {
        let mut game = GameBuilder::new().build().expect("game");
        game.start().expect("start");
        let view = game.snapshot();
        let options = VisualOptions {
            reveal_computer_hand: true,
            ..VisualOptions::default()
        };
        let text = render_state_with_options(&view, options);
        let first = view.computer_hand[0].to_string();
        assert!(text.contains(&first));
    }

    #[test]
    fn describes_wild_and_suit_actions() {
        let mut game = GameBuilder::new().build().expect("game");
        game.start().expect("start");
        let view = game.snapshot();
        let eight = Card::new(Rank::Eight, Suit::Clubs);
        assert_eq!(describe_action(&view, &Action::Play(eight)), "Play 8♣ (wild)");
        assert_eq!(
            describe_action(&view, &Action::ChooseSuit(Suit::Spades)),
            "Choose ♠ (spades)"
        );
    }
}
