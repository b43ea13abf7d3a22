//! Decision procedure of the computer opponent.
//!
//! In plain English:
//! - Play the first playable card in hand that is not an eight.
//! - Only when eights are the sole option, play the first of them; eights are
//!   kept back for emergencies.
//! - With nothing playable, draw.
//! - After an eight, name the suit the rest of the hand holds most of.
//!
//! Ties always fall on hand order or the fixed suit order, never on chance.

use crate::action::Action;
use crate::card::{Card, Suit};
use crate::rules::is_playable;

/// Suit named when the hand offers no evidence.
pub const DEFAULT_SUIT: Suit = Suit::Hearts;

/// Picks the computer's move for `hand` against the current discard state.
pub fn select_move(hand: &[Card], top: Option<Card>, active_suit: Suit) -> Action {
    let mut first_eight = None;
    for card in hand.iter().copied() {
        if !is_playable(card, top, active_suit) {
            continue;
        }
        if !card.is_eight() {
            return Action::Play(card);
        }
        first_eight.get_or_insert(card);
    }
    first_eight.map(Action::Play).unwrap_or(Action::Draw)
}

/// Names the suit to follow after an eight, given the hand left after playing it.
///
/// Highest count wins; ties go to the earlier suit in [`Suit::ALL`]
/// (hearts, diamonds, clubs, spades).
pub fn choose_suit(remaining_hand: &[Card]) -> Suit {
    let mut counts = [0usize; 4];
    for card in remaining_hand {
        counts[card.suit.index()] += 1;
    }
    let mut best = DEFAULT_SUIT;
    let mut best_count = 0;
    for suit in Suit::ALL {
        if counts[suit.index()] > best_count {
            best = suit;
            best_count = counts[suit.index()];
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn prefers_non_eight_over_eight() {
        let hand = [
            card(Rank::Two, Suit::Clubs),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Nine, Suit::Clubs),
        ];
        let top = Some(card(Rank::King, Suit::Clubs));
        assert_eq!(
            select_move(&hand, top, Suit::Clubs),
            Action::Play(card(Rank::Two, Suit::Clubs))
        );
    }

    #[test]
    fn non_eight_wins_even_when_eight_comes_first() {
        let hand = [
            card(Rank::Eight, Suit::Spades),
            card(Rank::King, Suit::Hearts),
        ];
        let top = Some(card(Rank::King, Suit::Clubs));
        assert_eq!(
            select_move(&hand, top, Suit::Clubs),
            Action::Play(card(Rank::King, Suit::Hearts))
        );
    }

    #[test]
    fn falls_back_to_first_eight() {
        let hand = [
            card(Rank::Three, Suit::Spades),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Eight, Suit::Clubs),
        ];
        let top = Some(card(Rank::Five, Suit::Hearts));
        assert_eq!(
            select_move(&hand, top, Suit::Hearts),
            Action::Play(card(Rank::Eight, Suit::Diamonds))
        );
    }

    #[test]
    fn draws_when_nothing_is_playable() {
        let hand = [card(Rank::Three, Suit::Spades)];
        let top = Some(card(Rank::Five, Suit::Hearts));
        assert_eq!(select_move(&hand, top, Suit::Hearts), Action::Draw);
        assert_eq!(select_move(&[], top, Suit::Hearts), Action::Draw);
    }

    #[test]
    fn names_most_common_suit() {
        let hand = [
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Spades),
        ];
        assert_eq!(choose_suit(&hand), Suit::Spades);
    }

    #[test]
    fn ties_follow_fixed_suit_order() {
        let hand = [
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Diamonds),
        ];
        assert_eq!(choose_suit(&hand), Suit::Diamonds);
        let hand = [card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Hearts)];
        assert_eq!(choose_suit(&hand), Suit::Hearts);
    }

    #[test]
    fn empty_hand_names_default_suit() {
        assert_eq!(choose_suit(&[]), DEFAULT_SUIT);
    }
}
