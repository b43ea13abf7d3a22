use std::collections::{HashSet, VecDeque};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::action::{Action, Side};
use crate::card::{Card, DECK_SIZE, HAND_SIZE, Suit, full_deck};
use crate::deck::{deal_initial, shuffle};
use crate::error::{GameError, InvalidAction};
use crate::event::GameEvent;
use crate::policy;
use crate::rules::is_playable;
use crate::state::{GameSnapshot, Phase};

const DEFAULT_SEED: u64 = 0xC8A2_E1A7_5EED_0008;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub seed: u64,
    pub hand_size: usize,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            hand_size: HAND_SIZE,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Builder that enables deterministic deck injection for tests and replays.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            deck: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` verbatim for the first deal instead of shuffling. Index 0 is
    /// dealt first. Later restarts shuffle from the seeded RNG as usual.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Override the number of cards dealt to each side (8 by default).
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Crazy Eights engine: the single owner of all mutable game state.
///
/// Every command either applies completely and bumps the version, or is
/// rejected with a [`GameError`] and leaves the game exactly as it was.
pub struct Game {
    config: GameConfig,
    rng: StdRng,
    pending_deck: Option<Vec<Card>>,
    version: u64,
    phase: Phase,
    turn_owner: Side,
    human_hand: Vec<Card>,
    computer_hand: Vec<Card>,
    stock: VecDeque<Card>,
    discard_pile: Vec<Card>,
    active_suit: Option<Suit>,
    winner: Option<Side>,
    must_draw: bool,
    status_message: String,
    events: Vec<GameEvent>,
    transition: Vec<GameEvent>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn active_suit(&self) -> Option<Suit> {
        self.active_suit
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Human => &self.human_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    /// Stock contents from the top down.
    pub fn stock(&self) -> impl Iterator<Item = Card> + '_ {
        self.stock.iter().copied()
    }

    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    /// Advisory flag: it is the human's turn and nothing in hand is playable.
    pub fn must_draw(&self) -> bool {
        self.must_draw
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: self.version,
            phase: self.phase,
            turn_owner: self.turn_owner,
            human_hand: self.human_hand.clone(),
            computer_hand: self.computer_hand.clone(),
            discard_pile: self.discard_pile.clone(),
            active_suit: self.active_suit,
            stock_count: self.stock.len(),
            winner: self.winner,
            must_draw: self.must_draw,
            status_message: self.status_message.clone(),
        }
    }

    /// Hands over every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn legal_actions(&self, side: Side) -> Vec<Action> {
        if side != self.turn_owner {
            return Vec::new();
        }
        match self.phase {
            Phase::AwaitingPlay => {
                let mut actions: Vec<Action> = self
                    .hand(side)
                    .iter()
                    .copied()
                    .filter(|card| self.is_playable_now(*card))
                    .map(Action::Play)
                    .collect();
                actions.push(Action::Draw);
                actions
            }
            Phase::AwaitingSuitChoice => Suit::ALL.into_iter().map(Action::ChooseSuit).collect(),
            Phase::NotStarted | Phase::Finished => Vec::new(),
        }
    }

    pub fn apply_action(&mut self, side: Side, action: Action) -> Result<(), GameError> {
        match action {
            Action::Play(card) => self.attempt_play(side, card),
            Action::Draw => self.attempt_draw(side).map(|_| ()),
            Action::ChooseSuit(suit) => {
                if self.phase != Phase::AwaitingSuitChoice {
                    return Err(GameError::WrongPhase(self.phase));
                }
                if side != self.turn_owner {
                    return Err(GameError::NotPlayersTurn(side));
                }
                self.choose_suit(suit)
            }
        }
    }

    /// Deals a fresh game. Valid before the first game and after a finished one.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::NotStarted | Phase::Finished) {
            return Err(GameError::WrongPhase(self.phase));
        }
        let deck = match self.pending_deck.take() {
            Some(deck) => deck,
            None => shuffle(&full_deck(), &mut self.rng),
        };
        let deal = deal_initial(deck, self.config.hand_size)?;

        self.begin();
        self.human_hand = deal.human_hand;
        self.computer_hand = deal.computer_hand;
        self.stock = deal.stock;
        self.discard_pile = vec![deal.first_discard];
        self.active_suit = Some(deal.first_discard.suit);
        self.winner = None;
        self.phase = Phase::AwaitingPlay;
        info!(
            first_discard = %deal.first_discard,
            stock = self.stock.len(),
            "game started"
        );
        self.emit(GameEvent::Started {
            first_discard: deal.first_discard,
        });
        self.enter_turn(Side::Human);
        self.commit();
        Ok(())
    }

    /// Plays `card` from `side`'s hand onto the discard pile.
    pub fn attempt_play(&mut self, side: Side, card: Card) -> Result<(), GameError> {
        let index = self
            .validate_play(side, card)
            .inspect_err(|err| trace!(?side, %card, %err, "play rejected"))?;

        self.begin();
        self.hand_mut(side).remove(index);
        self.discard_pile.push(card);
        debug!(?side, %card, remaining = self.hand(side).len(), "card played");
        self.emit(GameEvent::CardPlayed { side, card });

        if self.hand(side).is_empty() {
            self.finish(side);
            self.commit();
            return Ok(());
        }

        if card.is_eight() {
            match side {
                Side::Human => {
                    self.phase = Phase::AwaitingSuitChoice;
                    self.emit(GameEvent::SuitChoiceRequired);
                }
                Side::Computer => {
                    let suit = policy::choose_suit(&self.computer_hand);
                    self.name_suit(Side::Computer, suit);
                    self.enter_turn(Side::Human);
                }
            }
        } else {
            self.active_suit = Some(card.suit);
            self.enter_turn(side.other());
        }
        self.commit();
        Ok(())
    }

    /// Names the suit after the human's eight and hands the turn to the computer.
    pub fn choose_suit(&mut self, suit: Suit) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingSuitChoice {
            trace!(phase = ?self.phase, %suit, "suit choice rejected");
            return Err(GameError::WrongPhase(self.phase));
        }
        self.begin();
        self.name_suit(Side::Human, suit);
        self.phase = Phase::AwaitingPlay;
        self.enter_turn(Side::Computer);
        self.commit();
        Ok(())
    }

    /// Draws the top stock card into `side`'s hand.
    ///
    /// Returns the drawn card, or `None` when the stock was empty and the turn
    /// was forfeited. A playable draw keeps the turn; anything else passes it.
    pub fn attempt_draw(&mut self, side: Side) -> Result<Option<Card>, GameError> {
        self.ensure_turn(side)
            .inspect_err(|err| trace!(?side, %err, "draw rejected"))?;

        self.begin();
        let drawn = self.stock.pop_front();
        match drawn {
            Some(card) => {
                self.hand_mut(side).push(card);
                let playable = self.is_playable_now(card);
                debug!(?side, %card, playable, stock = self.stock.len(), "card drawn");
                self.emit(GameEvent::CardDrawn {
                    side,
                    card,
                    playable,
                });
                if !playable {
                    self.enter_turn(side.other());
                }
            }
            None => {
                debug!(?side, "stock empty, turn forfeited");
                self.emit(GameEvent::DrawForfeited { side });
                self.enter_turn(side.other());
            }
        }
        self.commit();
        Ok(drawn)
    }

    /// Runs the opponent policy once for the computer and applies its choice.
    pub fn computer_step(&mut self) -> Result<Action, GameError> {
        self.run_computer_step().map(|(action, _)| action)
    }

    /// Lets the computer act until it hands the turn back or the game ends.
    ///
    /// The computer keeps acting only after drawing a playable card, so every
    /// extra step consumes a stock card.
    pub fn play_computer_turn(&mut self) -> Result<Vec<Action>, GameError> {
        let mut taken = Vec::new();
        loop {
            let (action, keeps_turn) = self.run_computer_step()?;
            taken.push(action);
            if !keeps_turn || self.phase != Phase::AwaitingPlay {
                return Ok(taken);
            }
        }
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        if config.hand_size == 0 {
            return Err(GameError::InvalidConfiguration("hand size must be positive"));
        }
        if config.hand_size * 2 >= DECK_SIZE {
            return Err(GameError::InvalidConfiguration(
                "hand size leaves no card for the discard pile",
            ));
        }
        if let Some(deck) = &deck {
            let distinct: HashSet<Card> = deck.iter().copied().collect();
            if deck.len() != DECK_SIZE || distinct.len() != DECK_SIZE {
                return Err(GameError::InvalidConfiguration(
                    "custom deck must hold each of the 52 cards exactly once",
                ));
            }
        }
        Ok(Game {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            pending_deck: deck,
            version: 0,
            phase: Phase::NotStarted,
            turn_owner: Side::Human,
            human_hand: Vec::new(),
            computer_hand: Vec::new(),
            stock: VecDeque::new(),
            discard_pile: Vec::new(),
            active_suit: None,
            winner: None,
            must_draw: false,
            status_message: String::new(),
            events: Vec::new(),
            transition: Vec::new(),
        })
    }

    fn run_computer_step(&mut self) -> Result<(Action, bool), GameError> {
        self.ensure_turn(Side::Computer)?;
        let active_suit = self.active_suit.ok_or(GameError::WrongPhase(self.phase))?;
        let action = policy::select_move(&self.computer_hand, self.top_discard(), active_suit);
        debug!(?action, "computer decided");
        let keeps_turn = match action {
            Action::Draw => self
                .attempt_draw(Side::Computer)?
                .is_some_and(|card| self.is_playable_now(card)),
            other => {
                self.apply_action(Side::Computer, other)?;
                false
            }
        };
        Ok((action, keeps_turn))
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingPlay {
            return Err(GameError::WrongPhase(self.phase));
        }
        if self.turn_owner != side {
            return Err(GameError::NotPlayersTurn(side));
        }
        Ok(())
    }

    fn validate_play(&self, side: Side, card: Card) -> Result<usize, GameError> {
        self.ensure_turn(side)?;
        let index = self
            .hand(side)
            .iter()
            .position(|held| *held == card)
            .ok_or(InvalidAction::CardNotInHand(card))?;
        let active_suit = self.active_suit.ok_or(GameError::WrongPhase(self.phase))?;
        if !is_playable(card, self.top_discard(), active_suit) {
            return Err(InvalidAction::Unplayable { card, active_suit }.into());
        }
        Ok(index)
    }

    fn is_playable_now(&self, card: Card) -> bool {
        self.active_suit
            .is_some_and(|suit| is_playable(card, self.top_discard(), suit))
    }

    fn hand_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Human => &mut self.human_hand,
            Side::Computer => &mut self.computer_hand,
        }
    }

    fn name_suit(&mut self, side: Side, suit: Suit) {
        self.active_suit = Some(suit);
        debug!(?side, %suit, "suit named");
        self.emit(GameEvent::SuitChosen { side, suit });
    }

    /// Hands the turn to `side`. On the human's turn this also raises the
    /// must-draw notice, or skips the turn outright when the stock is empty too.
    fn enter_turn(&mut self, side: Side) {
        self.turn_owner = side;
        self.emit(GameEvent::TurnPassed { to: side });
        if side != Side::Human {
            return;
        }
        let can_play = self
            .human_hand
            .iter()
            .any(|card| self.is_playable_now(*card));
        if can_play {
            return;
        }
        if self.stock.is_empty() {
            debug!("human stalemated, skipping turn");
            self.emit(GameEvent::Stalemate);
            self.turn_owner = Side::Computer;
            self.emit(GameEvent::TurnPassed { to: Side::Computer });
        } else {
            self.must_draw = true;
            self.emit(GameEvent::MustDraw);
        }
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::Finished;
        self.winner = Some(winner);
        info!(?winner, "game won");
        self.emit(GameEvent::Won { winner });
    }

    fn emit(&mut self, event: GameEvent) {
        self.transition.push(event);
    }

    fn begin(&mut self) {
        self.transition.clear();
        self.must_draw = false;
    }

    fn commit(&mut self) {
        self.version += 1;
        self.status_message = self
            .transition
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(". ");
        self.events.append(&mut self.transition);
        debug_assert!(self.cards_conserved(), "card conservation violated");
    }

    fn cards_conserved(&self) -> bool {
        let all: Vec<Card> = self
            .stock
            .iter()
            .chain(&self.human_hand)
            .chain(&self.computer_hand)
            .chain(&self.discard_pile)
            .copied()
            .collect();
        let distinct: HashSet<Card> = all.iter().copied().collect();
        all.len() == DECK_SIZE && distinct.len() == DECK_SIZE
    }
}
