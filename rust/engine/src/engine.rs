use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::deck::{Dealer, Deck};
use crate::errors::GameError;
use crate::game::{BettingRound, Phase, Street};
use crate::hand::{HandRanker, StandardRanker};
use crate::player::{Action, LoggedAction, Position, Seat};
use crate::pot::{settle_overbet, split_pot, Pot};
use crate::rules::{amount_to_call, legal_actions, validate_action, StackMode, TableConfig};
use crate::state::{
    ActionLogEntry, EndReason, HandResult, Observation, SeatView, Snapshot, TableState, Winner,
};

// Keeps the stack/button stream independent of a dealer seeded with the same value.
const TABLE_RNG_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Heads-up fixed-limit round engine.
///
/// Owns both seats, the dealer and the ranker for the lifetime of a table.
/// The caller drives it: [`Engine::start_hand`], then alternately
/// [`Engine::legal_actions`] and [`Engine::apply_action`] for the seat in
/// `to_act` until the returned state is complete.
///
/// # Examples
///
/// ```
/// use hulhe_engine::engine::Engine;
/// use hulhe_engine::player::Action;
/// use hulhe_engine::rules::{StackMode, TableConfig};
///
/// let mut engine = Engine::new(TableConfig::default(), 7).unwrap();
/// let state = engine.start_hand(StackMode::Even).unwrap();
/// let sb = state.button;
///
/// let state = engine.apply_action(sb, Action::Fold).unwrap();
/// assert!(state.complete);
/// assert_eq!(state.result.unwrap().net[sb], -1);
/// ```
#[derive(Debug)]
pub struct Engine<D: Dealer = Deck, R: HandRanker = StandardRanker> {
    config: TableConfig,
    dealer: D,
    ranker: R,
    rng: ChaCha20Rng,
    seats: [Seat; 2],
    button: usize,
    board: Vec<Card>,
    pot: Pot,
    round: BettingRound,
    phase: Phase,
    to_act: usize,
    action_log: Vec<ActionLogEntry>,
    result: Option<HandResult>,
    hands_started: u64,
}

impl Engine<Deck, StandardRanker> {
    /// A table with a ChaCha20 deck and the standard ranker, both derived from `seed`.
    pub fn new(config: TableConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_parts(config, Deck::new_with_seed(seed), StandardRanker, seed)
    }
}

impl<D: Dealer, R: HandRanker> Engine<D, R> {
    pub fn with_parts(config: TableConfig, dealer: D, ranker: R, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = ChaCha20Rng::seed_from_u64(seed ^ TABLE_RNG_SALT);
        let button = rng.random_range(0..2);
        let half = config.total_stack / 2;
        Ok(Self {
            config,
            dealer,
            ranker,
            rng,
            seats: [Seat::new(half), Seat::new(config.total_stack - half)],
            button,
            board: Vec::with_capacity(5),
            pot: Pot::new(),
            round: BettingRound::new(0, 1 - button),
            phase: Phase::Complete,
            to_act: 1 - button,
            action_log: Vec::new(),
            result: None,
            hands_started: 0,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> u32 {
        self.pot.total()
    }
    pub fn round(&self) -> &BettingRound {
        &self.round
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn action_log(&self) -> &[ActionLogEntry] {
        &self.action_log
    }
    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }
    pub fn hands_started(&self) -> u64 {
        self.hands_started
    }

    pub fn position(&self, seat: usize) -> Position {
        if seat == self.button {
            Position::Button
        } else {
            Position::BigBlind
        }
    }

    pub fn is_hand_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The seat that must act next, if the hand is waiting for one.
    pub fn to_act(&self) -> Option<usize> {
        (self.phase == Phase::AwaitingAction).then_some(self.to_act)
    }

    pub fn street(&self) -> Street {
        Street::from_board_len(self.board.len()).unwrap_or(Street::River)
    }

    /// Starts a new hand: moves the button, assigns stacks, deals hole cards
    /// and posts the blinds. The button posts the small blind and acts first.
    ///
    /// # Errors
    ///
    /// - [`GameError::HandInProgress`] while the current hand has not ended
    /// - [`GameError::InvalidConfiguration`] if either seat would start with no
    ///   chips
    ///
    /// The table is left untouched in both cases.
    pub fn start_hand(&mut self, mode: StackMode) -> Result<TableState, GameError> {
        if self.phase != Phase::Complete {
            return Err(GameError::HandInProgress);
        }
        let stacks = self.next_stacks(mode)?;

        self.button = 1 - self.button;
        self.hands_started += 1;
        self.dealer.shuffle();
        self.board.clear();
        self.pot = Pot::new();
        self.action_log.clear();
        self.result = None;

        for (seat, &stack) in stacks.iter().enumerate() {
            let cards = self.dealer.draw(2)?;
            self.seats[seat].begin_hand(stack, [cards[0], cards[1]]);
        }

        let (sb, bb) = (self.button, 1 - self.button);
        self.post(sb, self.config.small_blind(), LoggedAction::SmallBlind);
        self.post(bb, self.config.big_blind, LoggedAction::BigBlind);
        self.round = BettingRound::after_blinds(self.config.big_blind, bb);
        self.to_act = sb;
        self.phase = Phase::AwaitingAction;

        tracing::debug!(
            hand = self.hands_started,
            button = self.button,
            stacks = ?stacks,
            "hand started"
        );

        // a short blind can leave nothing to decide
        self.advance()?;
        Ok(self.state())
    }

    /// Legal actions for `seat`; empty unless it is that seat's turn.
    pub fn legal_actions(&self, seat: usize) -> Vec<Action> {
        if self.phase != Phase::AwaitingAction || seat != self.to_act {
            return Vec::new();
        }
        legal_actions(
            &self.seats[seat],
            &self.seats[1 - seat],
            &self.round,
            self.config.raise_limit,
        )
    }

    /// Applies one action for `seat` and runs the hand forward until another
    /// decision is needed or the hand ends.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoHandInProgress`] before the first [`Engine::start_hand`]
    /// - [`GameError::HandAlreadyComplete`] after the hand has ended
    /// - [`GameError::IllegalAction`] if `action` is not in the seat's legal set
    ///   (including when it is not the seat's turn)
    /// - [`GameError::DeckExhausted`] if the dealer cannot supply the next street
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<TableState, GameError> {
        if self.hands_started == 0 {
            return Err(GameError::NoHandInProgress);
        }
        if self.phase == Phase::Complete {
            return Err(GameError::HandAlreadyComplete);
        }
        let legal = self.legal_actions(seat);
        let action = validate_action(seat, &legal, action)?;
        let street = self.street();
        let opp = 1 - seat;

        match action {
            Action::Fold => {
                let pot = self.pot.total();
                self.seats[opp].add_chips(pot);
                self.finish(Winner::Seat(opp), EndReason::Fold);
            }
            Action::Check => {
                self.round.mark_acted(seat);
                self.to_act = opp;
            }
            Action::Call => {
                let owed = amount_to_call(&self.seats[seat], &self.seats[opp], &self.round);
                let moved = self.seats[seat].commit(owed);
                self.pot.add(moved);
                self.round.mark_acted(seat);
                self.to_act = opp;
            }
            Action::Raise => {
                let target = self.round.current_bet() + self.config.bet_size(street);
                let owed = target - self.seats[seat].current_bet();
                let moved = self.seats[seat].commit(owed);
                self.pot.add(moved);
                if self.seats[seat].current_bet() == target {
                    self.round.complete_raise(seat, target);
                } else {
                    tracing::debug!(seat, short_of = target - self.seats[seat].current_bet(), "incomplete raise caps the street");
                    self.round.incomplete_raise(seat);
                }
                self.to_act = opp;
            }
        }

        self.record(street, seat, action.into());
        tracing::debug!(seat, ?action, ?street, pot = self.pot.total(), "action applied");

        self.advance()?;
        self.check_ledger();
        Ok(self.state())
    }

    /// Public snapshot of the table. Hole cards and the result are included
    /// only once the hand is complete.
    pub fn state(&self) -> TableState {
        let complete = self.is_hand_complete() && self.result.is_some();
        TableState {
            board: self.board.clone(),
            pot: self.pot.total(),
            current_bet: self.round.current_bet(),
            button: self.button,
            to_act: self.to_act(),
            street: self.street(),
            phase: self.phase,
            seats: [SeatView::from(&self.seats[0]), SeatView::from(&self.seats[1])],
            action_log: self.action_log.clone(),
            complete,
            result: self.result,
            hole_cards: if complete { self.hole_cards() } else { None },
        }
    }

    /// The acting seat's view: the public state plus its own hole cards.
    pub fn observation(&self, seat: usize) -> Option<Observation> {
        let hole_cards = self.seats.get(seat)?.hole_cards()?;
        Some(Observation {
            seat,
            hole_cards,
            table: self.state(),
        })
    }

    fn hole_cards(&self) -> Option<[[Card; 2]; 2]> {
        Some([self.seats[0].hole_cards()?, self.seats[1].hole_cards()?])
    }

    fn next_stacks(&mut self, mode: StackMode) -> Result<[u32; 2], GameError> {
        let total = self.config.total_stack;
        let stacks = match mode {
            StackMode::Randomized => {
                let min = self.config.min_stack;
                let s0 = self.rng.random_range(min..=total - min);
                [s0, total - s0]
            }
            StackMode::Even => [total / 2, total / 2],
            StackMode::CarryOver => [self.seats[0].stack(), self.seats[1].stack()],
            StackMode::Fixed(stacks) => stacks,
        };
        if let Some(seat) = stacks.iter().position(|&s| s == 0) {
            return Err(GameError::InvalidConfiguration(format!(
                "seat {seat} would start the hand with no chips"
            )));
        }
        Ok(stacks)
    }

    fn post(&mut self, seat: usize, amount: u32, kind: LoggedAction) {
        let moved = self.seats[seat].commit(amount);
        self.pot.add(moved);
        self.record(Street::Preflop, seat, kind);
    }

    fn record(&mut self, street: Street, seat: usize, action: LoggedAction) {
        let after = Snapshot {
            seats: [SeatView::from(&self.seats[0]), SeatView::from(&self.seats[1])],
            pot: self.pot.total(),
            board: self.board.clone(),
        };
        self.action_log.push(ActionLogEntry {
            street,
            seat,
            action,
            after,
        });
    }

    /// Steps through the non-interactive phases until input is needed or the
    /// hand is over.
    fn advance(&mut self) -> Result<(), GameError> {
        loop {
            match self.phase {
                Phase::AwaitingAction => {
                    if !self.betting_over() {
                        return Ok(());
                    }
                    self.phase = Phase::StreetClosing;
                }
                Phase::StreetClosing => self.close_street()?,
                Phase::AllInRunout => {
                    let missing = 5 - self.board.len();
                    let cards = self.dealer.draw(missing)?;
                    self.board.extend(cards);
                    self.phase = Phase::Showdown;
                }
                Phase::Showdown => self.showdown(),
                Phase::Complete => return Ok(()),
            }
        }
    }

    fn betting_over(&self) -> bool {
        let [a, b] = &self.seats;
        match (a.is_all_in(), b.is_all_in()) {
            (true, true) => true,
            (true, false) => b.current_bet() >= a.current_bet(),
            (false, true) => a.current_bet() >= b.current_bet(),
            (false, false) => {
                a.current_bet() == b.current_bet()
                    && !self.round.owes_action(0)
                    && !self.round.owes_action(1)
            }
        }
    }

    fn close_street(&mut self) -> Result<(), GameError> {
        if let Some(refund) = settle_overbet(&mut self.seats, &mut self.pot) {
            tracing::debug!(seat = refund.seat, amount = refund.amount, "uncalled chips returned");
        }
        for seat in &mut self.seats {
            seat.clear_bet();
        }
        let first = 1 - self.button;
        self.round = BettingRound::new(0, first);
        self.to_act = first;

        if self.seats.iter().any(Seat::is_all_in) {
            self.phase = Phase::AllInRunout;
            return Ok(());
        }
        match self.street().cards_for_next() {
            Some(n) => {
                let cards = self.dealer.draw(n)?;
                self.board.extend(cards);
                tracing::debug!(street = ?self.street(), board = ?self.board, "street dealt");
                self.phase = Phase::AwaitingAction;
            }
            None => self.phase = Phase::Showdown,
        }
        Ok(())
    }

    fn showdown(&mut self) {
        if self.result.is_some() {
            self.phase = Phase::Complete;
            return;
        }
        let Some([h0, h1]) = self.hole_cards() else {
            unreachable!("showdown reached without hole cards");
        };
        let s0 = self.ranker.evaluate(&h0, &self.board);
        let s1 = self.ranker.evaluate(&h1, &self.board);
        let pot = self.pot.total();
        let winner = match s0.cmp(&s1) {
            std::cmp::Ordering::Less => Winner::Seat(0),
            std::cmp::Ordering::Greater => Winner::Seat(1),
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        match winner {
            Winner::Seat(w) => self.seats[w].add_chips(pot),
            Winner::Tie => {
                let shares = split_pot(pot, 1 - self.button);
                for (seat, share) in self.seats.iter_mut().zip(shares) {
                    seat.add_chips(share);
                }
            }
        }
        self.finish(winner, EndReason::Showdown);
    }

    fn finish(&mut self, winner: Winner, reason: EndReason) {
        let net = [self.seats[0].net(), self.seats[1].net()];
        assert_eq!(net[0] + net[1], 0, "chips created or destroyed: {net:?}");
        let result = HandResult {
            winner,
            pot: self.pot.total(),
            reason,
            net,
        };
        tracing::debug!(?winner, ?reason, pot = result.pot, ?net, "hand complete");
        self.result = Some(result);
        self.phase = Phase::Complete;
    }

    fn check_ledger(&self) {
        if self.phase != Phase::Complete {
            let committed: u32 = self.seats.iter().map(Seat::contributed).sum();
            assert_eq!(committed, self.pot.total(), "pot out of balance");
        }
    }
}
