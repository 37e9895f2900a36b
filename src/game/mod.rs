//! Game engine and session state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{OptionsError, ShowdownError};
use crate::hand::SCORE_LIMIT;
use crate::money::{Tenths, from_tenths};
use crate::options::{GameOptions, Limits};
use crate::participant::{Dealer, Player};
use crate::result::{Outcome, RoundResult};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{BetChange, GameState};

/// A single-player blackjack engine.
///
/// The game owns the deck, both participants, the round state, and the
/// session's balance and bet. Every method runs to completion; callers hold
/// the game by `&mut` and pass it to whatever renders it.
#[derive(Debug)]
pub struct Game {
    /// Table options.
    options: GameOptions,
    /// Options converted to tenths.
    limits: Limits,
    /// Cards left for the current round.
    deck: Deck,
    /// The player.
    player: Player,
    /// The dealer.
    dealer: Dealer,
    /// Current round state.
    state: GameState,
    /// Balance in tenths.
    balance: Tenths,
    /// Bet for the next round, in tenths.
    bet: Tenths,
    /// Bet locked in when the current round started.
    stake: Tenths,
    /// Result of the round once it has ended.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::Idle);
    /// assert_eq!(game.balance(), 100.0);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        let limits = options.limits()?;

        Ok(Self {
            options,
            limits,
            deck: Deck::new(),
            player: Player::new(),
            dealer: Dealer::new(),
            state: GameState::Idle,
            balance: limits.starting_balance,
            bet: limits.starting_bet,
            stake: 0,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's cards in deal order.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        self.player.hand().cards()
    }

    /// Returns the dealer's cards in deal order, the hole card face down
    /// until the player stands.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        self.dealer.hand().cards()
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.hand().score()
    }

    /// Returns the dealer's score as shown at the table: only face-up cards
    /// count.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.hand().visible_score()
    }

    /// Returns the bet for the next round.
    #[must_use]
    pub fn bet(&self) -> f64 {
        from_tenths(self.bet)
    }

    /// Returns the balance.
    #[must_use]
    pub fn balance(&self) -> f64 {
        from_tenths(self.balance)
    }

    /// Returns the smallest allowed bet.
    #[must_use]
    pub fn min_bet(&self) -> f64 {
        from_tenths(self.limits.min_bet)
    }

    /// Returns the largest allowed bet.
    #[must_use]
    pub fn max_bet(&self) -> f64 {
        from_tenths(self.limits.max_bet)
    }

    /// Returns the bet step.
    #[must_use]
    pub fn bet_step(&self) -> f64 {
        from_tenths(self.limits.bet_step)
    }

    /// Returns the score above which a hand busts.
    #[must_use]
    pub const fn score_limit(&self) -> u8 {
        SCORE_LIMIT
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the round once it has ended (bust or settled).
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns who won the round.
    ///
    /// # Errors
    ///
    /// Returns an error unless the dealer has played and the round is
    /// settled.
    pub fn check_winner(&self) -> Result<Outcome, ShowdownError> {
        if self.state != GameState::Settled {
            return Err(ShowdownError::InvalidState);
        }

        self.result
            .map(|result| result.outcome)
            .ok_or(ShowdownError::InvalidState)
    }

    /// Acknowledges a finished round: clears both hands and returns to
    /// [`GameState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not ended.
    pub fn finish_round(&mut self) -> Result<RoundResult, ShowdownError> {
        if !self.state.is_finished() {
            return Err(ShowdownError::InvalidState);
        }

        let result = self.result.take().ok_or(ShowdownError::InvalidState)?;
        self.clear_round();
        Ok(result)
    }

    /// Clears hands and round data and returns to `Idle`.
    fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.stake = 0;
        self.result = None;
        self.state = GameState::Idle;
    }

    /// Applies the stake to the balance for `outcome`.
    ///
    /// Returns the balance change actually made, which is smaller than the
    /// stake if the balance was lowered below it during the round.
    fn pay_out(&mut self, outcome: Outcome) -> f64 {
        let before = self.balance;
        self.balance = match outcome {
            Outcome::PlayerWin => before.saturating_add(self.stake),
            Outcome::DealerWin => before.saturating_sub(self.stake),
            Outcome::Push => before,
        };

        if self.balance >= before {
            from_tenths(self.balance - before)
        } else {
            -from_tenths(before - self.balance)
        }
    }

    /// Builds the result of the round from the current hands and stake.
    fn round_result(&self, outcome: Outcome, dealer_score: u8, net: f64) -> RoundResult {
        RoundResult {
            outcome,
            player_score: self.player.hand().score(),
            dealer_score,
            player_bust: self.player.is_bust(),
            player_blackjack: self.player.hand().is_blackjack(),
            stake: from_tenths(self.stake),
            net,
        }
    }
}
