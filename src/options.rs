//! Table configuration options.

use crate::error::OptionsError;
use crate::money::{Tenths, to_tenths};

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_engine::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(50.0)
///     .with_max_bet(5.0)
///     .with_starting_bet(2.5);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Balance at the start of a session and after a refresh.
    pub starting_balance: f64,
    /// Bet at the start of a session.
    pub starting_bet: f64,
    /// Smallest allowed bet.
    pub min_bet: f64,
    /// Largest allowed bet.
    pub max_bet: f64,
    /// Amount added or removed by one bet step.
    pub bet_step: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100.0,
            starting_bet: 1.0,
            min_bet: 0.1,
            max_bet: 10.0,
            bet_step: 0.1,
        }
    }
}

/// Options converted to tenths.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub starting_balance: Tenths,
    pub starting_bet: Tenths,
    pub min_bet: Tenths,
    pub max_bet: Tenths,
    pub bet_step: Tenths,
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250.0);
    /// assert_eq!(options.starting_balance, 250.0);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the starting bet.
    #[must_use]
    pub const fn with_starting_bet(mut self, bet: f64) -> Self {
        self.starting_bet = bet;
        self
    }

    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(0.5);
    /// assert_eq!(options.min_bet, 0.5);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, bet: f64) -> Self {
        self.min_bet = bet;
        self
    }

    /// Sets the maximum bet.
    #[must_use]
    pub const fn with_max_bet(mut self, bet: f64) -> Self {
        self.max_bet = bet;
        self
    }

    /// Sets the bet step.
    #[must_use]
    pub const fn with_bet_step(mut self, step: f64) -> Self {
        self.bet_step = step;
        self
    }

    /// Checks that the options describe a usable table.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount is not a finite non-negative number, the
    /// minimum bet or step rounds to zero, the limits are inverted, the
    /// starting bet lies outside the limits, or the maximum or starting bet
    /// is not a whole number of steps above the minimum.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.limits().map(|_| ())
    }

    pub(crate) fn limits(&self) -> Result<Limits, OptionsError> {
        let amount = |value: f64| to_tenths(value).ok_or(OptionsError::NotRepresentable);

        let limits = Limits {
            starting_balance: amount(self.starting_balance)?,
            starting_bet: amount(self.starting_bet)?,
            min_bet: amount(self.min_bet)?,
            max_bet: amount(self.max_bet)?,
            bet_step: amount(self.bet_step)?,
        };

        if limits.min_bet == 0 || limits.bet_step == 0 {
            return Err(OptionsError::NonPositive);
        }
        if limits.min_bet > limits.max_bet {
            return Err(OptionsError::InvertedLimits);
        }
        if !(limits.min_bet..=limits.max_bet).contains(&limits.starting_bet) {
            return Err(OptionsError::StartingBetOutOfRange);
        }
        let on_grid = |bet: Tenths| (bet - limits.min_bet) % limits.bet_step == 0;
        if !on_grid(limits.max_bet) || !on_grid(limits.starting_bet) {
            return Err(OptionsError::OffStepGrid);
        }

        Ok(limits)
    }
}
