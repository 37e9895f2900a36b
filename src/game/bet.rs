use crate::error::BetError;
use crate::money::{Tenths, from_tenths, snap_to_step, to_tenths};

use super::{BetChange, Game};

impl Game {
    /// Sets the bet, clamped to the table limits and rounded to the nearest
    /// bet step above the minimum bet.
    ///
    /// The new bet applies from the next round; a round in progress keeps
    /// the stake it started with. Returns the bet actually set.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::Malformed`] if `value` is NaN. The bet is left
    /// unchanged.
    pub fn update_bet(&mut self, value: f64) -> Result<f64, BetError> {
        if value.is_nan() {
            return Err(BetError::Malformed);
        }

        let clamped = value.clamp(self.min_bet(), self.max_bet());
        let tenths = snap_to_step(clamped, self.limits.min_bet, self.limits.bet_step)
            .ok_or(BetError::Malformed)?;
        self.set_bet_tenths(tenths);

        Ok(self.bet())
    }

    /// Parses a bet typed by the user and sets it.
    ///
    /// Unlike [`Game::update_bet`], values outside the limits are rejected
    /// rather than clamped.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::Malformed`] if the text is not a number and
    /// [`BetError::OutOfRange`] if it lies outside `[min_bet, max_bet]`.
    pub fn set_bet_from_input(&mut self, input: &str) -> Result<f64, BetError> {
        let value: f64 = input.trim().parse().map_err(|_| BetError::Malformed)?;
        if !value.is_finite() {
            return Err(BetError::Malformed);
        }

        if value < self.min_bet() || value > self.max_bet() {
            return Err(BetError::OutOfRange);
        }

        self.update_bet(value)
    }

    /// Raises the bet by one step, stopping at the maximum.
    ///
    /// Returns [`BetChange::LimitReached`] without changing anything if the
    /// bet is already at the maximum.
    pub fn increase_bet(&mut self) -> BetChange {
        if self.bet >= self.limits.max_bet {
            self.set_bet_tenths(self.limits.max_bet);
            return BetChange::LimitReached(self.bet());
        }

        let raised = self.bet.saturating_add(self.limits.bet_step);
        self.set_bet_tenths(raised);
        BetChange::Changed(self.bet())
    }

    /// Lowers the bet by one step, stopping at the minimum.
    ///
    /// Returns [`BetChange::LimitReached`] without changing anything if the
    /// bet is already at the minimum.
    pub fn decrease_bet(&mut self) -> BetChange {
        if self.bet <= self.limits.min_bet {
            self.set_bet_tenths(self.limits.min_bet);
            return BetChange::LimitReached(self.bet());
        }

        let lowered = self.bet.saturating_sub(self.limits.bet_step);
        self.set_bet_tenths(lowered);
        BetChange::Changed(self.bet())
    }

    /// Replaces the balance, rounded to one decimal place.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NegativeBalance`] for negative values and
    /// [`BetError::Malformed`] for NaN, infinite, or oversized values.
    pub fn set_balance(&mut self, value: f64) -> Result<f64, BetError> {
        if value < 0.0 {
            return Err(BetError::NegativeBalance);
        }

        self.balance = to_tenths(value).ok_or(BetError::Malformed)?;
        tracing::debug!(balance = self.balance(), "balance set");
        Ok(self.balance())
    }

    /// Resets the balance to the configured starting balance.
    pub fn refresh_balance(&mut self) -> f64 {
        self.balance = self.limits.starting_balance;
        tracing::debug!(balance = self.balance(), "balance refreshed");
        self.balance()
    }

    fn set_bet_tenths(&mut self, tenths: Tenths) {
        self.bet = tenths.clamp(self.limits.min_bet, self.limits.max_bet);
        tracing::debug!(bet = from_tenths(self.bet), "bet updated");
    }
}
