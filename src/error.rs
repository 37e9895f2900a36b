//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while building or drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// A card has a rank outside 1..=13.
    #[error("card rank is not between ace and king")]
    InvalidCard,
    /// The same card appears twice.
    #[error("the same card appears twice in the deck")]
    DuplicateCard,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// The bet exceeds the balance.
    #[error("insufficient balance for the current bet")]
    InsufficientBalance,
    /// Not enough cards to deal the opening hands.
    #[error("not enough cards in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when querying or acknowledging an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur when changing the bet or balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The value is not a finite number.
    #[error("bet is not a valid number")]
    Malformed,
    /// The value lies outside the table limits.
    #[error("bet is outside the table limits")]
    OutOfRange,
    /// The balance would be negative.
    #[error("balance cannot be negative")]
    NegativeBalance,
}

/// Errors found when validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A value is NaN, infinite, or too large to represent.
    #[error("option value is not a representable amount")]
    NotRepresentable,
    /// The minimum bet or bet step is zero.
    #[error("minimum bet and bet step must be positive")]
    NonPositive,
    /// The minimum bet exceeds the maximum bet.
    #[error("minimum bet exceeds maximum bet")]
    InvertedLimits,
    /// The starting bet lies outside the table limits.
    #[error("starting bet is outside the table limits")]
    StartingBetOutOfRange,
    /// The maximum or starting bet is not a whole number of steps above the
    /// minimum bet.
    #[error("bet limits are not on the bet step grid")]
    OffStepGrid,
}

impl From<DeckError> for ActionError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<DeckError> for StartError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}
