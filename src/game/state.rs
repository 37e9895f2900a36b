//! Round state types.

/// Round state.
///
/// `Idle -> PlayerTurn -> (Bust | DealerTurn -> Settled) -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No active round.
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The player went over 21; the round is lost.
    Bust,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The dealer has played and the outcome has been paid.
    Settled,
}

impl GameState {
    /// Returns whether the round has ended and awaits acknowledgement.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Bust | Self::Settled)
    }

    /// Returns whether a new round may be started from this state.
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, Self::Idle | Self::Bust | Self::Settled)
    }
}

/// Result of stepping the bet up or down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetChange {
    /// The bet moved to the new value.
    Changed(f64),
    /// The bet was already at the limit and stays there.
    LimitReached(f64),
}

impl BetChange {
    /// Returns the bet after the change.
    #[must_use]
    pub const fn bet(self) -> f64 {
        match self {
            Self::Changed(bet) | Self::LimitReached(bet) => bet,
        }
    }
}
