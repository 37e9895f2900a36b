//! Round outcome types.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher score).
    DealerWin,
    /// Push (equal scores, neither bust).
    Push,
}

impl Outcome {
    /// Resolves a round from the final scores.
    ///
    /// A bust player loses even if the dealer also busts.
    #[must_use]
    pub const fn resolve(player_score: u8, dealer_score: u8, limit: u8) -> Self {
        if player_score > limit {
            Self::DealerWin
        } else if dealer_score > limit || player_score > dealer_score {
            Self::PlayerWin
        } else if player_score == dealer_score {
            Self::Push
        } else {
            Self::DealerWin
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score (only the up card if the player busted).
    pub dealer_score: u8,
    /// Whether the player busted before the dealer played.
    pub player_bust: bool,
    /// Whether the player finished with a two-card 21.
    pub player_blackjack: bool,
    /// The amount wagered on the round.
    pub stake: f64,
    /// Balance change (positive = profit, negative = loss).
    pub net: f64,
}
