extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DeckError;
use crate::hand::SCORE_LIMIT;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand: reveals the hole card and draws until
    /// reaching 17 or higher.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, DeckError> {
        debug_assert_eq!(self.state, GameState::DealerTurn);
        self.dealer.play(&mut self.deck)
    }

    /// Compares the final hands, pays the stake, and moves to `Settled`.
    pub(super) fn settle(&mut self) -> RoundResult {
        let player_score = self.player.hand().score();
        let dealer_score = self.dealer.hand().score();
        let outcome = Outcome::resolve(player_score, dealer_score, SCORE_LIMIT);

        let net = self.pay_out(outcome);
        let result = self.round_result(outcome, dealer_score, net);
        self.result = Some(result);
        self.state = GameState::Settled;

        tracing::info!(
            ?outcome,
            player_score,
            dealer_score,
            balance = self.balance(),
            "round settled"
        );

        result
    }
}
