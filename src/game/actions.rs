use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, StartError};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Starts a round with a freshly shuffled 52-card deck.
    ///
    /// Deals two face-up cards to the player and two to the dealer, the
    /// dealer's second card face down. A finished round that was not
    /// acknowledged with [`Game::finish_round`] is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the bet exceeds the
    /// balance.
    pub fn start(&mut self) -> Result<(), StartError> {
        self.ensure_can_start()?;

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.deal(deck)
    }

    /// Starts a round dealing from `deck` as given, without shuffling.
    ///
    /// Cards are dealt player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the bet exceeds the
    /// balance, or the deck holds fewer than four cards.
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<(), StartError> {
        self.ensure_can_start()?;
        self.deal(deck)
    }

    fn ensure_can_start(&self) -> Result<(), StartError> {
        if !self.state.can_start() {
            return Err(StartError::InvalidState);
        }

        if self.bet > self.balance {
            return Err(StartError::InsufficientBalance);
        }

        Ok(())
    }

    fn deal(&mut self, mut deck: Deck) -> Result<(), StartError> {
        let player_first = deck.draw()?;
        let up_card = deck.draw()?;
        let player_second = deck.draw()?;
        let hole_card = deck.draw()?;

        self.clear_round();
        self.deck = deck;

        self.player.take(player_first);
        self.dealer.take_up_card(up_card);
        self.player.take(player_second);
        self.dealer.take_hole_card(hole_card);

        self.stake = self.bet;
        self.state = GameState::PlayerTurn;

        tracing::info!(
            bet = self.bet(),
            balance = self.balance(),
            player_score = self.player_score(),
            dealer_up = %up_card,
            "round started"
        );

        Ok(())
    }

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round at once: the state becomes
    /// [`GameState::Bust`] and the stake is taken from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        self.player.take(card);
        tracing::debug!(%card, score = self.player_score(), "player hits");

        if self.player.is_bust() {
            let net = self.pay_out(Outcome::DealerWin);
            let result = self.round_result(Outcome::DealerWin, self.dealer_score(), net);
            self.result = Some(result);
            self.state = GameState::Bust;

            tracing::info!(
                score = result.player_score,
                balance = self.balance(),
                "player busts"
            );
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer reveals the hole card and draws to 17, then the round is
    /// settled against the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck runs
    /// out while the dealer must draw. In the latter case the round is voided
    /// without touching the balance and the game returns to `Idle`.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;
        self.state = GameState::DealerTurn;

        if let Err(err) = self.dealer_play() {
            tracing::warn!(%err, "deck exhausted during dealer turn, round voided");
            self.clear_round();
            return Err(err.into());
        }

        Ok(self.settle())
    }
}
