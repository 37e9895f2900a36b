//! The player and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{Hand, SCORE_LIMIT};

/// The dealer stands once their score reaches this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// The human player.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Takes a card face up.
    pub fn take(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns whether the hand is over the score limit.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.score() > SCORE_LIMIT
    }

    /// Discards the hand.
    pub fn clear(&mut self) {
        self.hand.clear();
    }
}

/// The automated dealer.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Takes the up card.
    pub fn take_up_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Takes the hole card, face down.
    pub fn take_hole_card(&mut self, card: Card) {
        self.hand.add_card(card.face_down());
    }

    /// Returns whether the hole card has been turned over.
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.hand.cards().iter().all(Card::is_face_up)
    }

    /// Turns the hole card face up.
    pub fn reveal_hole(&mut self) {
        if self.hand.reveal_all() {
            tracing::debug!(score = self.hand.score(), "dealer reveals hole card");
        }
    }

    /// Returns whether the policy calls for another card.
    #[must_use]
    pub fn should_draw(&self) -> bool {
        self.hand.score() < DEALER_STANDS_ON
    }

    /// Plays out the hand: reveals the hole card, then draws while the score
    /// is below 17.
    ///
    /// Returns the cards drawn, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck runs out while the dealer
    /// must draw. Cards drawn before that stay in the hand.
    pub fn play(&mut self, deck: &mut Deck) -> Result<Vec<Card>, DeckError> {
        self.reveal_hole();

        let mut drawn = Vec::new();
        while self.should_draw() {
            let card = deck.draw()?;
            self.hand.add_card(card);
            drawn.push(card);
        }

        tracing::debug!(
            score = self.hand.score(),
            drawn = drawn.len(),
            "dealer stands"
        );
        Ok(drawn)
    }

    /// Discards the hand.
    pub fn clear(&mut self) {
        self.hand.clear();
    }
}
