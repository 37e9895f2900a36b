//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;

/// An ordered pile of cards. The next card to be drawn is the front of the
/// pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, stored back to front so drawing is a pop.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card set in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.reverse();
        Self { cards }
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// The pile may hold fewer than 52 cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCard`] if a rank lies outside 1..=13 and
    /// [`DeckError::DuplicateCard`] if the same rank and suit appear twice.
    pub fn stacked(draws: &[Card]) -> Result<Self, DeckError> {
        for (index, card) in draws.iter().enumerate() {
            if !(ACE..=KING).contains(&card.rank) {
                return Err(DeckError::InvalidCard);
            }
            if draws[..index].iter().any(|seen| seen.same_face(card)) {
                return Err(DeckError::DuplicateCard);
            }
        }

        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Ok(Self { cards })
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // Fisher-Yates over the whole pile.
        self.cards.shuffle(rng);
        tracing::debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
