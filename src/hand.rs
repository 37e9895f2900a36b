//! Hand representation and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{ACE, Card};

/// Highest score a hand may reach without busting.
pub const SCORE_LIMIT: u8 = 21;

/// Scores a set of cards.
///
/// Every ace starts at 11; while the total is over the limit, one ace at a
/// time drops to 1. Returns the score and whether an ace is still counted
/// high.
fn evaluate<'a>(cards: impl Iterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == ACE {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > SCORE_LIMIT && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// Cards held by the player or the dealer, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the last card dealt.
    #[must_use]
    pub fn last_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Turns every face-down card face up.
    ///
    /// Returns whether any card was turned.
    pub fn reveal_all(&mut self) -> bool {
        let mut revealed = false;
        for card in self.cards.iter_mut().filter(|c| !c.is_face_up()) {
            card.reveal();
            revealed = true;
        }
        revealed
    }

    /// Calculates the score of every card, face up or not.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate(self.cards.iter()).0
    }

    /// Calculates the score of the face-up cards only.
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        evaluate(self.cards.iter().filter(|c| c.is_face_up())).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(self.cards.iter()).1
    }

    /// Returns whether the hand is a natural: 21 with exactly two cards.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == SCORE_LIMIT
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > SCORE_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
