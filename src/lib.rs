//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals from a shuffled 52-card
//! deck, lets the player hit or stand, plays the dealer to 17, settles the
//! round, and tracks the player's balance and bet between rounds.
//!
//! # Example
//!
//! ```
//! use blackjack_engine::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.start().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//!
//! let result = game.stand().unwrap();
//! assert_eq!(game.check_winner(), Ok(result.outcome));
//! game.finish_round().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod money;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError, OptionsError, ShowdownError, StartError};
pub use game::{BetChange, Game, GameState};
pub use hand::{Hand, SCORE_LIMIT};
pub use options::GameOptions;
pub use participant::{DEALER_STANDS_ON, Dealer, Player};
pub use result::{Outcome, RoundResult};
