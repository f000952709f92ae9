// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! a [Hand] type for a five cards Poker hand that can be parsed from the
//! two characters per card text encoding:
//!
//! ```
//! # use showdown_cards::Hand;
//! let hand = "AS KS QS JS TS".parse::<Hand>().unwrap();
//! assert_eq!(hand.to_string(), "AS KS QS JS TS");
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating hands in the deck.
//!
//! For example to iterate through all five cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 5 cards hands (2.5M hands).
//! let mut counter = 0;
//! Deck::default().for_each_hand(|_| counter += 1);
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
mod hand;

pub use deck::{Card, Deck, Rank, Suit};
pub use hand::{Hand, HandError};
