// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for five cards hands. The evaluator classifies a
//! hand into one of the ten standard categories and computes the tie-break
//! ranks that order hands within the same category.
//!
//! To use the evaluator create two hands and use [HandValue] to evaluate
//! and order them, or [compare] to order the hands directly:
//!
//! ```
//! # use showdown_eval::*;
//! let v1 = HandValue::eval(&"2H 2D 5C 5S 9H".parse::<Hand>().unwrap());
//! let v2 = HandValue::eval(&"3H 3D 8C 8S 2C".parse::<Hand>().unwrap());
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, compare};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Hand, HandError, Rank, Suit};
