// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards Poker hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::Card;

/// Errors from parsing cards and hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A token that does not encode a card.
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    /// A number of cards other than the expected one.
    #[error("malformed hand of {0} cards")]
    MalformedHand(usize),
}

/// A five cards Poker hand.
///
/// A hand can be built from five cards or parsed from five whitespace
/// separated card tokens:
///
/// ```
/// # use showdown_cards::{Hand, Rank};
/// let hand = "4H 3D 2C AS 5H".parse::<Hand>().unwrap();
/// assert_eq!(hand.cards()[3].rank(), Rank::Ace);
/// ```
///
/// The hand size is fixed, a different number of cards fails with
/// [HandError::MalformedHand]. Duplicate cards are not rejected, the
/// evaluator assumes a hand dealt from a single deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; 5]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub fn new(cards: [Card; 5]) -> Self {
        Self(cards)
    }

    /// Returns the hand cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|_| HandError::MalformedHand(cards.len()))?;
        Ok(Self(cards))
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::try_from(cards.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.0.iter();
        if let Some(card) = cards.next() {
            write!(f, "{card}")?;
        }

        for card in cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}
