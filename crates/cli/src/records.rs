// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Matchup records parsing.
use showdown_cards::{Card, Hand, HandError};

/// Number of cards in a matchup record.
const MATCHUP_CARDS: usize = 2 * Hand::SIZE;

/// Parses a matchup line with both players hands.
///
/// A line holds ten space separated card tokens, the first five are the
/// Player 1 cards, the next five are the Player 2 cards.
pub fn parse_matchup(line: &str) -> Result<(Hand, Hand), HandError> {
    let cards = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Card>, _>>()?;

    if cards.len() != MATCHUP_CARDS {
        return Err(HandError::MalformedHand(cards.len()));
    }

    let h1 = Hand::try_from(&cards[..Hand::SIZE])?;
    let h2 = Hand::try_from(&cards[Hand::SIZE..])?;
    Ok((h1, h2))
}
