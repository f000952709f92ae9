// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator counts the hand cards by rank to find the repeated
//! groups, then assigns the highest matching category from royal flush
//! down to high card. Hands in the same category are ordered by a fixed
//! list of tie-break ranks, most significant first.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Hand, Rank};

/// A hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No repeated ranks, no flush, no straight.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two distinct pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// The ace high straight in one suit.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of an evaluated hand.
///
/// A value holds the hand category and up to five tie-break ranks whose
/// meaning depends on the category, a pair hand stores the pair rank
/// followed by the three kickers while a flush stores all five ranks in
/// descending order. Values order by category first and then by the
/// tie-break ranks compared most significant first, unused tie-break
/// slots stay zero on both sides of a same category comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    // Field order drives the derived lexicographic ordering.
    rank: HandRank,
    tiebreaks: [u8; 5],
}

impl HandValue {
    /// Evaluates a five cards hand.
    pub fn eval(hand: &Hand) -> Self {
        let cards = hand.cards();

        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        // All five ranks in descending order with equal ranks adjacent.
        let mut sorted = [0u8; 5];
        let mut idx = 0;
        for rank in Rank::ranks().rev() {
            for _ in 0..counts[rank.value() as usize] {
                sorted[idx] = rank.value();
                idx += 1;
            }
        }

        let mut quad = None;
        let mut triple = None;
        let mut pairs = [0u8; 2];
        let mut npairs = 0;
        for rank in Rank::ranks().rev() {
            match counts[rank.value() as usize] {
                4 => quad = Some(rank.value()),
                3 => triple = Some(rank.value()),
                2 => {
                    pairs[npairs] = rank.value();
                    npairs += 1;
                }
                _ => (),
            }
        }

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = sorted.windows(2).all(|w| w[0] == w[1] + 1);
        // The wheel is the only straight where the ace counts as one.
        let wheel = sorted == [14, 5, 4, 3, 2];

        let (rank, tiebreaks) = if flush && (straight || wheel) {
            if sorted[0] == 14 && sorted[1] == 13 {
                (HandRank::RoyalFlush, sorted)
            } else {
                (HandRank::StraightFlush, sorted)
            }
        } else if let Some(quad) = quad {
            (HandRank::FourOfAKind, with_kickers(&[quad], &sorted))
        } else if let (Some(triple), 1) = (triple, npairs) {
            (HandRank::FullHouse, with_kickers(&[triple, pairs[0]], &sorted))
        } else if flush {
            (HandRank::Flush, sorted)
        } else if straight || wheel {
            let high = if wheel { 5 } else { sorted[0] };
            (HandRank::Straight, [high, 0, 0, 0, 0])
        } else if let Some(triple) = triple {
            (HandRank::ThreeOfAKind, with_kickers(&[triple], &sorted))
        } else if npairs == 2 {
            (HandRank::TwoPair, with_kickers(&pairs, &sorted))
        } else if npairs == 1 {
            (HandRank::OnePair, with_kickers(&pairs[..1], &sorted))
        } else {
            (HandRank::HighCard, sorted)
        };

        Self { rank, tiebreaks }
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Returns the tie-break ranks, unused slots are zero.
    pub fn tiebreaks(&self) -> &[u8; 5] {
        &self.tiebreaks
    }
}

/// Compares two hands, the winning hand is the greater one.
pub fn compare(h1: &Hand, h2: &Hand) -> Ordering {
    HandValue::eval(h1).cmp(&HandValue::eval(h2))
}

/// Builds a tie-break list from the grouped ranks followed by the
/// remaining ranks in descending order.
fn with_kickers(grouped: &[u8], sorted: &[u8; 5]) -> [u8; 5] {
    let mut tiebreaks = [0u8; 5];
    let mut idx = 0;

    for &rank in grouped {
        tiebreaks[idx] = rank;
        idx += 1;
    }

    for &rank in sorted {
        if !grouped.contains(&rank) {
            tiebreaks[idx] = rank;
            idx += 1;
        }
    }

    tiebreaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Deck;

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&s.parse::<Hand>().unwrap())
    }

    fn cmp(h1: &str, h2: &str) -> Ordering {
        compare(&h1.parse().unwrap(), &h2.parse().unwrap())
    }

    #[test]
    fn high_card() {
        let value = eval("AS KH QD JC 9S");
        assert_eq!(value.rank(), HandRank::HighCard);
        assert_eq!(value.tiebreaks(), &[14, 13, 12, 11, 9]);
    }

    #[test]
    fn one_pair() {
        let value = eval("KH KD 9C QS 2H");
        assert_eq!(value.rank(), HandRank::OnePair);
        assert_eq!(value.tiebreaks(), &[13, 12, 9, 2, 0]);
    }

    #[test]
    fn two_pair() {
        let value = eval("2H 2D 5C 5S 9H");
        assert_eq!(value.rank(), HandRank::TwoPair);
        assert_eq!(value.tiebreaks(), &[5, 2, 9, 0, 0]);
    }

    #[test]
    fn three_of_a_kind() {
        let value = eval("7H 7D 7C AS 2H");
        assert_eq!(value.rank(), HandRank::ThreeOfAKind);
        assert_eq!(value.tiebreaks(), &[7, 14, 2, 0, 0]);
    }

    #[test]
    fn straight() {
        let value = eval("TS JH QD KC AS");
        assert_eq!(value.rank(), HandRank::Straight);
        assert_eq!(value.tiebreaks(), &[14, 0, 0, 0, 0]);
    }

    #[test]
    fn wheel_straight() {
        let value = eval("4H 3D 2C AS 5H");
        assert_eq!(value.rank(), HandRank::Straight);
        assert_eq!(value.tiebreaks(), &[5, 0, 0, 0, 0]);
    }

    #[test]
    fn flush() {
        let value = eval("AS KS QS JS 9S");
        assert_eq!(value.rank(), HandRank::Flush);
        assert_eq!(value.tiebreaks(), &[14, 13, 12, 11, 9]);
    }

    #[test]
    fn full_house() {
        let value = eval("2S 2H 2D 3C 3S");
        assert_eq!(value.rank(), HandRank::FullHouse);
        assert_eq!(value.tiebreaks(), &[2, 3, 0, 0, 0]);
    }

    #[test]
    fn four_of_a_kind() {
        let value = eval("AS AH AD AC KS");
        assert_eq!(value.rank(), HandRank::FourOfAKind);
        assert_eq!(value.tiebreaks(), &[14, 13, 0, 0, 0]);
    }

    #[test]
    fn straight_flush() {
        let value = eval("9S KS QS JS TS");
        assert_eq!(value.rank(), HandRank::StraightFlush);
        assert_eq!(value.tiebreaks(), &[13, 12, 11, 10, 9]);
    }

    #[test]
    fn wheel_straight_flush() {
        let value = eval("AS 2S 3S 4S 5S");
        assert_eq!(value.rank(), HandRank::StraightFlush);
    }

    #[test]
    fn royal_flush() {
        let value = eval("AS KS QS JS TS");
        assert_eq!(value.rank(), HandRank::RoyalFlush);
        assert_eq!(value.tiebreaks(), &[14, 13, 12, 11, 10]);
    }

    #[test]
    fn category_order() {
        use HandRank::*;
        let ranks = [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ];

        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn royal_flush_beats_four_of_a_kind() {
        assert_eq!(cmp("AS KS QS JS TS", "2H 2D 2C 2S 3H"), Ordering::Greater);
    }

    #[test]
    fn higher_top_pair_wins() {
        assert_eq!(cmp("2H 2D 5C 5S 9H", "3H 3D 8C 8S 2C"), Ordering::Less);
    }

    #[test]
    fn wheel_ranks_below_six_high_straight() {
        assert_eq!(cmp("4H 3D 2C AS 5H", "6H 5D 4C 3S 2H"), Ordering::Less);
    }

    #[test]
    fn equal_ranks_tie() {
        assert_eq!(cmp("2H 3H 4H 5H 7H", "2S 3S 4S 5S 7S"), Ordering::Equal);
        assert_eq!(cmp("AS KH QD JC 9S", "AS KH QD JC 9S"), Ordering::Equal);
    }

    #[test]
    fn two_pair_ranks_stay_descending() {
        // Same top pair, the second pair decides.
        assert_eq!(cmp("9H 9D 5C 5S 2H", "9C 9S 6C 6S 2D"), Ordering::Less);
        // Higher top pair beats higher second pair.
        assert_eq!(cmp("TH TD 2C 2S 9H", "9C 9S 8C 8S AD"), Ordering::Greater);
    }

    #[test]
    fn kickers_break_ties() {
        assert_eq!(cmp("KH KD 9C QS 2H", "KS KC 9D QH 3S"), Ordering::Less);
        assert_eq!(cmp("7H 7D 7C AS 2H", "7H 7D 7C KS QH"), Ordering::Greater);
        assert_eq!(cmp("AS AH AD AC KS", "AS AH AD AC QS"), Ordering::Greater);
        assert_eq!(cmp("AS KH QD JC 9S", "AS KH QD JC 8S"), Ordering::Greater);
    }

    #[test]
    fn compare_properties() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let h1 = deck.deal_hand();
            let h2 = deck.deal_hand();

            assert_eq!(compare(&h1, &h1), Ordering::Equal);
            assert_eq!(compare(&h2, &h2), Ordering::Equal);
            assert_eq!(compare(&h1, &h2), compare(&h2, &h1).reverse());
        }
    }

    #[test]
    fn five_cards_census() {
        let mut counts = [0u32; 10];
        Deck::default().for_each_hand(|hand| {
            counts[HandValue::eval(hand).rank() as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 36);
        assert_eq!(counts[HandRank::RoyalFlush as usize], 4);
    }
}
