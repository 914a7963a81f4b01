use super::pattern::Pattern;
use super::suitedness::Suitedness;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;

/// Multiset view of a Hand.
///
/// Rank and suit multiplicities are tallied once up front, then each
/// classifier is an ordered search where the first match wins. The
/// searches mirror each other: try the strongest shape, fall through
/// to the next, and bottom out at a shape that always fits.
pub struct Evaluator {
    ranks: [u8; 13],
    suits: [u8; 4],
    lows: usize,
}

impl From<&Hand> for Evaluator {
    fn from(hand: &Hand) -> Self {
        let mut ranks = [0u8; 13];
        let mut suits = [0u8; 4];
        hand.ranks().for_each(|r| ranks[u8::from(r) as usize] += 1);
        hand.suits().for_each(|s| suits[u8::from(s) as usize] += 1);
        let lows = hand.ranks().filter(Rank::is_wheel).count();
        Self { ranks, suits, lows }
    }
}
impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self::from(&hand)
    }
}

impl Evaluator {
    pub fn find_pattern(&self) -> Pattern {
        None.or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Pattern::Unpaired)
    }
    pub fn find_suitedness(&self) -> Suitedness {
        None.or_else(|| self.find_double_suited())
            .or_else(|| self.find_near_monotone())
            .unwrap_or(Suitedness::Rainbow)
    }
    /// cards with a rank in A-2-3-4-5, duplicates counted individually
    pub fn count_lows(&self) -> usize {
        self.lows
    }

    ///

    fn find_4_oak(&self) -> Option<Pattern> {
        self.has_rank_of_n_oak(4).then_some(Pattern::FourOfAKind)
    }
    fn find_3_oak_2_oak(&self) -> Option<Pattern> {
        (self.has_rank_of_n_oak(3) && self.has_rank_of_n_oak(2)).then_some(Pattern::FullHouse)
    }
    fn find_3_oak(&self) -> Option<Pattern> {
        self.has_rank_of_n_oak(3).then_some(Pattern::ThreeOfAKind)
    }
    fn find_2_oak_2_oak(&self) -> Option<Pattern> {
        (self.count_ranks_of_n_oak(2) == 2).then_some(Pattern::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Pattern> {
        self.has_rank_of_n_oak(2).then_some(Pattern::OnePair)
    }
    fn find_double_suited(&self) -> Option<Suitedness> {
        (self.count_suits_of_n(2) >= 2).then_some(Suitedness::DoubleSuited)
    }
    fn find_near_monotone(&self) -> Option<Suitedness> {
        (self.suits.iter().any(|&n| n >= 4)).then_some(Suitedness::NearMonotone)
    }

    /// exact multiplicity: a rank held five times (only possible with
    /// duplicate tokens) is not four of a kind
    fn has_rank_of_n_oak(&self, n: u8) -> bool {
        self.count_ranks_of_n_oak(n) > 0
    }
    fn count_ranks_of_n_oak(&self, n: u8) -> usize {
        self.ranks.iter().filter(|&&k| k == n).count()
    }
    fn count_suits_of_n(&self, n: u8) -> usize {
        self.suits.iter().filter(|&&k| k == n).count()
    }
}
