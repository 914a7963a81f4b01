use super::breakdown::Breakdown;
use crate::MAX_RATING;
use crate::cards::hand::Hand;

/// Strength of a Big O starting hand, from 1 (weak) to 10 (strong).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(MAX_RATING);

    /// saturate an additive score into 1..=10
    pub fn clamped(points: u8) -> Self {
        Self(points.clamp(Self::MIN.0, Self::MAX.0))
    }
}

impl From<&Hand> for Rating {
    fn from(hand: &Hand) -> Self {
        Breakdown::from(hand).rating()
    }
}
impl From<Hand> for Rating {
    fn from(hand: Hand) -> Self {
        Self::from(&hand)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 {
        r.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
