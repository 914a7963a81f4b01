/// How the ranks of a starting hand pair up.
///
/// Only the multiplicity of ranks matters, never which ranks they are.
/// Variants are listed in the order they are searched for, so a hand
/// is always classified by the first one that fits.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    FourOfAKind,
    FullHouse,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    Unpaired,
}

impl Pattern {
    pub const fn bonus(&self) -> u8 {
        match self {
            Pattern::FourOfAKind => 5,
            Pattern::FullHouse => 4,
            Pattern::ThreeOfAKind => 3,
            Pattern::TwoPair => 3,
            Pattern::OnePair => 2,
            Pattern::Unpaired => 0,
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Pattern::FourOfAKind => "four of a kind",
            Pattern::FullHouse => "full house",
            Pattern::ThreeOfAKind => "three of a kind",
            Pattern::TwoPair => "two pair",
            Pattern::OnePair => "one pair",
            Pattern::Unpaired => "unpaired",
        })
    }
}
