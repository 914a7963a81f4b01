use super::evaluator::Evaluator;
use super::pattern::Pattern;
use super::rating::Rating;
use super::suitedness::Suitedness;
use crate::BASE_RATING;
use crate::LOW_CARD_BONUS;
use crate::LOW_CARD_THRESHOLD;
use crate::cards::hand::Hand;

/// Itemized score of a starting hand.
///
/// Three independent components are added to the base: how the ranks pair,
/// how the suits cluster, and how many cards could make a low. The sum is
/// then clamped into a Rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Breakdown {
    pattern: Pattern,
    suitedness: Suitedness,
    lows: usize,
    points: u8,
    rating: Rating,
}

impl Breakdown {
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }
    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }
    pub fn lows(&self) -> usize {
        self.lows
    }
    pub fn low_bonus(&self) -> u8 {
        Self::low_bonus_of(self.lows)
    }
    /// unclamped sum of base and bonuses
    pub fn points(&self) -> u8 {
        self.points
    }
    pub fn rating(&self) -> Rating {
        self.rating
    }

    fn low_bonus_of(lows: usize) -> u8 {
        if lows >= LOW_CARD_THRESHOLD {
            LOW_CARD_BONUS
        } else {
            0
        }
    }
}

impl From<&Hand> for Breakdown {
    fn from(hand: &Hand) -> Self {
        let eval = Evaluator::from(hand);
        let pattern = eval.find_pattern();
        let suitedness = eval.find_suitedness();
        let lows = eval.count_lows();
        let points = BASE_RATING + pattern.bonus() + suitedness.bonus() + Self::low_bonus_of(lows);
        let rating = Rating::clamped(points);
        log::trace!(
            "{} => {} (+{}) {} (+{}) {} lows => {} points",
            hand,
            pattern,
            pattern.bonus(),
            suitedness,
            suitedness.bonus(),
            lows,
            points
        );
        Self {
            pattern,
            suitedness,
            lows,
            points,
            rating,
        }
    }
}
impl From<Hand> for Breakdown {
    fn from(hand: Hand) -> Self {
        Self::from(&hand)
    }
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let lows = format!("{} low cards", self.lows);
        writeln!(f, "  {:<16} +{}", "base", BASE_RATING)?;
        writeln!(f, "  {:<16} +{}", self.pattern, self.pattern.bonus())?;
        writeln!(f, "  {:<16} +{}", self.suitedness, self.suitedness.bonus())?;
        write!(f, "  {:<16} +{}", lows, self.low_bonus())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(s: &str) -> Breakdown {
        Breakdown::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn unpaired_offsuit_broadway() {
        let b = breakdown("As Kd Qc Jh 2s");
        assert_eq!(b.pattern(), Pattern::Unpaired);
        assert_eq!(b.suitedness(), Suitedness::Rainbow);
        assert_eq!(b.lows(), 2);
        assert_eq!(b.low_bonus(), 0);
        assert_eq!(b.points(), 1);
        assert_eq!(u8::from(b.rating()), 1);
    }

    #[test]
    fn quad_aces() {
        let b = breakdown("As Ah Ad Ac 2s");
        assert_eq!(b.pattern(), Pattern::FourOfAKind);
        assert_eq!(b.suitedness(), Suitedness::Rainbow);
        assert_eq!(b.lows(), 5);
        assert_eq!(b.low_bonus(), 2);
        assert_eq!(u8::from(b.rating()), 8);
    }

    #[test]
    fn double_suited_two_pair() {
        let b = breakdown("Ks Kh Qs Qh 2c");
        assert_eq!(b.pattern(), Pattern::TwoPair);
        assert_eq!(b.suitedness(), Suitedness::DoubleSuited);
        assert_eq!(b.lows(), 1);
        assert_eq!(u8::from(b.rating()), 6);
    }

    #[test]
    fn full_house_double_suited_low() {
        // 1 + 4 + 2 + 2, the best a real deck allows
        let b = breakdown("As Ah Ad 2s 2h");
        assert_eq!(b.pattern(), Pattern::FullHouse);
        assert_eq!(b.suitedness(), Suitedness::DoubleSuited);
        assert_eq!(u8::from(b.rating()), 9);
    }

    #[test]
    fn wheel_draw_alone() {
        let b = breakdown("As 2d 3c 9h Ks");
        assert_eq!(b.pattern(), Pattern::Unpaired);
        assert_eq!(b.suitedness(), Suitedness::Rainbow);
        assert_eq!(b.low_bonus(), 2);
        assert_eq!(u8::from(b.rating()), 3);
    }

    #[test]
    fn near_monotone_single_point() {
        let b = breakdown("9s 8s 7s 6s Kh");
        assert_eq!(b.suitedness(), Suitedness::NearMonotone);
        assert_eq!(u8::from(b.rating()), 2);
    }

    #[test]
    fn itemized_display() {
        let text = breakdown("Ks Kh Qs Qh 2c").to_string();
        let lines = text.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("two pair") && lines[1].ends_with("+3"));
        assert!(lines[2].contains("double suited") && lines[2].ends_with("+2"));
        assert!(lines[3].contains("1 low cards") && lines[3].ends_with("+0"));
    }

    #[test]
    fn serializes_components() {
        let json = serde_json::to_value(breakdown("Ks Kh Qs Qh 2c")).unwrap();
        assert_eq!(json["pattern"], "two_pair");
        assert_eq!(json["suitedness"], "double_suited");
        assert_eq!(json["lows"], 1);
        assert_eq!(json["points"], 6);
        assert_eq!(json["rating"], 6);
    }
}
