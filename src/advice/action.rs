use crate::CALL_THRESHOLD;
use crate::RAISE_THRESHOLD;
use crate::rating::rating::Rating;

/// Suggested preflop action for a rated starting hand.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Raise,
    Call,
    Fold,
}

/// bands are inclusive on their lower edge:
/// 8..=10 raise, 5..=7 call, 1..=4 fold
impl From<Rating> for Action {
    fn from(rating: Rating) -> Self {
        match u8::from(rating) {
            n if n >= RAISE_THRESHOLD => Action::Raise,
            n if n >= CALL_THRESHOLD => Action::Call,
            _ => Action::Fold,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Action {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "raise" => Ok(Action::Raise),
            "call" => Ok(Action::Call),
            "fold" => Ok(Action::Fold),
            _ => Err(format!("invalid action str: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Action::Raise => "raise",
            Action::Call => "call",
            Action::Fold => "fold",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_bands() {
        for points in 1..=10u8 {
            let expected = match points {
                1..=4 => Action::Fold,
                5..=7 => Action::Call,
                _ => Action::Raise,
            };
            assert_eq!(Action::from(Rating::clamped(points)), expected);
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(Action::from(Rating::clamped(4)), Action::Fold);
        assert_eq!(Action::from(Rating::clamped(5)), Action::Call);
        assert_eq!(Action::from(Rating::clamped(7)), Action::Call);
        assert_eq!(Action::from(Rating::clamped(8)), Action::Raise);
    }

    #[test]
    fn bijective_str() {
        for action in [Action::Raise, Action::Call, Action::Fold] {
            assert_eq!(Ok(action), Action::try_from(action.to_string().as_str()));
        }
        assert!(Action::try_from("check").is_err());
        assert!(Action::try_from("Raise").is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Call).unwrap(), "\"call\"");
        assert_eq!(
            serde_json::from_str::<Action>("\"fold\"").unwrap(),
            Action::Fold
        );
    }
}
