use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::error::Error;

/// A playing card as an immutable `(Rank, Suit)` pair.
///
/// The textual form is always two characters, rank then suit, e.g. `"As"`
/// (ace of spades) or `"Tc"` (ten of clubs). Parsing is strict: no trimming,
/// no lowercase ranks, no `"10"` for Ten.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// u8 isomorphism
/// location in a sorted deck 0..52, rank-major
/// Ts
/// 8 * 4 + 3 = 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) * 4 + u8::from(c.suit)
    }
}
impl TryFrom<u8> for Card {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        let rank = Rank::try_from(n / 4).map_err(|_| n)?;
        let suit = Suit::ALL[(n % 4) as usize];
        Ok(Self::from((rank, suit)))
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidCard(s.to_string());
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Self::from((
                Rank::try_from(r).map_err(|_| invalid())?,
                Suit::try_from(u).map_err(|_| invalid())?,
            ))),
            _ => Err(invalid()),
        }
    }
}
impl std::str::FromStr for Card {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::try_from(token.as_str()).map_err(serde::de::Error::custom)
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        let n = rand::rng().random_range(0..52u8);
        Self::from((Rank::ALL[(n / 4) as usize], Suit::ALL[(n % 4) as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> impl Iterator<Item = Card> {
        Rank::ALL
            .into_iter()
            .flat_map(|r| Suit::ALL.into_iter().map(move |s| Card::from((r, s))))
    }

    #[test]
    fn parses_all_52_tokens() {
        let tokens = "23456789TJQKA"
            .chars()
            .flat_map(|r| "shdc".chars().map(move |s| format!("{}{}", r, s)))
            .collect::<Vec<String>>();
        assert_eq!(tokens.len(), 52);
        for token in tokens {
            let card = Card::try_from(token.as_str()).expect("valid token");
            assert_eq!(card.to_string(), token);
        }
    }

    #[test]
    fn ordinal_rank_and_raw_suit() {
        let card = Card::try_from("As").unwrap();
        assert_eq!(u8::from(card.rank()), 12);
        assert_eq!(card.suit(), Suit::Spade);
        let card = Card::try_from("2c").unwrap();
        assert_eq!(u8::from(card.rank()), 0);
        assert_eq!(card.suit(), Suit::Club);
        let card = Card::try_from("Td").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
    }

    #[test]
    fn rejects_wrong_length() {
        for token in ["", "A", "Ass", "10s", " As", "As ", "AsKd"] {
            assert_eq!(
                Card::try_from(token),
                Err(Error::InvalidCard(token.to_string()))
            );
        }
    }

    #[test]
    fn rejects_rank_outside_alphabet() {
        for token in ["1s", "0h", "as", "ts", "Xd", "Bc"] {
            assert_eq!(
                Card::try_from(token),
                Err(Error::InvalidCard(token.to_string()))
            );
        }
    }

    #[test]
    fn rejects_suit_outside_alphabet() {
        for token in ["AS", "Kx", "QH", "2♠", "7 "] {
            assert_eq!(
                Card::try_from(token),
                Err(Error::InvalidCard(token.to_string()))
            );
        }
    }

    #[test]
    fn bijective_u8() {
        for card in deck() {
            assert_eq!(Ok(card), Card::try_from(u8::from(card)));
        }
        assert_eq!(Card::try_from(52u8), Err(52));
    }

    #[test]
    fn random_cards_are_valid_tokens() {
        for _ in 0..256 {
            let card = Card::random();
            assert_eq!(Ok(card), Card::try_from(card.to_string().as_str()));
        }
    }

    #[test]
    fn serde_as_token() {
        let card = Card::try_from("Qh").unwrap();
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"Qh\"");
        assert_eq!(serde_json::from_str::<Card>("\"Qh\"").unwrap(), card);
        assert!(serde_json::from_str::<Card>("\"Qz\"").is_err());
    }
}
