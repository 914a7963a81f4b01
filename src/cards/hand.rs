use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::HAND_SIZE;
use crate::error::Error;

/// Hand is the five hole cards of a Big O starting hand, in the order they were given.
///
/// Unlike a dealt hand this is not a set: nothing checks that the five cards
/// could have come from one deck, so `As As Kd Qc Jh` is a legal Hand holding
/// a pair of aces. Every statistic the rater takes is a multiset count, so
/// order never matters.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.0.iter().map(Card::rank)
    }
    pub fn suits(&self) -> impl Iterator<Item = Suit> + '_ {
        self.0.iter().map(Card::suit)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}
impl From<Hand> for [Card; HAND_SIZE] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

/// token slice isomorphism
/// arity is checked before any token is parsed
impl<S> TryFrom<&[S]> for Hand
where
    S: AsRef<str>,
{
    type Error = Error;
    fn try_from(tokens: &[S]) -> Result<Self, Self::Error> {
        let tokens = <&[S; HAND_SIZE]>::try_from(tokens)
            .map_err(|_| Error::WrongHandSize(tokens.len()))?;
        let mut cards = [Card::from((Rank::default(), Suit::default())); HAND_SIZE];
        for (card, token) in cards.iter_mut().zip(tokens) {
            let token: &str = token.as_ref();
            *card = Card::try_from(token)?;
        }
        Ok(Self(cards))
    }
}

/// str isomorphism
/// whitespace separated tokens, "As Kd Qc Jh 2s"
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.split_whitespace().collect::<Vec<&str>>().as_slice())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tokens = self.0.iter().map(Card::to_string).collect::<Vec<String>>();
        write!(f, "{}", tokens.join(" "))
    }
}

impl serde::Serialize for Hand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

/// independent draws, so duplicates are possible just like caller input
impl Arbitrary for Hand {
    fn random() -> Self {
        Self(std::array::from_fn(|_| Card::random()))
    }
}
