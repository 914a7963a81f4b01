use thiserror::Error;

/// Everything that can go wrong between raw tokens and a suggested action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid card: {0:?}")]
    InvalidCard(String),

    #[error("Big O uses exactly 5 hole cards, got {0}")]
    WrongHandSize(usize),
}
