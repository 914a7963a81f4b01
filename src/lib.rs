//! Rule-of-thumb starting hand ratings for Big O (five-card Omaha hi/lo).
//!
//! Five hole-card tokens go in, a rating from 1 to 10 and a suggested
//! preflop action come out:
//!
//! - [`parse`] turns a token like `"As"` into a [`Card`]
//! - [`evaluate`] rates five tokens as a [`Rating`]
//! - [`suggest`] maps that rating to an [`Action`]
//! - [`explain`] exposes the itemized [`Breakdown`] behind a rating
//!
//! This is a heuristic scorer. It does not compute equity, look at the
//! board, or detect straights and flushes among the hole cards.
pub mod advice;
pub mod cards;
pub mod error;
pub mod rating;

pub use advice::Action;
pub use cards::Card;
pub use cards::Hand;
pub use error::Error;
pub use rating::Breakdown;
pub use rating::Rating;

// ============================================================================
// PARAMETERS
// ============================================================================
/// Hole cards dealt to each player in Big O.
pub const HAND_SIZE: usize = 5;
/// Rating of a hand that earns no bonus at all.
pub const BASE_RATING: u8 = 1;
/// Ceiling applied after all bonuses are summed.
pub const MAX_RATING: u8 = 10;
/// Lowest rating that suggests a raise.
pub const RAISE_THRESHOLD: u8 = 8;
/// Lowest rating that suggests a call.
pub const CALL_THRESHOLD: u8 = 5;
/// Wheel cards (A-5) needed before the low bonus applies.
pub const LOW_CARD_THRESHOLD: usize = 3;
/// Bonus for holding enough wheel cards.
pub const LOW_CARD_BONUS: u8 = 2;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// OPERATIONS
// ============================================================================
/// Parse a two-character card token such as `"As"` or `"Tc"`.
pub fn parse(token: &str) -> Result<Card, Error> {
    Card::try_from(token)
}

/// Rate exactly five hole-card tokens from 1 (weak) to 10 (strong).
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> Result<Rating, Error> {
    explain(tokens).map(|breakdown| breakdown.rating())
}

/// Suggest `raise`, `call`, or `fold` for five hole-card tokens.
pub fn suggest<S: AsRef<str>>(tokens: &[S]) -> Result<Action, Error> {
    let rating = evaluate(tokens)?;
    let action = Action::from(rating);
    log::debug!("rating {} suggests {}", rating, action);
    Ok(action)
}

/// Itemize how five hole-card tokens earn their rating.
pub fn explain<S: AsRef<str>>(tokens: &[S]) -> Result<Breakdown, Error> {
    let hand = Hand::try_from(tokens)?;
    let breakdown = Breakdown::from(&hand);
    log::debug!("{} rated {}", hand, breakdown.rating());
    Ok(breakdown)
}

/// Initialize terminal logging at the given verbosity.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    // a second init only happens in tests, where the first logger is fine
    let _ = simplelog::CombinedLogger::init(vec![term]);
}
