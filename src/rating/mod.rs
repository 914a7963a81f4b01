pub mod breakdown;
pub use breakdown::*;

pub mod evaluator;
pub use evaluator::*;

pub mod pattern;
pub use pattern::*;

pub mod rating;
pub use rating::*;

pub mod suitedness;
pub use suitedness::*;
