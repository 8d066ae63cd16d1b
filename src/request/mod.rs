pub mod builder;
pub mod constants;
pub mod token;

pub use builder::MealPlanRequest;
pub use constants::*;
pub use token::{legacy_is_ambiguous, Encoding, Token, TokenFields};
