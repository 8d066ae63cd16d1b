pub mod plan;
pub mod preferences;

pub use plan::MealPlanResult;
pub use preferences::{Calories, DietType, MealCount, Preferences};
