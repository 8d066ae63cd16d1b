pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod request;
pub mod state;

pub use client::{HttpMealPlanClient, MealPlanService};
pub use error::{MealPlanError, Result};
pub use models::{Calories, DietType, MealCount, MealPlanResult, Preferences};
pub use request::{Encoding, MealPlanRequest, Token};
pub use state::FormController;
