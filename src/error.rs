use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealPlanError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Failure reported by a non-HTTP `MealPlanService`.
    #[error("Meal plan service failed: {0}")]
    Service(String),

    #[error("Calorie goal {0} is outside 1200..=4000 or not a multiple of 100")]
    CaloriesOutOfRange(u32),

    #[error("Unknown diet type: {0}")]
    UnknownDietType(String),

    #[error("Unknown meal count: {0} (expected 3, 4, 5 or 6)")]
    UnknownMealCount(String),

    #[error("Ambiguous token, a field value contains a delimiter: {0}")]
    AmbiguousToken(String),

    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

pub type Result<T> = std::result::Result<T, MealPlanError>;
