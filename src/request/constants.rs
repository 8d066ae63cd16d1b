/// Base URL of the hosted meal-plan generation service.
pub const DEFAULT_BASE_URL: &str =
    "http://meal-planner-ai-env.eba-hfbjk7ac.us-east-1.elasticbeanstalk.com";

/// Path of the generation endpoint, relative to the base URL.
pub const GENERATE_PATH: &str = "/generate/meal-plan";

/// Name of the single query parameter carrying the token.
pub const MESSAGE_PARAM: &str = "message";

/// Environment variable that overrides the base URL.
pub const ENDPOINT_ENV_VAR: &str = "MEAL_PLANNER_URL";

// ─────────────────────────────────────────────────────────────────────────────
// Calorie slider bounds
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIES_MIN: u32 = 1200;
pub const CALORIES_MAX: u32 = 4000;
pub const CALORIES_STEP: u32 = 100;
pub const CALORIES_DEFAULT: u32 = 2000;

// ─────────────────────────────────────────────────────────────────────────────
// Token layout
// ─────────────────────────────────────────────────────────────────────────────

pub const KEY_DIET_TYPE: &str = "DietType";
pub const KEY_MEALS: &str = "NumberOfMealsPerDay";
pub const KEY_CALORIES: &str = "DailyCalorieGoal";
pub const KEY_ALLERGIES: &str = "Allergies";

/// Separates `key:value` segments.
pub const SEGMENT_DELIMITER: char = '-';

/// Separates a key from its value.
pub const KEY_VALUE_DELIMITER: char = ':';

/// Jaro-Winkler score above which free-typed diet names are accepted.
pub const DIET_MATCH_THRESHOLD: f64 = 0.85;
