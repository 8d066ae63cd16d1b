use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::models::{Calories, DietType, Preferences};
use crate::request::Encoding;

/// Meal plan form: collect dietary preferences and ask the planner service for a plan.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_form")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the meal-plan service (overrides MEAL_PLANNER_URL).
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// How field values are written into the request token.
    #[arg(long, value_enum, default_value_t = Encoding::Legacy, global = true)]
    pub encoding: Encoding,

    /// Request timeout in seconds. Unset or 0 waits indefinitely.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the form interactively and generate a meal plan.
    Form,

    /// Generate a meal plan from command-line flags.
    Plan(PreferenceArgs),

    /// Show the token and URL that would be sent, without sending.
    Preview {
        #[command(flatten)]
        prefs: PreferenceArgs,

        /// Print a JSON object instead of plain text.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Form
    }
}

/// The four form fields as flags.
#[derive(Args, Debug, Clone)]
pub struct PreferenceArgs {
    /// Diet type: omnivore, vegetarian, vegan, keto or paleo (typos are matched).
    #[arg(short, long)]
    pub diet: Option<String>,

    /// Daily calorie goal, 1200 to 4000 in steps of 100.
    #[arg(short, long, default_value = "2000")]
    pub calories: u32,

    /// Meals per day: 3, 4, 5 or 6.
    #[arg(short, long, default_value = "3")]
    pub meals: String,

    /// Allergies or restrictions, free text.
    #[arg(short, long, default_value = "")]
    pub allergies: String,
}

impl PreferenceArgs {
    /// Validate the flags the way the form widgets would constrain them.
    pub fn to_preferences(&self) -> Result<Preferences> {
        let diet_type = self
            .diet
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(DietType::fuzzy_match)
            .transpose()?;

        Ok(Preferences {
            diet_type,
            calories: Calories::new(self.calories)?,
            meals: self.meals.parse()?,
            allergies: self.allergies.clone(),
        })
    }
}
