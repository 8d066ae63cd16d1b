use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{Calories, DietType, MealCount};
use crate::request::constants::{CALORIES_MAX, CALORIES_MIN, CALORIES_STEP};
use crate::state::FormController;

/// Prompt for a diet type. The first entry leaves it unset.
pub fn prompt_diet_type(current: Option<DietType>) -> Result<Option<DietType>> {
    let mut options = vec!["(no preference)".to_string()];
    options.extend(DietType::ALL.iter().map(|d| d.label().to_string()));

    let default = current
        .and_then(|c| DietType::ALL.iter().position(|d| *d == c))
        .map(|i| i + 1)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Diet type")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(selection.checked_sub(1).map(|i| DietType::ALL[i]))
}

/// Prompt for the daily calorie goal, re-asking until the value is on the slider.
pub fn prompt_calories(current: Calories) -> Result<Calories> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Daily calorie goal ({}-{}, steps of {})",
            CALORIES_MIN, CALORIES_MAX, CALORIES_STEP
        ))
        .default(current.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            input
                .trim()
                .parse::<u32>()
                .map_err(|_| "Invalid number".to_string())
                .and_then(|v| Calories::new(v).map(|_| ()).map_err(|e| e.to_string()))
        })
        .interact_text()?;

    // Already validated above; snap keeps this infallible.
    Ok(Calories::snap(input.trim().parse().unwrap_or(current.get())))
}

/// Prompt for the number of meals per day.
pub fn prompt_meal_count(current: MealCount) -> Result<MealCount> {
    let options: Vec<String> = MealCount::ALL
        .iter()
        .map(|m| format!("{} meals", m.as_str()))
        .collect();

    let default = MealCount::ALL
        .iter()
        .position(|m| *m == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Number of meals per day")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(MealCount::ALL[selection])
}

/// Prompt for allergies or restrictions. Any text is accepted.
pub fn prompt_allergies(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Allergies or restrictions (e.g., nuts, dairy, gluten)")
        .default(current.to_string())
        .show_default(!current.is_empty())
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through every field of the form.
pub fn collect_preferences(controller: &mut FormController) -> Result<()> {
    let current = controller.preferences().clone();

    controller.set_diet_type(prompt_diet_type(current.diet_type)?);
    controller.set_calories(prompt_calories(current.calories)?);
    controller.set_meal_count(prompt_meal_count(current.meals)?);
    controller.set_allergies(prompt_allergies(&current.allergies)?);

    Ok(())
}
