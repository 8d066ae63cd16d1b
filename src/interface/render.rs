use crate::models::{MealPlanResult, Preferences};
use crate::request::MealPlanRequest;

/// Display the preferences currently held by the form.
pub fn display_preferences(prefs: &Preferences) {
    let diet = prefs.diet_type.map(|d| d.label()).unwrap_or("(not set)");
    let allergies = if prefs.allergies.is_empty() {
        "(none)"
    } else {
        prefs.allergies.as_str()
    };

    println!();
    println!("=== Preferences ===");
    println!("  Diet type:  {}", diet);
    println!("  Calories:   {} calories", prefs.calories);
    println!("  Meals/day:  {}", prefs.meals);
    println!("  Allergies:  {}", allergies);
    println!();
}

/// Display the token and URL a request would use, without sending it.
pub fn display_request_preview(request: &MealPlanRequest) {
    println!("Token: {}", request.token);
    println!("URL:   {}", request.url);
}

/// Warn that the verbatim token cannot be split back into its fields.
pub fn display_ambiguity_warning() {
    eprintln!(
        "Warning: allergies contain '-' or ':'; the service may misread them. \
         Use --encoding escaped to escape them."
    );
}

/// Display the meal plan text exactly as the service returned it.
pub fn display_meal_plan(plan: Option<&MealPlanResult>) {
    match plan {
        Some(plan) if !plan.is_empty() => {
            println!();
            println!("=== Your Personalized Meal Plan ===");
            println!();
            println!("{}", plan);
            println!();
        }
        _ => println!("No meal plan generated yet."),
    }
}
