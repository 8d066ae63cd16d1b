use tracing::{info, warn};

use crate::client::MealPlanService;
use crate::error::Result;
use crate::models::{Calories, DietType, MealCount, MealPlanResult, Preferences};
use crate::request::{Encoding, MealPlanRequest};

/// Holds the form's preferences and the most recent meal plan.
///
/// Nothing here outlives the session: there is no persistence.
pub struct FormController {
    base_url: String,
    encoding: Encoding,
    preferences: Preferences,
    /// Absent until a request succeeds; replaced wholesale afterwards.
    result: Option<MealPlanResult>,
}

impl FormController {
    pub fn new(base_url: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            base_url: base_url.into(),
            encoding,
            preferences: Preferences::default(),
            result: None,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn result(&self) -> Option<&MealPlanResult> {
        self.result.as_ref()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn set_diet_type(&mut self, diet_type: Option<DietType>) {
        self.preferences.diet_type = diet_type;
    }

    /// The `Calories` type already guarantees slider bounds.
    pub fn set_calories(&mut self, calories: Calories) {
        self.preferences.calories = calories;
    }

    pub fn set_meal_count(&mut self, meals: MealCount) {
        self.preferences.meals = meals;
    }

    pub fn set_allergies(&mut self, allergies: impl Into<String>) {
        self.preferences.allergies = allergies.into();
    }

    /// Snapshot the current preferences into a request.
    pub fn request(&self) -> Result<MealPlanRequest> {
        MealPlanRequest::build(&self.base_url, &self.preferences, self.encoding)
    }

    /// Apply a finished request.
    ///
    /// Success replaces the stored plan. Failure is logged, leaves the stored
    /// plan untouched and is handed back to the caller. When several requests
    /// are in flight, outcomes should be applied in the order they resolve:
    /// the last one applied wins.
    pub fn apply(&mut self, outcome: Result<MealPlanResult>) -> Result<&MealPlanResult> {
        match outcome {
            Ok(plan) => {
                info!(bytes = plan.as_str().len(), "stored meal plan");
                let stored: &MealPlanResult = self.result.insert(plan);
                Ok(stored)
            }
            Err(e) => {
                warn!(error = %e, "meal plan request failed, keeping previous plan");
                Err(e)
            }
        }
    }

    /// Build a request, send it through `service` and apply the outcome.
    pub async fn generate<S: MealPlanService>(&mut self, service: &S) -> Result<&MealPlanResult> {
        let outcome = match self.request() {
            Ok(request) => service.fetch(&request).await,
            Err(e) => Err(e),
        };
        self.apply(outcome)
    }
}
