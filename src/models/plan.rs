use std::fmt;

use serde::Serialize;

/// Text returned by the meal-plan service.
///
/// Opaque: it is stored and shown exactly as received, whatever the status
/// code or content type of the response was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealPlanResult(String);

impl MealPlanResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty bodies are stored but render as nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MealPlanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
