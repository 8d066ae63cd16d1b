use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{MealPlanError, Result};
use crate::request::constants::{
    CALORIES_DEFAULT, CALORIES_MAX, CALORIES_MIN, CALORIES_STEP, DIET_MATCH_THRESHOLD,
};

/// The diet families offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Omnivore,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
}

impl DietType {
    pub const ALL: [DietType; 5] = [
        DietType::Omnivore,
        DietType::Vegetarian,
        DietType::Vegan,
        DietType::Keto,
        DietType::Paleo,
    ];

    /// Wire value, as sent in the token.
    pub fn as_str(self) -> &'static str {
        match self {
            DietType::Omnivore => "omnivore",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
            DietType::Keto => "keto",
            DietType::Paleo => "paleo",
        }
    }

    /// Human label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            DietType::Omnivore => "Omnivore",
            DietType::Vegetarian => "Vegetarian",
            DietType::Vegan => "Vegan",
            DietType::Keto => "Keto",
            DietType::Paleo => "Paleo",
        }
    }

    /// Resolve free-typed input, falling back to fuzzy matching.
    ///
    /// Exact (case-insensitive) matches win; otherwise the single best
    /// Jaro-Winkler candidate above the threshold is accepted.
    pub fn fuzzy_match(input: &str) -> Result<DietType> {
        let needle = input.trim().to_lowercase();
        if let Ok(diet) = needle.parse() {
            return Ok(diet);
        }

        DietType::ALL
            .iter()
            .map(|d| (*d, jaro_winkler(d.as_str(), &needle)))
            .filter(|(_, score)| *score > DIET_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(d, _)| d)
            .ok_or_else(|| MealPlanError::UnknownDietType(input.to_string()))
    }
}

impl FromStr for DietType {
    type Err = MealPlanError;

    fn from_str(s: &str) -> Result<Self> {
        DietType::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MealPlanError::UnknownDietType(s.to_string()))
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily calorie goal as produced by the slider: 1200..=4000 in steps of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Calories(u32);

impl Calories {
    pub const MIN: Calories = Calories(CALORIES_MIN);
    pub const MAX: Calories = Calories(CALORIES_MAX);

    /// Accept a value only if the slider could have produced it.
    pub fn new(value: u32) -> Result<Self> {
        if (CALORIES_MIN..=CALORIES_MAX).contains(&value) && value % CALORIES_STEP == 0 {
            Ok(Self(value))
        } else {
            Err(MealPlanError::CaloriesOutOfRange(value))
        }
    }

    /// Clamp into range and round to the nearest step, the way a slider snaps.
    pub fn snap(value: u32) -> Self {
        let clamped = value.clamp(CALORIES_MIN, CALORIES_MAX);
        let rounded = (clamped + CALORIES_STEP / 2) / CALORIES_STEP * CALORIES_STEP;
        Self(rounded.min(CALORIES_MAX))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Calories {
    fn default() -> Self {
        Self(CALORIES_DEFAULT)
    }
}

impl TryFrom<u32> for Calories {
    type Error = MealPlanError;

    fn try_from(value: u32) -> Result<Self> {
        Calories::new(value)
    }
}

impl From<Calories> for u32 {
    fn from(value: Calories) -> Self {
        value.0
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of meals per day. String-encoded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealCount {
    #[default]
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
}

impl MealCount {
    pub const ALL: [MealCount; 4] = [
        MealCount::Three,
        MealCount::Four,
        MealCount::Five,
        MealCount::Six,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealCount::Three => "3",
            MealCount::Four => "4",
            MealCount::Five => "5",
            MealCount::Six => "6",
        }
    }

}

impl FromStr for MealCount {
    type Err = MealPlanError;

    fn from_str(s: &str) -> Result<Self> {
        MealCount::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| MealPlanError::UnknownMealCount(s.to_string()))
    }
}

impl fmt::Display for MealCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's dietary preferences for one form session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// `None` until the user picks a diet.
    pub diet_type: Option<DietType>,
    pub calories: Calories,
    pub meals: MealCount,
    /// Free text, e.g. "nuts, dairy, gluten".
    pub allergies: String,
}

impl Preferences {
    /// Wire value of the diet type; empty when unset.
    pub fn diet_type_str(&self) -> &'static str {
        self.diet_type.map(DietType::as_str).unwrap_or("")
    }
}
