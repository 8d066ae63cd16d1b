use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MealPlanError, Result};
use crate::models::Preferences;
use crate::request::constants::{
    KEY_ALLERGIES, KEY_CALORIES, KEY_DIET_TYPE, KEY_MEALS, KEY_VALUE_DELIMITER, SEGMENT_DELIMITER,
};

const TOKEN_KEYS: [&str; 4] = [KEY_DIET_TYPE, KEY_MEALS, KEY_CALORIES, KEY_ALLERGIES];

/// How field values are written into the token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Values inserted verbatim. This is what the hosted service understands,
    /// but a `-` or `:` inside a value makes the token ambiguous.
    #[default]
    Legacy,
    /// `%`, `-` and `:` inside values are percent-escaped.
    Escaped,
}

/// The single string sent as the `message` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Token(String);

/// Raw field values recovered from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFields {
    pub diet_type: String,
    pub meals: String,
    pub calories: String,
    pub allergies: String,
}

impl Token {
    /// Build the token for a set of preferences.
    ///
    /// `DietType:<d>-NumberOfMealsPerDay:<m>-DailyCalorieGoal:<c>-Allergies:<a>`
    pub fn encode(prefs: &Preferences, encoding: Encoding) -> Self {
        let calories = prefs.calories.to_string();
        let values = [
            prefs.diet_type_str(),
            prefs.meals.as_str(),
            calories.as_str(),
            prefs.allergies.as_str(),
        ];

        let segments: Vec<String> = TOKEN_KEYS
            .iter()
            .zip(values)
            .map(|(key, value)| {
                let value = match encoding {
                    Encoding::Legacy => value.to_string(),
                    Encoding::Escaped => escape_value(value),
                };
                format!("{key}{KEY_VALUE_DELIMITER}{value}")
            })
            .collect();

        let separator = SEGMENT_DELIMITER.to_string();
        Self(segments.join(separator.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a token back into its four field values.
    ///
    /// Escapes are only undone for `Encoding::Escaped`; legacy values come
    /// back byte for byte. Fails with `AmbiguousToken` when a legacy token
    /// carries delimiters inside a value, since the split point is lost.
    pub fn parse(token: &str, encoding: Encoding) -> Result<TokenFields> {
        let segments: Vec<&str> = token.split(SEGMENT_DELIMITER).collect();
        if segments.len() != TOKEN_KEYS.len() {
            return Err(ambiguous_or_malformed(token));
        }

        let mut values = Vec::with_capacity(TOKEN_KEYS.len());
        for (segment, expected_key) in segments.iter().zip(TOKEN_KEYS) {
            let (key, value) = segment
                .split_once(KEY_VALUE_DELIMITER)
                .ok_or_else(|| ambiguous_or_malformed(token))?;
            if key != expected_key || value.contains(KEY_VALUE_DELIMITER) {
                return Err(ambiguous_or_malformed(token));
            }
            let value = match encoding {
                Encoding::Legacy => value.to_string(),
                Encoding::Escaped => unescape_value(value)?,
            };
            values.push(value);
        }

        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        Ok(TokenFields {
            diet_type: next(),
            meals: next(),
            calories: next(),
            allergies: next(),
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the verbatim encoding of these preferences would be ambiguous.
pub fn legacy_is_ambiguous(prefs: &Preferences) -> bool {
    // Only the free-text field can carry delimiters.
    prefs
        .allergies
        .contains([SEGMENT_DELIMITER, KEY_VALUE_DELIMITER])
}

fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            '-' => out.push_str("%2D"),
            ':' => out.push_str("%3A"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape_value(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let escape = rest
            .get(idx..idx + 3)
            .ok_or_else(|| MealPlanError::MalformedToken(value.to_string()))?;
        let decoded = match escape.to_ascii_uppercase().as_str() {
            "%25" => '%',
            "%2D" => '-',
            "%3A" => ':',
            _ => return Err(MealPlanError::MalformedToken(value.to_string())),
        };
        out.push(decoded);
        rest = &rest[idx + 3..];
    }
    out.push_str(rest);
    Ok(out)
}

fn ambiguous_or_malformed(token: &str) -> MealPlanError {
    let starts_right = token.starts_with(&format!("{KEY_DIET_TYPE}{KEY_VALUE_DELIMITER}"));
    if starts_right && TOKEN_KEYS.iter().all(|key| token.contains(key)) {
        MealPlanError::AmbiguousToken(token.to_string())
    } else {
        MealPlanError::MalformedToken(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Calories, DietType, MealCount};

    fn vegan_prefs(allergies: &str) -> Preferences {
        Preferences {
            diet_type: Some(DietType::Vegan),
            calories: Calories::new(1800).unwrap(),
            meals: MealCount::Four,
            allergies: allergies.to_string(),
        }
    }

    #[test]
    fn test_legacy_token_exact() {
        let token = Token::encode(&vegan_prefs("nuts"), Encoding::Legacy);
        assert_eq!(
            token.as_str(),
            "DietType:vegan-NumberOfMealsPerDay:4-DailyCalorieGoal:1800-Allergies:nuts"
        );
    }

    #[test]
    fn test_default_preferences_token() {
        let token = Token::encode(&Preferences::default(), Encoding::Legacy);
        assert_eq!(
            token.as_str(),
            "DietType:-NumberOfMealsPerDay:3-DailyCalorieGoal:2000-Allergies:"
        );
    }

    #[test]
    fn test_legacy_passes_delimiters_through() {
        let prefs = vegan_prefs("tree-nuts: all");
        let token = Token::encode(&prefs, Encoding::Legacy);
        assert!(token.as_str().ends_with("-Allergies:tree-nuts: all"));
        assert!(legacy_is_ambiguous(&prefs));
        assert!(matches!(
            Token::parse(token.as_str(), Encoding::Legacy),
            Err(MealPlanError::AmbiguousToken(_))
        ));
    }

    #[test]
    fn test_escaped_token_recovers_fields() {
        let prefs = vegan_prefs("tree-nuts: 100% avoid");
        let token = Token::encode(&prefs, Encoding::Escaped);
        assert_eq!(
            token.as_str(),
            "DietType:vegan-NumberOfMealsPerDay:4-DailyCalorieGoal:1800-Allergies:tree%2Dnuts%3A 100%25 avoid"
        );

        let fields = Token::parse(token.as_str(), Encoding::Escaped).unwrap();
        assert_eq!(fields.diet_type, "vegan");
        assert_eq!(fields.meals, "4");
        assert_eq!(fields.calories, "1800");
        assert_eq!(fields.allergies, "tree-nuts: 100% avoid");
    }

    #[test]
    fn test_encodings_agree_without_delimiters() {
        let prefs = vegan_prefs("nuts, dairy, gluten");
        assert!(!legacy_is_ambiguous(&prefs));
        assert_eq!(
            Token::encode(&prefs, Encoding::Legacy),
            Token::encode(&prefs, Encoding::Escaped)
        );
    }

    #[test]
    fn test_legacy_parse_keeps_percent_signs() {
        for allergies in ["100% dairy", "code %2D"] {
            let token = Token::encode(&vegan_prefs(allergies), Encoding::Legacy);
            let fields = Token::parse(token.as_str(), Encoding::Legacy).unwrap();
            assert_eq!(fields.allergies, allergies);
            assert_eq!(fields.diet_type, "vegan");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Token::parse("hello world", Encoding::Legacy),
            Err(MealPlanError::MalformedToken(_))
        ));
        assert!(matches!(
            Token::parse(
                "DietType:vegan-NumberOfMealsPerDay:4-DailyCalorieGoal:1800-Allergies:%zz",
                Encoding::Escaped
            ),
            Err(MealPlanError::MalformedToken(_))
        ));
    }
}
