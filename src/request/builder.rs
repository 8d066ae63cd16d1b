use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::models::Preferences;
use crate::request::constants::{GENERATE_PATH, MESSAGE_PARAM};
use crate::request::token::{Encoding, Token};

/// A fully built GET request for the meal-plan endpoint.
///
/// Holds a snapshot of the preferences it was built from, so later edits to
/// the form do not affect a request that is already in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealPlanRequest {
    pub preferences: Preferences,
    pub token: Token,
    #[serde(serialize_with = "serialize_url")]
    pub url: Url,
}

impl MealPlanRequest {
    /// Build `<base>/generate/meal-plan?message=<token>`.
    pub fn build(base_url: &str, prefs: &Preferences, encoding: Encoding) -> Result<Self> {
        let mut url = Url::parse(&format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            GENERATE_PATH
        ))?;

        let token = Token::encode(prefs, encoding);
        url.query_pairs_mut()
            .append_pair(MESSAGE_PARAM, token.as_str());

        debug!(url = %url, "built meal plan request");

        Ok(Self {
            preferences: prefs.clone(),
            token,
            url,
        })
    }
}

fn serialize_url<S: serde::Serializer>(url: &Url, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(url.as_str())
}
