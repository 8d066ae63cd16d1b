use std::time::Duration;

use crate::request::constants::{DEFAULT_BASE_URL, ENDPOINT_ENV_VAR};
use crate::request::Encoding;

/// Runtime settings resolved from flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub encoding: Encoding,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Resolve settings, reading the endpoint override from the environment.
    pub fn resolve(endpoint: Option<String>, encoding: Encoding, timeout_secs: Option<u64>) -> Self {
        Self::resolve_with_env(
            endpoint,
            std::env::var(ENDPOINT_ENV_VAR).ok(),
            encoding,
            timeout_secs,
        )
    }

    /// Precedence for the endpoint: flag, then environment, then the hosted default.
    pub fn resolve_with_env(
        endpoint: Option<String>,
        env_endpoint: Option<String>,
        encoding: Encoding,
        timeout_secs: Option<u64>,
    ) -> Self {
        let non_blank = |s: Option<String>| {
            s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        let base_url = non_blank(endpoint)
            .or_else(|| non_blank(env_endpoint))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            encoding,
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve_with_env(None, None, Encoding::Legacy, None);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.encoding, Encoding::Legacy);
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn test_flag_beats_env() {
        let settings = Settings::resolve_with_env(
            Some("http://flag.test".to_string()),
            Some("http://env.test".to_string()),
            Encoding::Escaped,
            Some(5),
        );
        assert_eq!(settings.base_url, "http://flag.test");
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_env_used_when_no_flag() {
        let settings =
            Settings::resolve_with_env(None, Some("http://env.test".to_string()), Encoding::Legacy, Some(0));
        assert_eq!(settings.base_url, "http://env.test");
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn test_blank_flag_does_not_hide_env() {
        let settings = Settings::resolve_with_env(
            Some(String::new()),
            Some(" http://env.test ".to_string()),
            Encoding::Legacy,
            None,
        );
        assert_eq!(settings.base_url, "http://env.test");
    }

    #[test]
    fn test_blank_endpoint_falls_back_to_default() {
        let settings = Settings::resolve_with_env(Some("  ".to_string()), None, Encoding::Legacy, None);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
