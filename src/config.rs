//! Screen configuration, read from the environment (and `.env` when present).

use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    /// Scheme, host and port links are built on. No trailing slash.
    pub origin: String,
    /// How long a "link copied" confirmation stays visible.
    pub copy_feedback: Duration,
    /// Prefix shown before prices.
    pub currency_label: String,
    /// Capacity of the screen's command channel. Zero is treated as one.
    pub buffer_size: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:3000".to_string(),
            copy_feedback: Duration::from_millis(2500),
            currency_label: "MT".to_string(),
            buffer_size: 32,
        }
    }
}

impl ScreenConfig {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = normalize_origin(origin.into());
        self
    }

    /// Reads `SELLER_ORIGIN`, `COPY_FEEDBACK_MS`, `CURRENCY_LABEL` and `SCREEN_BUFFER`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let origin = lookup("SELLER_ORIGIN")
            .map(normalize_origin)
            .unwrap_or(defaults.origin);

        let copy_feedback = match lookup("COPY_FEEDBACK_MS") {
            Some(raw) => Duration::from_millis(parse("COPY_FEEDBACK_MS", &raw)?),
            None => defaults.copy_feedback,
        };

        let currency_label = lookup("CURRENCY_LABEL").unwrap_or(defaults.currency_label);

        let buffer_size = match lookup("SCREEN_BUFFER") {
            Some(raw) => parse("SCREEN_BUFFER", &raw)?,
            None => defaults.buffer_size,
        };
        if buffer_size == 0 {
            return Err(ConfigError::Invalid {
                var: "SCREEN_BUFFER",
                reason: "must be at least 1".to_string(),
            });
        }

        tracing::info!(%origin, ?copy_feedback, "Screen configuration loaded");
        Ok(Self {
            origin,
            copy_feedback,
            currency_label,
            buffer_size,
        })
    }
}

fn normalize_origin(origin: String) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

fn parse<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ScreenConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ScreenConfig::default());
        assert_eq!(config.copy_feedback, Duration::from_millis(2500));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = ScreenConfig::from_lookup(lookup(&[
            ("SELLER_ORIGIN", "https://shop.example/"),
            ("COPY_FEEDBACK_MS", "1000"),
            ("CURRENCY_LABEL", "USD"),
        ]))
        .unwrap();
        assert_eq!(config.origin, "https://shop.example");
        assert_eq!(config.copy_feedback, Duration::from_secs(1));
        assert_eq!(config.currency_label, "USD");
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err =
            ScreenConfig::from_lookup(lookup(&[("COPY_FEEDBACK_MS", "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "COPY_FEEDBACK_MS",
                ..
            }
        ));

        let err = ScreenConfig::from_lookup(lookup(&[("SCREEN_BUFFER", "0")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "SCREEN_BUFFER",
                ..
            }
        ));
    }
}
