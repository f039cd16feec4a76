use std::{env, time::Duration};

use crate::cli::OutputFormat;
use crate::error::{AppError, Result};

/// Default debounce before a recurrence filter reaches the room lookup.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Recurrence filter debounce in milliseconds (default: 300)
    pub debounce_ms: u64,
    /// Output format (default: pretty)
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCHOOLDAY_DEBOUNCE_MS` - Recurrence filter debounce (default: 300)
    /// - `SCHOOLDAY_FORMAT` - `pretty` or `json` (default: pretty)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing or unparseable values fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            debounce_ms: lookup("SCHOOLDAY_DEBOUNCE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DEBOUNCE_MS),
            format: lookup("SCHOOLDAY_FORMAT")
                .and_then(|v| match v.trim().to_lowercase().as_str() {
                    "json" => Some(OutputFormat::Json),
                    "pretty" => Some(OutputFormat::Pretty),
                    _ => None,
                })
                .unwrap_or_default(),
        }
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, debounce_ms: Option<u64>, format: Option<OutputFormat>) -> Self {
        if let Some(debounce_ms) = debounce_ms {
            self.debounce_ms = debounce_ms;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Rejects configurations the pipeline cannot run with.
    pub fn validate(self) -> Result<Self> {
        if self.debounce_ms == 0 {
            return Err(AppError::Config("debounce must be > 0".to_string()));
        }
        Ok(self)
    }

    /// Get the debounce interval as a Duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_vars(lookup_in(&[]));

        assert_eq!(config.debounce_ms, 300);
        assert!(matches!(config.format, OutputFormat::Pretty));
    }

    #[test]
    fn test_values_from_vars() {
        let config = Config::from_vars(lookup_in(&[
            ("SCHOOLDAY_DEBOUNCE_MS", "150"),
            ("SCHOOLDAY_FORMAT", "JSON"),
        ]));

        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert!(matches!(config.format, OutputFormat::Json));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = Config::from_vars(lookup_in(&[
            ("SCHOOLDAY_DEBOUNCE_MS", "soon"),
            ("SCHOOLDAY_FORMAT", "xml"),
        ]));

        assert_eq!(config.debounce_ms, 300);
        assert!(matches!(config.format, OutputFormat::Pretty));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_vars(lookup_in(&[("SCHOOLDAY_DEBOUNCE_MS", "150")]))
            .with_overrides(Some(500), Some(OutputFormat::Json));

        assert_eq!(config.debounce_ms, 500);
        assert!(matches!(config.format, OutputFormat::Json));
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let config = Config::from_vars(lookup_in(&[])).with_overrides(Some(0), None);

        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
