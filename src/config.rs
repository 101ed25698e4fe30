//! Environment configuration
//!
//! Read once at startup, after `.env` has been loaded. Command-line flags
//! take precedence over anything set here.
//!
//! | Variable                       | Meaning                                  |
//! |--------------------------------|------------------------------------------|
//! | `CHESS_INSIGHT_LOG`            | log filter directive, e.g. `debug`       |
//! | `CHESS_INSIGHT_ENGINE_TIME_MS` | evaluator time budget per position       |
//! | `CHESS_INSIGHT_HISTORY_LEN`    | moves encoded in a feature vector        |
//! | `CHESS_INSIGHT_PRETTY`         | pretty-print JSON output (`1`/`true`)    |

use std::time::Duration;

use chess_features::AnalysisConfig;
use thiserror::Error;

pub const LOG_VAR: &str = "CHESS_INSIGHT_LOG";
pub const ENGINE_TIME_VAR: &str = "CHESS_INSIGHT_ENGINE_TIME_MS";
pub const HISTORY_LEN_VAR: &str = "CHESS_INSIGHT_HISTORY_LEN";
pub const PRETTY_VAR: &str = "CHESS_INSIGHT_PRETTY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be a boolean (true/false/1/0), got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: Option<String>,
    pub pretty: bool,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset and blank variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let mut config = AppConfig {
            log_filter: read(LOG_VAR),
            ..AppConfig::default()
        };

        if let Some(value) = read(ENGINE_TIME_VAR) {
            let millis = parse_number(ENGINE_TIME_VAR, &value)?;
            config.analysis.engine_time_budget = Duration::from_millis(millis);
        }
        if let Some(value) = read(HISTORY_LEN_VAR) {
            config.analysis.move_history_len = parse_number(HISTORY_LEN_VAR, &value)?;
        }
        if let Some(value) = read(PRETTY_VAR) {
            config.pretty = parse_flag(PRETTY_VAR, &value)?;
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = AppConfig::from_lookup(lookup(&[
            (LOG_VAR, "chess_features=trace"),
            (ENGINE_TIME_VAR, "250"),
            (HISTORY_LEN_VAR, " 4 "),
            (PRETTY_VAR, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("chess_features=trace"));
        assert_eq!(config.analysis.engine_time_budget, Duration::from_millis(250));
        assert_eq!(config.analysis.move_history_len, 4);
        assert!(config.pretty);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(LOG_VAR, "  "), (HISTORY_LEN_VAR, "")])).unwrap();
        assert_eq!(config.log_filter, None);
        assert_eq!(config.analysis.move_history_len, AnalysisConfig::default().move_history_len);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert_matches!(
            AppConfig::from_lookup(lookup(&[(ENGINE_TIME_VAR, "-5")])),
            Err(ConfigError::InvalidNumber { var: ENGINE_TIME_VAR, .. })
        );
        assert_matches!(
            AppConfig::from_lookup(lookup(&[(HISTORY_LEN_VAR, "ten")])),
            Err(ConfigError::InvalidNumber { var: HISTORY_LEN_VAR, .. })
        );
        assert_matches!(
            AppConfig::from_lookup(lookup(&[(PRETTY_VAR, "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        );
    }
}
