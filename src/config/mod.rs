use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Engine-level tunables, overridable through the environment. The
/// surrounding service reads this once at startup and passes the values
/// into the ranker constructors.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub feed_limit: usize,
    pub suggestion_limit: usize,
    pub min_suggestion_score: f64,
    pub trending_decay_rate: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            feed_limit: 50,
            suggestion_limit: 20,
            min_suggestion_score: 0.3,
            trending_decay_rate: 0.1,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            feed_limit: parse_var("FEED_LIMIT", defaults.feed_limit)?,
            suggestion_limit: parse_var("SUGGESTION_LIMIT", defaults.suggestion_limit)?,
            min_suggestion_score: parse_var(
                "MIN_SUGGESTION_SCORE",
                defaults.min_suggestion_score,
            )?,
            trending_decay_rate: parse_var("TRENDING_DECAY_RATE", defaults.trending_decay_rate)?,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(default),
    }
}
