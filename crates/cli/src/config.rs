use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const SEED_ENV: &str = "DATAMASK_SEED";
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Logging Level
    log_level: tracing::Level,
    // Set when LOG_LEVEL was present but unusable; reported once logging is up
    rejected_log_level: Option<String>,
    // Parsed on demand; only the random method reads it
    seed: Option<String>,
    env_file_loaded: bool,
}

impl Config {
    pub fn from_env() -> Config {
        let env_file_loaded = dotenv().is_ok();
        let mut config = Self::from_vars(|key| env::var(key).ok());
        config.env_file_loaded = env_file_loaded;
        config
    }

    pub fn from_vars<F>(var: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let (log_level, rejected_log_level) = match var(LOG_LEVEL_ENV) {
            Some(level) => match tracing::Level::from_str(level.trim()) {
                Ok(level) => (level, None),
                Err(_e) => (DEFAULT_LOG_LEVEL, Some(level)),
            },
            None => (DEFAULT_LOG_LEVEL, None),
        };

        Config {
            log_level,
            rejected_log_level,
            seed: var(SEED_ENV),
            env_file_loaded: false,
        }
    }

    pub fn log_level(&self) -> &tracing::Level {
        &self.log_level
    }

    pub fn rejected_log_level(&self) -> Option<&str> {
        self.rejected_log_level.as_deref()
    }

    pub fn seed(&self) -> Result<Option<u64>, ConfigError> {
        self.seed
            .as_ref()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidSeed(raw.clone(), e))
            })
            .transpose()
    }

    pub fn env_file_loaded(&self) -> bool {
        self.env_file_loaded
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DATAMASK_SEED {0:?}: {1}")]
    InvalidSeed(String, std::num::ParseIntError),
}
