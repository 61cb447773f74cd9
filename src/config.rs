use std::env;

use crate::error::ConfigError;

pub const CHANNEL_CAPACITY_VAR: &str = "DIRECTORY_CHANNEL_CAPACITY";
pub const SEED_SAMPLE_DATA_VAR: &str = "DIRECTORY_SEED_SAMPLE_DATA";
pub const LOG_FILTER_VAR: &str = "DIRECTORY_LOG";

/// Runtime settings for [`crate::app_system::DirectorySystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Bounded mailbox size of the store actor.
    pub channel_capacity: usize,
    /// Start from the twelve sample records instead of an empty list.
    pub seed_sample_data: bool,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            seed_sample_data: true,
            log_filter: "info".to_string(),
        }
    }
}

impl DirectoryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            let capacity: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: CHANNEL_CAPACITY_VAR,
                value: raw.clone(),
            })?;
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity);
            }
            config.channel_capacity = capacity;
        }

        if let Some(raw) = lookup(SEED_SAMPLE_DATA_VAR) {
            config.seed_sample_data = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: SEED_SAMPLE_DATA_VAR,
                        value: raw,
                    })
                }
            };
        }

        if let Some(raw) = lookup(LOG_FILTER_VAR) {
            if !raw.trim().is_empty() {
                config.log_filter = raw;
            }
        }

        Ok(config)
    }
}
