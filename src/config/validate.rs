//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.channels.is_empty() {
        errors.push("channels is empty - no chat channels defined".to_string());
    }

    for (name, definition) in &config.channels {
        if definition.permission.is_empty() {
            errors.push(format!(
                "channels.{}.permission is empty (use \"none\" for unrestricted)",
                name
            ));
        }
        if definition.format.is_empty() && !definition.always_appear {
            errors.push(format!("channels.{}.format is empty", name));
        }
    }

    if let Some(ref default) = config.settings.default_channel {
        if !config.channels.contains_key(default) {
            errors.push(format!(
                "settings.default_channel '{}' is not a defined channel",
                default
            ));
        }
    }

    // Validate filter patterns (try to compile them)
    if let Some(ref filters) = config.filters {
        if let Some(ref patterns) = filters.patterns {
            for (i, pattern) in patterns.iter().enumerate() {
                if fancy_regex::Regex::new(pattern).is_err() {
                    errors.push(format!(
                        "filters.patterns[{}] is not a valid regex: '{}'",
                        i, pattern
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}
