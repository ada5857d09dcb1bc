//! Configuration parsing and types.

pub mod parser;
pub mod types;
pub mod validate;

use std::path::Path;

use crate::common::error::ConfigError;

pub use parser::{load_config, load_config_str};
pub use types::*;
pub use validate::validate_config;

/// Load and validate a configuration file.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config = parser::load_config(path)?;
    validate_config(&config)?;
    Ok(config)
}
