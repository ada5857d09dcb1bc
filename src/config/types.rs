//! Configuration type definitions.

use std::collections::HashMap;

use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsConfig,
    /// Channel definitions keyed by channel name.
    #[serde(default)]
    pub channels: HashMap<String, ChannelDefinition>,
    pub filters: Option<FiltersConfig>,
}

/// Server-wide settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    /// Channel participants fall back to when they have no membership
    /// record. This is the key lookups read.
    pub default_channel: Option<String>,
    /// Key written by the administrative default-channel setter. Lookups
    /// never read it; see `ChannelStore::set_default_channel`.
    pub default_config: Option<String>,
    /// Channel names excluded from the custom pipeline even when their
    /// `always_appear` flag is unset.
    #[serde(default)]
    pub pipeline_exempt: Vec<String>,
}

/// One channel definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelDefinition {
    /// Permission node required to receive messages; `"none"` in any case
    /// means unrestricted.
    #[serde(default)]
    pub permission: String,
    /// Static display prefix, may contain legacy color markup.
    #[serde(default)]
    pub prefix: String,
    /// Format template with `%player%`, `%prefix%` and `%suffix%` tokens.
    #[serde(default)]
    pub format: String,
    /// When true the channel bypasses the custom pipeline entirely and the
    /// host's default delivery proceeds unmodified.
    #[serde(default)]
    pub always_appear: bool,
}

/// Chat filter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FiltersConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Regex patterns; a message matching any pattern is cancelled.
    pub patterns: Option<Vec<String>>,
}
