//! Channel definition store and server settings snapshot.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::config::types::{ChannelDefinition, Config, SettingsConfig};

/// Read-only accessor over channel definitions plus the mutable server
/// settings (default channel, pipeline exemptions).
///
/// Definitions are loaded once per configuration snapshot; missing names are
/// an explicit `None`, never an error.
pub struct ChannelStore {
    definitions: HashMap<String, ChannelDefinition>,
    settings: RwLock<SettingsConfig>,
}

impl ChannelStore {
    /// Build a store from a loaded configuration snapshot.
    pub fn from_config(config: &Config) -> Self {
        Self {
            definitions: config.channels.clone(),
            settings: RwLock::new(config.settings.clone()),
        }
    }

    /// Look up the definition for a channel name.
    pub fn definition(&self, name: &str) -> Option<ChannelDefinition> {
        self.definitions.get(name).cloned()
    }

    /// Whether a definition exists under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// All defined channel names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.definitions.keys().cloned().collect();
        names.sort();
        names
    }

    /// The configured server-wide default channel name.
    ///
    /// Reads `settings.default_channel`.
    pub fn default_channel_name(&self) -> Option<String> {
        self.settings.read().default_channel.clone()
    }

    /// Set the server-wide default channel.
    ///
    /// Writes `settings.default_config`, while [`Self::default_channel_name`]
    /// reads `settings.default_channel` - a value set here is never observed
    /// by lookups.
    /// TODO: confirm with the system owner which key is intended before
    /// unifying the two.
    pub fn set_default_channel(&self, name: &str) {
        self.settings.write().default_config = Some(name.to_string());
    }

    /// Whether a channel is in the configured pipeline exemption set.
    pub fn is_pipeline_exempt(&self, name: &str) -> bool {
        self.settings
            .read()
            .pipeline_exempt
            .iter()
            .any(|exempt| exempt == name)
    }
}
