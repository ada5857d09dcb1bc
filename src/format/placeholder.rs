//! External placeholder substitution.
//!
//! Providers substitute their own tokens in a format template before the
//! built-in `%player%`/`%prefix%`/`%suffix%` pass runs, so provider output
//! may itself contain literal `%` without being re-interpreted by another
//! provider registered earlier.

use std::sync::Arc;

use chrono::Local;
use parking_lot::RwLock;

use crate::common::types::ParticipantId;

/// A text-substitution collaborator.
///
/// Given a template and the participant it is being rendered for, returns
/// the template with the provider's tokens replaced. Unknown tokens must be
/// passed through untouched.
pub trait PlaceholderProvider: Send + Sync {
    fn substitute(&self, template: &str, participant: &ParticipantId) -> String;
}

/// Registry of placeholder providers, applied in registration order.
#[derive(Default)]
pub struct PlaceholderRegistry {
    providers: RwLock<Vec<Arc<dyn PlaceholderProvider>>>,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider. Providers run in registration order.
    pub fn register(&self, provider: Arc<dyn PlaceholderProvider>) {
        self.providers.write().push(provider);
    }

    /// Run every registered provider over the template.
    pub fn apply(&self, template: &str, participant: &ParticipantId) -> String {
        let providers = self.providers.read();
        let mut result = template.to_string();
        for provider in providers.iter() {
            result = provider.substitute(&result, participant);
        }
        result
    }
}

/// Built-in provider substituting `%time%` with the current wall-clock time.
pub struct TimestampProvider {
    format: String,
}

impl TimestampProvider {
    /// Provider with the default `HH:MM:SS` format.
    pub fn new() -> Self {
        Self::with_format("%H:%M:%S")
    }

    /// Provider with a custom `chrono` format string.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Default for TimestampProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderProvider for TimestampProvider {
    fn substitute(&self, template: &str, _participant: &ParticipantId) -> String {
        if !template.contains("%time%") {
            return template.to_string();
        }
        template.replace("%time%", &Local::now().format(&self.format).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;
    impl PlaceholderProvider for Upper {
        fn substitute(&self, template: &str, _: &ParticipantId) -> String {
            template.replace("%shout%", "HEY")
        }
    }

    struct Tagger;
    impl PlaceholderProvider for Tagger {
        fn substitute(&self, template: &str, participant: &ParticipantId) -> String {
            template.replace("%who%", participant.as_str())
        }
    }

    #[test]
    fn test_empty_registry_passes_template_through() {
        let registry = PlaceholderRegistry::new();
        let id = ParticipantId::from("steve");
        assert_eq!(registry.apply("%player%: ", &id), "%player%: ");
    }

    #[test]
    fn test_providers_run_in_registration_order() {
        let registry = PlaceholderRegistry::new();
        registry.register(Arc::new(Upper));
        registry.register(Arc::new(Tagger));

        let id = ParticipantId::from("steve");
        assert_eq!(registry.apply("%shout% %who%!", &id), "HEY steve!");
    }

    #[test]
    fn test_provider_output_keeps_literal_percent() {
        struct Percent;
        impl PlaceholderProvider for Percent {
            fn substitute(&self, template: &str, _: &ParticipantId) -> String {
                template.replace("%hp%", "100%")
            }
        }

        let registry = PlaceholderRegistry::new();
        registry.register(Arc::new(Percent));

        let id = ParticipantId::from("steve");
        assert_eq!(registry.apply("%hp% ready", &id), "100% ready");
    }

    #[test]
    fn test_timestamp_provider_substitutes_time() {
        let provider = TimestampProvider::new();
        let id = ParticipantId::from("steve");

        let out = provider.substitute("[%time%] chat", &id);
        assert!(!out.contains("%time%"));
        assert!(out.starts_with('['));
        assert!(out.ends_with("] chat"));

        // No token, no change.
        assert_eq!(provider.substitute("plain", &id), "plain");
    }
}
