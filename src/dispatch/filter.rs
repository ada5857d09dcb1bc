//! Message filtering with regex patterns.
//!
//! A bus observer that cancels outgoing messages matching configurable
//! regex patterns, keeping spam or unwanted text out of every channel the
//! pipeline serves.

use fancy_regex::Regex;
use tracing::{info, warn};

use crate::config::types::FiltersConfig;
use crate::dispatch::bus::{ChatNotification, ChatObserver};

/// Default priority; runs before ordinary observers so cancelled messages
/// do no further work.
const FILTER_PRIORITY: i32 = -100;

/// Observer that cancels messages matching any of its patterns.
pub struct PatternFilter {
    patterns: Vec<CompiledPattern>,
    priority: i32,
}

/// A compiled regex pattern with its original string for debugging.
struct CompiledPattern {
    original: String,
    regex: Regex,
}

impl PatternFilter {
    /// Create a filter from pattern strings.
    ///
    /// Invalid regex patterns are logged and skipped.
    pub fn new(patterns: Vec<String>) -> Self {
        Self::with_priority(patterns, FILTER_PRIORITY)
    }

    /// Create a filter that runs at a specific bus priority.
    pub fn with_priority(patterns: Vec<String>, priority: i32) -> Self {
        Self {
            patterns: compile_patterns(patterns),
            priority,
        }
    }

    /// Create an empty filter that allows all messages.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            priority: FILTER_PRIORITY,
        }
    }

    /// Build a filter from the configuration section; disabled or absent
    /// config yields an empty filter.
    pub fn from_config(filters: Option<&FiltersConfig>) -> Self {
        match filters {
            Some(f) if f.enabled => Self::new(f.patterns.clone().unwrap_or_default()),
            _ => Self::empty(),
        }
    }

    /// Returns true if the filter has any patterns configured.
    pub fn has_patterns(&self) -> bool {
        !self.patterns.is_empty()
    }

    fn matches(&self, message: &str) -> bool {
        self.patterns.iter().any(|p| {
            p.regex.is_match(message).unwrap_or_else(|e| {
                warn!("Regex match error for pattern '{}': {}", p.original, e);
                false
            })
        })
    }
}

impl ChatObserver for PatternFilter {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn on_chat(&self, notification: &mut ChatNotification) {
        if self.matches(notification.text()) {
            info!(
                sender = %notification.sender(),
                channel = notification.channel().name(),
                "FILTERED chat message: {}",
                notification.text()
            );
            notification.set_cancelled(true);
        }
    }
}

/// Compile a list of regex pattern strings, skipping invalid ones.
fn compile_patterns(patterns: Vec<String>) -> Vec<CompiledPattern> {
    patterns
        .into_iter()
        .filter_map(|pattern| match Regex::new(&pattern) {
            Ok(regex) => Some(CompiledPattern {
                original: pattern,
                regex,
            }),
            Err(e) => {
                warn!("Invalid filter regex pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::types::Channel;
    use crate::common::types::ParticipantId;

    fn notification(text: &str) -> ChatNotification {
        ChatNotification::new(
            ParticipantId::from("steve"),
            text.to_string(),
            Vec::new(),
            Channel::from_definition("general", None),
        )
    }

    #[test]
    fn test_empty_filter_allows_all() {
        let filter = PatternFilter::empty();
        assert!(!filter.has_patterns());

        let mut n = notification("any message");
        filter.on_chat(&mut n);
        assert!(!n.is_cancelled());
    }

    #[test]
    fn test_matching_message_is_cancelled() {
        let filter = PatternFilter::new(vec!["(?i)buy gold".to_string()]);

        let mut n = notification("BUY GOLD cheap!");
        filter.on_chat(&mut n);
        assert!(n.is_cancelled());

        let mut n = notification("selling dirt");
        filter.on_chat(&mut n);
        assert!(!n.is_cancelled());
    }

    #[test]
    fn test_invalid_regex_skipped() {
        // Invalid regex should be skipped without panicking
        let filter = PatternFilter::new(vec!["[invalid".to_string(), "valid".to_string()]);

        let mut n = notification("a valid pattern hit");
        filter.on_chat(&mut n);
        assert!(n.is_cancelled());
    }

    #[test]
    fn test_negative_lookahead() {
        let filter = PatternFilter::new(vec!["(?i).*wtb(((?!wts).)*)dp.*".to_string()]);

        let mut n = notification("wtb any dp");
        filter.on_chat(&mut n);
        assert!(n.is_cancelled());

        let mut n = notification("wtb wts dp");
        filter.on_chat(&mut n);
        assert!(!n.is_cancelled());
    }

    #[test]
    fn test_from_config() {
        let enabled = FiltersConfig {
            enabled: true,
            patterns: Some(vec!["spam".to_string()]),
        };
        assert!(PatternFilter::from_config(Some(&enabled)).has_patterns());

        let disabled = FiltersConfig {
            enabled: false,
            patterns: Some(vec!["spam".to_string()]),
        };
        assert!(!PatternFilter::from_config(Some(&disabled)).has_patterns());
        assert!(!PatternFilter::from_config(None).has_patterns());
    }
}
