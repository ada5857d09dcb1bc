//! The channel value object.

use std::hash::{Hash, Hasher};

use crate::config::types::ChannelDefinition;

/// Permission value meaning "no restriction", compared case-insensitively.
pub const PERMISSION_NONE: &str = "none";

/// A named chat channel.
///
/// Immutable value object rebuilt on demand from the definition store; there
/// is no in-memory identity beyond the name, so equality and hashing use the
/// name only. A name with no stored definition yields a channel with empty
/// properties rather than an error.
#[derive(Debug, Clone)]
pub struct Channel {
    name: String,
    permission: String,
    prefix: String,
    format: String,
    always_appear: bool,
}

impl Channel {
    /// Build a channel from its name and (possibly absent) definition.
    pub(crate) fn from_definition(name: impl Into<String>, definition: Option<&ChannelDefinition>) -> Self {
        match definition {
            Some(def) => Self {
                name: name.into(),
                permission: def.permission.clone(),
                prefix: def.prefix.clone(),
                format: def.format.clone(),
                always_appear: def.always_appear,
            },
            None => Self {
                name: name.into(),
                permission: String::new(),
                prefix: String::new(),
                format: String::new(),
                always_appear: false,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Permission node required to receive messages in this channel.
    pub fn permission(&self) -> &str {
        &self.permission
    }

    /// Static display prefix with legacy color markup.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Format template with `%player%`, `%prefix%` and `%suffix%` tokens.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Whether this channel bypasses the custom pipeline entirely.
    pub fn always_appear(&self) -> bool {
        self.always_appear
    }

    /// True when the permission equals the sentinel `"none"` in any case.
    ///
    /// An empty permission (unknown channel) is NOT unrestricted; it requires
    /// an exact match on the empty node.
    pub fn is_unrestricted(&self) -> bool {
        self.permission.eq_ignore_ascii_case(PERMISSION_NONE)
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(permission: &str) -> ChannelDefinition {
        ChannelDefinition {
            permission: permission.to_string(),
            prefix: "&7[G] ".to_string(),
            format: "%player%: ".to_string(),
            always_appear: false,
        }
    }

    #[test]
    fn test_equality_is_name_equality() {
        let a = Channel::from_definition("general", Some(&definition("none")));
        let b = Channel::from_definition("general", Some(&definition("chat.other")));
        let c = Channel::from_definition("staff", Some(&definition("none")));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_missing_definition_yields_empty_properties() {
        let channel = Channel::from_definition("ghost", None);

        assert_eq!(channel.name(), "ghost");
        assert_eq!(channel.permission(), "");
        assert_eq!(channel.prefix(), "");
        assert_eq!(channel.format(), "");
        assert!(!channel.always_appear());
        assert!(!channel.is_unrestricted());
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        assert!(Channel::from_definition("a", Some(&definition("none"))).is_unrestricted());
        assert!(Channel::from_definition("a", Some(&definition("NONE"))).is_unrestricted());
        assert!(Channel::from_definition("a", Some(&definition("None"))).is_unrestricted());
        assert!(!Channel::from_definition("a", Some(&definition("chat.vip"))).is_unrestricted());
        assert!(!Channel::from_definition("a", Some(&definition(""))).is_unrestricted());
    }
}
