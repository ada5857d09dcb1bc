//! Shared types used across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a chat participant, as issued by the host.
///
/// Opaque to this crate; used as the membership-store key and for roster
/// lookups. Stable across sessions (the host typically uses an account id
/// or UUID string).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create an identity from the host's string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity string, as persisted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Presentation data for one participant, supplied by the host's profile
/// collaborator: chat prefix, suffix, and the legacy color markup applied
/// to their message text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationProfile {
    pub prefix: String,
    pub suffix: String,
    /// Legacy color string, e.g. `"&7"`. Empty means the host default.
    pub color: String,
}

impl PresentationProfile {
    /// Create a profile from its three parts.
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            color: color.into(),
        }
    }
}
