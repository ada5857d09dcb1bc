//! Narrow collaborator traits over the host server.
//!
//! The core never touches the host's player/session model directly; the
//! embedding add-on implements these traits and hands them to
//! [`ChatContext`](crate::context::ChatContext).

use crate::common::types::{ParticipantId, PresentationProfile};
use crate::format::RichMessage;

/// The host's view of the connected population.
pub trait Roster: Send + Sync {
    /// Currently connected participants, in the host's iteration order.
    fn online_participants(&self) -> Vec<ParticipantId>;

    /// Display name shown in chat for a participant.
    fn display_name(&self, id: &ParticipantId) -> String;

    /// Whether a participant holds a permission node (exact string match on
    /// the host side).
    fn has_permission(&self, id: &ParticipantId, node: &str) -> bool;

    /// Deliver a rendered message directly to one participant.
    fn deliver(&self, recipient: &ParticipantId, message: &RichMessage);
}

/// Supplies per-participant presentation data (prefix, suffix, color).
pub trait ProfileProvider: Send + Sync {
    fn profile(&self, id: &ParticipantId) -> PresentationProfile;
}
