//! Channel resolution and membership queries.

use std::sync::Arc;

use tracing::warn;

use crate::channel::store::ChannelStore;
use crate::channel::types::Channel;
use crate::common::error::StoreResult;
use crate::common::types::ParticipantId;
use crate::context::ChatContext;
use crate::host::Roster;
use crate::membership::store::MembershipStore;

/// Builds channel value objects from names and answers membership queries
/// over the connected population.
pub struct ChannelRegistry {
    store: Arc<ChannelStore>,
    membership: Arc<MembershipStore>,
    roster: Arc<dyn Roster>,
}

impl ChannelRegistry {
    pub fn new(context: &ChatContext) -> Self {
        Self {
            store: context.channels.clone(),
            membership: context.membership.clone(),
            roster: context.roster.clone(),
        }
    }

    /// Build the channel under `name`.
    ///
    /// Never fails: a name with no stored definition yields a channel with
    /// empty properties.
    pub fn resolve(&self, name: &str) -> Channel {
        Channel::from_definition(name, self.store.definition(name).as_ref())
    }

    /// The server-wide default channel.
    pub fn default_channel(&self) -> Channel {
        self.resolve(&self.store.default_channel_name().unwrap_or_default())
    }

    /// The participant's current channel.
    ///
    /// Falls back to the default channel when no record exists. A backend
    /// read failure is absorbed here with the same fallback; it never
    /// crosses the dispatch boundary.
    pub fn current_channel_of(&self, id: &ParticipantId) -> Channel {
        match self.membership.get(id) {
            Ok(Some(name)) => self.resolve(&name),
            Ok(None) => self.default_channel(),
            Err(e) => {
                warn!(participant = %id, error = %e, "Membership lookup failed, using default channel");
                self.default_channel()
            }
        }
    }

    /// Assign a participant to a channel. The write is durable on `Ok`.
    pub fn set_channel(&self, id: &ParticipantId, channel: &Channel) -> StoreResult<()> {
        self.membership.set(id, channel.name())
    }

    /// Set the server-wide default channel.
    ///
    /// Delegates to [`ChannelStore::set_default_channel`]; note the key
    /// mismatch documented there.
    pub fn set_default_channel(&self, channel: &Channel) {
        self.store.set_default_channel(channel.name());
    }

    /// Whether a definition exists under this name.
    pub fn exists(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    /// Whether this channel's name has a stored definition.
    pub fn channel_exists(&self, channel: &Channel) -> bool {
        self.exists(channel.name())
    }

    /// Connected participants currently assigned to `channel`, in host
    /// order. A snapshot; mutating it does not affect the registry.
    pub fn online_members_of(&self, channel: &Channel) -> Vec<ParticipantId> {
        self.roster
            .online_participants()
            .into_iter()
            .filter(|id| self.current_channel_of(id) == *channel)
            .collect()
    }

    /// Every known participant (online or offline) assigned to `channel`.
    ///
    /// Scans all persisted identities; linear in their count. Administrative
    /// operation, so backend errors propagate.
    pub fn all_members_of(&self, channel: &Channel) -> StoreResult<Vec<ParticipantId>> {
        Ok(self
            .membership
            .known_identities()?
            .into_iter()
            .filter(|id| self.current_channel_of(id) == *channel)
            .collect())
    }
}
