//! Shared dependency context.

use std::sync::Arc;

use crate::channel::registry::ChannelRegistry;
use crate::channel::store::ChannelStore;
use crate::dispatch::bus::NotificationBus;
use crate::dispatch::dispatcher::BroadcastDispatcher;
use crate::format::placeholder::PlaceholderRegistry;
use crate::host::{ProfileProvider, Roster};
use crate::membership::store::MembershipStore;

/// Dependency object handed to each component at construction.
///
/// There is no global state in this crate; everything a component needs is
/// reachable from its context. Cloning is cheap and shares the underlying
/// stores, bus and collaborators.
#[derive(Clone)]
pub struct ChatContext {
    pub channels: Arc<ChannelStore>,
    pub membership: Arc<MembershipStore>,
    pub bus: Arc<NotificationBus>,
    pub placeholders: Arc<PlaceholderRegistry>,
    pub profiles: Arc<dyn ProfileProvider>,
    pub roster: Arc<dyn Roster>,
}

impl ChatContext {
    /// Create a context with a fresh notification bus and placeholder
    /// registry.
    pub fn new(
        channels: Arc<ChannelStore>,
        membership: Arc<MembershipStore>,
        profiles: Arc<dyn ProfileProvider>,
        roster: Arc<dyn Roster>,
    ) -> Self {
        Self {
            channels,
            membership,
            bus: Arc::new(NotificationBus::new()),
            placeholders: Arc::new(PlaceholderRegistry::new()),
            profiles,
            roster,
        }
    }

    /// Build a channel registry over this context.
    pub fn registry(&self) -> ChannelRegistry {
        ChannelRegistry::new(self)
    }

    /// Build a broadcast dispatcher over this context.
    pub fn dispatcher(&self) -> BroadcastDispatcher {
        BroadcastDispatcher::new(self)
    }
}
