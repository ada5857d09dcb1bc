//! Crier - channel-based chat routing and formatting core for
//! multiplayer-server add-ons.
//!
//! Assigns each participant to a named channel, resolves the right channel
//! for every outgoing message, filters and formats recipients per channel
//! rules (permission, color, placeholders), and re-dispatches rich text
//! while suppressing the host's default broadcast.
//!
//! The embedding add-on implements the [`host`] traits over its own
//! player/session model, loads a [`config::Config`], and builds a
//! [`ChatContext`]; every outgoing chat event then goes through the
//! [`BroadcastDispatcher`]:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use crier::*;
//! # fn collaborators() -> (Arc<dyn ProfileProvider>, Arc<dyn Roster>) { unimplemented!() }
//! let config = config::load("crier.conf")?;
//! let (profiles, roster) = collaborators();
//!
//! let context = ChatContext::new(
//!     Arc::new(ChannelStore::from_config(&config)),
//!     Arc::new(MembershipStore::new(Arc::new(JsonFileBackend::open("membership.json")?))),
//!     profiles,
//!     roster,
//! );
//! context.bus.subscribe(Arc::new(PatternFilter::from_config(config.filters.as_ref())));
//!
//! let dispatcher = context.dispatcher();
//! // per incoming chat event from the host:
//! let mut event = OutgoingChat::new("steve", "hello", context.roster.online_participants());
//! let outcome = dispatcher.dispatch(&mut event);
//! # let _ = outcome;
//! # Ok::<(), ChatError>(())
//! ```

pub mod channel;
pub mod common;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod format;
pub mod host;
pub mod membership;

pub use channel::{Channel, ChannelRegistry, ChannelStore, PERMISSION_NONE};
pub use common::{ChatError, ConfigError, ParticipantId, PresentationProfile, StoreError};
pub use context::ChatContext;
pub use dispatch::{
    BroadcastDispatcher, ChatNotification, ChatObserver, DispatchOutcome, NotificationBus,
    OutgoingChat, PatternFilter,
};
pub use format::{
    MessageFormatter, PlaceholderProvider, PlaceholderRegistry, RichMessage, TextSegment,
};
pub use host::{ProfileProvider, Roster};
pub use membership::{JsonFileBackend, MembershipBackend, MembershipStore, MemoryBackend};
