//! The message broadcast pipeline.
//!
//! One dispatch runs: resolve the sender's channel, check for bypass,
//! publish the cancellable notification, take over the host's recipient
//! set, then filter, format and deliver per recipient.

use std::sync::Arc;

use tracing::debug;

use crate::channel::registry::ChannelRegistry;
use crate::channel::store::ChannelStore;
use crate::common::types::ParticipantId;
use crate::context::ChatContext;
use crate::dispatch::bus::{ChatNotification, NotificationBus};
use crate::format::formatter::MessageFormatter;
use crate::host::{ProfileProvider, Roster};

/// An outgoing chat message as handed over by the host: sender, raw text,
/// and the host's default-delivery recipient set.
///
/// The pipeline clears `recipients` whenever it takes over delivery, which
/// is what suppresses the host's default broadcast.
#[derive(Debug, Clone)]
pub struct OutgoingChat {
    pub sender: ParticipantId,
    pub text: String,
    pub recipients: Vec<ParticipantId>,
}

impl OutgoingChat {
    pub fn new(
        sender: impl Into<ParticipantId>,
        text: impl Into<String>,
        recipients: Vec<ParticipantId>,
    ) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            recipients,
        }
    }
}

/// Terminal state of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Bypass channel: the host's default delivery proceeds unmodified.
    DefaultDelivery,
    /// An observer cancelled the message; nothing was sent and the host's
    /// recipient set stays cleared.
    Suppressed,
    /// Custom fan-out completed to this many recipients.
    Delivered(usize),
}

/// Routes one outgoing chat message through the custom pipeline.
///
/// Safe to invoke concurrently for distinct messages; each call owns its
/// notification state and only reads the shared stores.
pub struct BroadcastDispatcher {
    registry: ChannelRegistry,
    store: Arc<ChannelStore>,
    bus: Arc<NotificationBus>,
    formatter: MessageFormatter,
    profiles: Arc<dyn ProfileProvider>,
    roster: Arc<dyn Roster>,
}

impl BroadcastDispatcher {
    pub fn new(context: &ChatContext) -> Self {
        Self {
            registry: ChannelRegistry::new(context),
            store: context.channels.clone(),
            bus: context.bus.clone(),
            formatter: MessageFormatter::new(context.placeholders.clone()),
            profiles: context.profiles.clone(),
            roster: context.roster.clone(),
        }
    }

    /// Run one outgoing message through the pipeline.
    pub fn dispatch(&self, event: &mut OutgoingChat) -> DispatchOutcome {
        let channel = self.registry.current_channel_of(&event.sender);

        if channel.always_appear() || self.store.is_pipeline_exempt(channel.name()) {
            debug!(
                channel = channel.name(),
                "Bypass channel, default delivery proceeds"
            );
            return DispatchOutcome::DefaultDelivery;
        }

        let mut notification = ChatNotification::new(
            event.sender.clone(),
            event.text.clone(),
            event.recipients.clone(),
            channel.clone(),
        );
        self.bus.publish(&mut notification);

        // Take over delivery from the host regardless of the notification
        // outcome, so a cancelled message is not delivered by default either.
        event.recipients.clear();

        if notification.is_cancelled() {
            debug!(sender = %event.sender, "Dispatch cancelled by observer");
            return DispatchOutcome::Suppressed;
        }

        let sender_name = self.roster.display_name(&event.sender);
        let mut delivered = 0;
        for recipient in notification.recipients() {
            if self.registry.current_channel_of(recipient) != channel {
                continue;
            }
            if !channel.is_unrestricted()
                && !self.roster.has_permission(recipient, channel.permission())
            {
                continue;
            }

            let profile = self.profiles.profile(recipient);
            let message = self.formatter.render(
                &event.sender,
                &sender_name,
                &event.text,
                &channel,
                &profile,
            );
            self.roster.deliver(recipient, &message);
            delivered += 1;
        }

        debug!(channel = channel.name(), delivered, "Dispatch complete");
        DispatchOutcome::Delivered(delivered)
    }
}
