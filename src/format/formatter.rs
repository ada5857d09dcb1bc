//! Channel message rendering.

use std::sync::Arc;

use crate::channel::types::Channel;
use crate::common::types::{ParticipantId, PresentationProfile};
use crate::format::color::translate_legacy;
use crate::format::placeholder::PlaceholderRegistry;
use crate::format::RichMessage;

/// Renders a channel's format template for one sender/message pair.
///
/// Output is assembled from three parts: the channel's static prefix, the
/// substituted format template, and the raw message text rendered in the
/// profile color. External providers substitute first, then the three
/// built-in tokens; legacy color markup is translated last, once all text
/// is in place. Pure with respect to its inputs; unresolved tokens are
/// emitted literally.
#[derive(Clone)]
pub struct MessageFormatter {
    placeholders: Arc<PlaceholderRegistry>,
}

impl MessageFormatter {
    pub fn new(placeholders: Arc<PlaceholderRegistry>) -> Self {
        Self { placeholders }
    }

    /// Render the message a recipient with `profile` should see.
    pub fn render(
        &self,
        sender: &ParticipantId,
        sender_display_name: &str,
        raw_text: &str,
        channel: &Channel,
        profile: &PresentationProfile,
    ) -> RichMessage {
        let mut segments = translate_legacy(channel.prefix());

        let template = self.placeholders.apply(channel.format(), sender);
        let line = template
            .replace("%prefix%", &profile.prefix)
            .replace("%suffix%", &profile.suffix)
            .replace("%player%", sender_display_name);
        segments.extend(translate_legacy(&line));

        let body = format!("{}{}", profile.color, raw_text);
        segments.extend(translate_legacy(&body));

        RichMessage::new(segments)
    }
}
