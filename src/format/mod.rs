//! Rich-text assembly: color translation, placeholder substitution and
//! template rendering.

pub mod color;
pub mod formatter;
pub mod placeholder;

pub use color::{strip_codes, translate_legacy, ChatColor};
pub use formatter::MessageFormatter;
pub use placeholder::{PlaceholderProvider, PlaceholderRegistry, TimestampProvider};

/// One colored, styled run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub color: Option<ChatColor>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
}

impl TextSegment {
    /// An unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A structured rich-text chat message, delivered segment by segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichMessage {
    segments: Vec<TextSegment>,
}

impl RichMessage {
    pub fn new(segments: Vec<TextSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The message text with all markup dropped.
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }
}
