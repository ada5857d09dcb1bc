//! Legacy color-code translation.
//!
//! Converts `&`-coded inline markup into structured segments: sixteen color
//! codes (`0`-`9`, `a`-`f`), five style codes (`k` obfuscated, `l` bold,
//! `m` strikethrough, `n` underline, `o` italic) and the reset code `r`.
//! A color code resets active styles; `r` resets color and styles. A `&`
//! not followed by a valid code is literal text.

use crate::format::TextSegment;

/// The markup escape character.
pub const CODE_CHAR: char = '&';

/// The sixteen legacy chat colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl ChatColor {
    /// Parse a color from its legacy code character.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            '0' => Some(Self::Black),
            '1' => Some(Self::DarkBlue),
            '2' => Some(Self::DarkGreen),
            '3' => Some(Self::DarkAqua),
            '4' => Some(Self::DarkRed),
            '5' => Some(Self::DarkPurple),
            '6' => Some(Self::Gold),
            '7' => Some(Self::Gray),
            '8' => Some(Self::DarkGray),
            '9' => Some(Self::Blue),
            'a' => Some(Self::Green),
            'b' => Some(Self::Aqua),
            'c' => Some(Self::Red),
            'd' => Some(Self::LightPurple),
            'e' => Some(Self::Yellow),
            'f' => Some(Self::White),
            _ => None,
        }
    }

    /// The legacy code character for this color.
    pub fn code(&self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct StyleFlags {
    bold: bool,
    italic: bool,
    underlined: bool,
    strikethrough: bool,
    obfuscated: bool,
}

fn is_style_code(code: char) -> bool {
    matches!(code, 'k' | 'l' | 'm' | 'n' | 'o')
}

fn flush(
    segments: &mut Vec<TextSegment>,
    text: &mut String,
    color: Option<ChatColor>,
    styles: StyleFlags,
) {
    if text.is_empty() {
        return;
    }
    segments.push(TextSegment {
        text: std::mem::take(text),
        color,
        bold: styles.bold,
        italic: styles.italic,
        underlined: styles.underlined,
        strikethrough: styles.strikethrough,
        obfuscated: styles.obfuscated,
    });
}

/// Translate `&`-coded markup into structured segments.
pub fn translate_legacy(input: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut color: Option<ChatColor> = None;
    let mut styles = StyleFlags::default();

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != CODE_CHAR {
            text.push(c);
            continue;
        }

        let code = match chars.peek() {
            Some(&next) => next.to_ascii_lowercase(),
            // Trailing escape character stays literal.
            None => {
                text.push(c);
                continue;
            }
        };

        if let Some(new_color) = ChatColor::from_code(code) {
            chars.next();
            flush(&mut segments, &mut text, color, styles);
            color = Some(new_color);
            styles = StyleFlags::default();
        } else if is_style_code(code) {
            chars.next();
            flush(&mut segments, &mut text, color, styles);
            match code {
                'k' => styles.obfuscated = true,
                'l' => styles.bold = true,
                'm' => styles.strikethrough = true,
                'n' => styles.underlined = true,
                'o' => styles.italic = true,
                _ => unreachable!(),
            }
        } else if code == 'r' {
            chars.next();
            flush(&mut segments, &mut text, color, styles);
            color = None;
            styles = StyleFlags::default();
        } else {
            text.push(c);
        }
    }
    flush(&mut segments, &mut text, color, styles);

    segments
}

/// Drop all recognized markup codes, keeping the text.
pub fn strip_codes(input: &str) -> String {
    translate_legacy(input)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}
