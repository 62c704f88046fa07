//! ANSI SGR styling.
//!
//! Each style closes with its own reset code (`39` for foreground colors,
//! `22` for bold) rather than a full `0` reset, so styled spans nest.

use envlog_domain::LevelColor;

const ESC: char = '\u{1b}';

/// Open/close SGR code pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    open: u8,
    close: u8,
}

impl Style {
    /// Bold.
    pub const BOLD: Self = Self::new(1, 22);
    /// Red foreground.
    pub const RED: Self = Self::new(31, 39);
    /// Green foreground.
    pub const GREEN: Self = Self::new(32, 39);
    /// Yellow foreground.
    pub const YELLOW: Self = Self::new(33, 39);
    /// Blue foreground.
    pub const BLUE: Self = Self::new(34, 39);
    /// Cyan foreground.
    pub const CYAN: Self = Self::new(36, 39);

    const fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    /// Style for a level's display color.
    #[must_use]
    pub const fn for_color(color: LevelColor) -> Self {
        match color {
            LevelColor::Red => Self::RED,
            LevelColor::Yellow => Self::YELLOW,
            LevelColor::Blue => Self::BLUE,
            LevelColor::Cyan => Self::CYAN,
        }
    }

    /// Wrap `text` in this style.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{ESC}[{}m{text}{ESC}[{}m", self.open, self.close)
    }
}

/// Length of `text` with SGR sequences removed, in chars.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    let mut len = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == ESC {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}
