// ============================================================================
// Tick Separators
// Glyphs accepted between the whole part and the tick group
// ============================================================================

use std::fmt;

/// A separator glyph between whole points and ticks.
///
/// Quote entry screens receive visually similar characters from different
/// keyboards and paste sources, so all four are accepted. A string may mix
/// them (the leading `-` of a negated price is a separate token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `-` (U+002D)
    Hyphen,
    /// `‘` (U+2018)
    LeftSingleQuote,
    /// `'` (U+0027)
    Apostrophe,
    /// `` ` `` (U+0060)
    Backtick,
}

impl Separator {
    /// Every accepted separator.
    pub const ALL: [Separator; 4] = [
        Separator::Hyphen,
        Separator::LeftSingleQuote,
        Separator::Apostrophe,
        Separator::Backtick,
    ];

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::LeftSingleQuote => '\u{2018}',
            Separator::Apostrophe => '\'',
            Separator::Backtick => '`',
        }
    }

    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Separator::Hyphen),
            '\u{2018}' => Some(Separator::LeftSingleQuote),
            '\'' => Some(Separator::Apostrophe),
            '`' => Some(Separator::Backtick),
            _ => None,
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
