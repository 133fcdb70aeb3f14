// ============================================================================
// Tick Notation Grammar
// Recursive-descent reader for 32nds/64ths price strings
// ============================================================================
//
//   price   := negated | plain
//   negated := "-(" plain ")"
//   plain   := whole sep tick [suffix]
//   whole   := digit+
//   sep     := "-" | "‘" | "'" | "`"
//   tick    := digit{1,2}
//   suffix  := "+" | digit | (" " [1-7] "/" ("4" | "8"))
//
// The validator and the parser both go through `read_quote`, so the grammar
// is defined once.

use super::separator::Separator;
use crate::domain::{Denominator, Sign};
use crate::numeric::{TickError, TickResult};
use rust_decimal::Decimal;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Largest whole part accepted, in significant digits.
///
/// An eighth of a 64th needs nine decimal places, and `Decimal` carries 28
/// significant digits in total.
const MAX_WHOLE_DIGITS: usize = 19;

// ============================================================================
// Syntax Tree
// ============================================================================

/// Optional trailer after the one- or two-digit tick group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSuffix {
    /// `+`: half a tick
    Plus,
    /// A third tick digit, read as tenths of a tick (`165` = 16.5)
    Digit(u8),
    /// ` n/d` with n in 1..=7 and d in {4, 8}
    Fraction { numerator: u8, denominator: u8 },
}

/// A price string as read by the grammar, before any denominator is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickQuote {
    sign: Sign,
    whole: Decimal,
    separator: Separator,
    tick: u8,
    tick_width: u8,
    suffix: Option<TickSuffix>,
}

impl TickQuote {
    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub const fn whole(&self) -> Decimal {
        self.whole
    }

    /// Separator glyph that followed the whole part.
    #[inline]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Tick digits as written (without a third-digit suffix).
    #[inline]
    pub const fn tick_digits(&self) -> u8 {
        self.tick
    }

    #[inline]
    pub const fn suffix(&self) -> Option<TickSuffix> {
        self.suffix
    }

    /// Length of the digit run after the separator: 1, 2 or 3.
    pub const fn tick_segment_len(&self) -> usize {
        match self.suffix {
            Some(TickSuffix::Digit(_)) => self.tick_width as usize + 1,
            _ => self.tick_width as usize,
        }
    }

    /// Tick count including any sub-tick refinement.
    ///
    /// A single digit is a tens digit (`5` = 50 ticks). A third digit adds
    /// tenths of a tick, unlike the ` n/d` form which adds quarters or
    /// eighths; both forms are kept as written.
    pub fn tick_value(&self) -> Decimal {
        let base = if self.tick_width == 1 {
            Decimal::from(self.tick) * Decimal::TEN
        } else {
            Decimal::from(self.tick)
        };

        match self.suffix {
            None => base,
            Some(TickSuffix::Plus) => base + Decimal::new(5, 1),
            Some(TickSuffix::Digit(d)) => base + Decimal::from(d) / Decimal::TEN,
            Some(TickSuffix::Fraction {
                numerator,
                denominator,
            }) => base + Decimal::from(numerator) / Decimal::from(denominator),
        }
    }

    /// Signed decimal value under `denominator`.
    ///
    /// # Errors
    /// Returns `Overflow` if the whole part leaves no room for the ticks.
    pub fn value(&self, denominator: Denominator) -> TickResult<Decimal> {
        let fraction = self.tick_value() / denominator.value();
        let magnitude = self
            .whole
            .checked_add(fraction)
            .ok_or(TickError::Overflow)?;
        // Decimal rounds instead of failing once the scale runs out
        if magnitude - self.whole != fraction {
            return Err(TickError::Overflow);
        }
        Ok(self.sign.apply(magnitude))
    }
}

impl fmt::Display for TickQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-(")?;
        }
        write!(
            f,
            "{}{}{:0width$}",
            self.whole,
            self.separator,
            self.tick,
            width = self.tick_width as usize
        )?;
        match self.suffix {
            None => {}
            Some(TickSuffix::Plus) => write!(f, "+")?,
            Some(TickSuffix::Digit(d)) => write!(f, "{}", d)?,
            Some(TickSuffix::Fraction {
                numerator,
                denominator,
            }) => write!(f, " {}/{}", numerator, denominator)?,
        }
        if self.sign.is_negative() {
            write!(f, ")")?;
        }
        Ok(())
    }
}

// ============================================================================
// Reader
// ============================================================================

struct Reader<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            position: 0,
        }
    }

    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    /// Error describing whatever sits at the cursor.
    fn unexpected(&mut self, expected: &'static str) -> TickError {
        match self.peek() {
            Some(found) => TickError::UnexpectedChar {
                found,
                position: self.position,
                expected,
            },
            None => TickError::UnexpectedEnd {
                position: self.position,
                expected,
            },
        }
    }

    fn expect(&mut self, want: char, expected: &'static str) -> TickResult<()> {
        if self.peek() == Some(want) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn eat_digit(&mut self) -> Option<u8> {
        let digit = self.peek()?.to_digit(10)?;
        self.bump();
        // to_digit(10) is always below 10
        Some(digit as u8)
    }

    fn digit(&mut self, expected: &'static str) -> TickResult<u8> {
        self.eat_digit().ok_or_else(|| self.unexpected(expected))
    }

    fn price(&mut self) -> TickResult<TickQuote> {
        let negated = self.peek() == Some('-');
        if negated {
            self.bump();
            self.expect('(', "'(' after leading '-'")?;
        }

        let mut quote = self.plain()?;

        if negated {
            self.expect(')', "closing ')'")?;
            quote.sign = Sign::Negative;
        }

        match self.peek() {
            None => Ok(quote),
            Some(_) => Err(self.unexpected("end of input")),
        }
    }

    fn plain(&mut self) -> TickResult<TickQuote> {
        let whole = self.whole()?;

        let separator = self
            .peek()
            .and_then(Separator::from_char)
            .ok_or_else(|| self.unexpected("tick separator"))?;
        self.bump();

        let first = self.digit("tick digit")?;
        let (tick, tick_width) = match self.eat_digit() {
            Some(second) => (first * 10 + second, 2),
            None => (first, 1),
        };

        let suffix = self.suffix()?;

        Ok(TickQuote {
            sign: Sign::Positive,
            whole,
            separator,
            tick,
            tick_width,
            suffix,
        })
    }

    fn whole(&mut self) -> TickResult<Decimal> {
        let mut digits = String::new();
        while let Some(d) = self.eat_digit() {
            digits.push(char::from(b'0' + d));
        }
        if digits.is_empty() {
            return Err(self.unexpected("digit"));
        }

        let significant = digits.trim_start_matches('0');
        if significant.len() > MAX_WHOLE_DIGITS {
            return Err(TickError::WholeOutOfRange { digits });
        }
        if significant.is_empty() {
            return Ok(Decimal::ZERO);
        }
        significant
            .parse::<Decimal>()
            .map_err(|_| TickError::WholeOutOfRange { digits })
    }

    fn suffix(&mut self) -> TickResult<Option<TickSuffix>> {
        match self.peek() {
            Some('+') => {
                self.bump();
                Ok(Some(TickSuffix::Plus))
            }
            Some(c) if c.is_ascii_digit() => {
                let d = self.digit("tick digit")?;
                Ok(Some(TickSuffix::Digit(d)))
            }
            Some(' ') => {
                self.bump();
                let numerator = match self.peek().and_then(|c| c.to_digit(10)) {
                    Some(n @ 1..=7) => {
                        self.bump();
                        n as u8
                    }
                    _ => return Err(self.unexpected("sub-tick numerator 1-7")),
                };
                self.expect('/', "'/'")?;
                let denominator = match self.peek() {
                    Some('4') => 4,
                    Some('8') => 8,
                    _ => return Err(self.unexpected("sub-tick denominator 4 or 8")),
                };
                self.bump();
                Ok(Some(TickSuffix::Fraction {
                    numerator,
                    denominator,
                }))
            }
            _ => Ok(None),
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Read a complete price string into a [`TickQuote`].
///
/// # Errors
/// Returns the first grammar violation: `UnexpectedChar`, `UnexpectedEnd`
/// or `WholeOutOfRange`.
pub fn read_quote(text: &str) -> TickResult<TickQuote> {
    Reader::new(text).price()
}
