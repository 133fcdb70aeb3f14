// ============================================================================
// Tick Price
// Typed whole/tick/sub-tick decomposition of a fixed-income price
// ============================================================================

use super::denomination::{Denominator, PrecisionMode};
use crate::numeric::{round, TickError, TickResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign
// ============================================================================

/// Sign of a tick price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Check if sign is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// Applies the sign to a non-negative magnitude. Zero stays unsigned.
    #[inline]
    pub fn apply(self, magnitude: Decimal) -> Decimal {
        match self {
            Sign::Negative if !magnitude.is_zero() => -magnitude,
            _ => magnitude,
        }
    }
}

// ============================================================================
// Sub-Tick Fraction
// ============================================================================

/// Remainder below one whole tick after rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubTickFraction {
    /// On a whole tick
    #[default]
    None,
    /// Half a tick, rendered `+`
    Half,
    /// `n/4` of a tick, n in {1, 3}
    Quarter(u8),
    /// `n/8` of a tick, n in {1, 3, 5, 7}
    Eighth(u8),
}

impl SubTickFraction {
    /// Classifies a rounded remainder in `[0, 1)` ticks.
    ///
    /// Remainders that are not a multiple of 1/8 cannot come out of the
    /// rounder; they map to `7/8` like any other unlisted value.
    pub fn from_remainder(remainder: Decimal) -> Self {
        let eighths = (remainder * Decimal::from(8u32))
            .to_u8()
            .filter(|n| Decimal::from(*n) == remainder * Decimal::from(8u32));

        match eighths {
            Some(0) => SubTickFraction::None,
            Some(4) => SubTickFraction::Half,
            Some(2) => SubTickFraction::Quarter(1),
            Some(6) => SubTickFraction::Quarter(3),
            Some(n @ (1 | 3 | 5)) => SubTickFraction::Eighth(n),
            _ => SubTickFraction::Eighth(7),
        }
    }

    /// Fraction of a tick as a decimal.
    pub fn value(self) -> Decimal {
        match self {
            SubTickFraction::None => Decimal::ZERO,
            SubTickFraction::Half => Decimal::new(5, 1),
            SubTickFraction::Quarter(n) => Decimal::from(n) / Decimal::from(4u32),
            SubTickFraction::Eighth(n) => Decimal::from(n) / Decimal::from(8u32),
        }
    }

    /// Whether the numerator is one of the reduced odd forms.
    pub const fn is_canonical(self) -> bool {
        match self {
            SubTickFraction::None | SubTickFraction::Half => true,
            SubTickFraction::Quarter(n) => matches!(n, 1 | 3),
            SubTickFraction::Eighth(n) => matches!(n, 1 | 3 | 5 | 7),
        }
    }
}

impl fmt::Display for SubTickFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubTickFraction::None => Ok(()),
            SubTickFraction::Half => write!(f, "+"),
            SubTickFraction::Quarter(n) => write!(f, " {}/4", n),
            SubTickFraction::Eighth(n) => write!(f, " {}/8", n),
        }
    }
}

// ============================================================================
// Tick Price
// ============================================================================

/// A price split into whole points, ticks and a sub-tick fraction.
///
/// Value is `sign * (whole + (ticks + fraction) / denominator)`.
///
/// # Invariants
/// - `whole` is a non-negative integer
/// - `ticks < denominator`
/// - `fraction` is one of the canonical forms (see [`SubTickFraction`])
///
/// Display renders the canonical notation: `101-16+`, `-(98-04 3/8)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickPrice {
    sign: Sign,
    whole: Decimal,
    ticks: u32,
    fraction: SubTickFraction,
    denominator: Denominator,
}

impl TickPrice {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from components.
    ///
    /// # Errors
    /// Returns `InvalidTickPrice` if `ticks` is not below the denominator or
    /// the fraction numerator is not canonical.
    pub fn new(
        sign: Sign,
        whole: u64,
        ticks: u32,
        fraction: SubTickFraction,
        denominator: Denominator,
    ) -> TickResult<Self> {
        if ticks >= denominator.ticks_per_point() {
            return Err(TickError::InvalidTickPrice(
                "ticks must be below the denominator",
            ));
        }
        if !fraction.is_canonical() {
            return Err(TickError::InvalidTickPrice(
                "sub-tick numerator must be odd and below its denominator",
            ));
        }

        Ok(Self {
            sign,
            whole: Decimal::from(whole),
            ticks,
            fraction,
            denominator,
        })
    }

    /// Decompose a decimal value, rounding the sub-tick remainder to `mode`.
    ///
    /// When the remainder rounds up to a full point (e.g. 31.9 ticks to 32
    /// in half mode), the point is carried into `whole`.
    pub fn from_decimal(value: Decimal, denominator: Denominator, mode: PrecisionMode) -> Self {
        let sign = if value < Decimal::ZERO {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = value.abs();
        let mut whole = magnitude.floor();

        let raw_ticks = (magnitude - whole) * denominator.value();
        let rounded = round(raw_ticks, mode);
        let tick_whole = rounded.floor();
        let fraction = SubTickFraction::from_remainder(rounded - tick_whole);

        let mut ticks = tick_whole.to_u32().unwrap_or_default();
        if ticks >= denominator.ticks_per_point() {
            whole += Decimal::ONE;
            ticks = 0;
        }

        Self {
            sign,
            whole,
            ticks,
            fraction,
            denominator,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Whole points (non-negative integer).
    #[inline]
    pub const fn whole(&self) -> Decimal {
        self.whole
    }

    #[inline]
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    #[inline]
    pub const fn fraction(&self) -> SubTickFraction {
        self.fraction
    }

    #[inline]
    pub const fn denominator(&self) -> Denominator {
        self.denominator
    }

    /// Check if price is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Ticks including the sub-tick fraction (e.g. 16.5).
    pub fn tick_value(&self) -> Decimal {
        Decimal::from(self.ticks) + self.fraction.value()
    }

    /// Signed decimal value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit in a decimal.
    pub fn to_decimal(&self) -> TickResult<Decimal> {
        let fraction = self.tick_value() / self.denominator.value();
        let magnitude = self
            .whole
            .checked_add(fraction)
            .ok_or(TickError::Overflow)?;
        if magnitude - self.whole != fraction {
            return Err(TickError::Overflow);
        }
        Ok(self.sign.apply(magnitude))
    }
}

impl fmt::Display for TickPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-({}-{:02}{})", self.whole, self.ticks, self.fraction)
        } else {
            write!(f, "{}-{:02}{}", self.whole, self.ticks, self.fraction)
        }
    }
}
