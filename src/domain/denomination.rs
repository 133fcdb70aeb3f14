// ============================================================================
// Denomination
// Tick denominators and sub-tick rounding grids
// ============================================================================

use crate::numeric::{TickError, TickResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Denominator
// ============================================================================

/// Number of ticks that make up one whole price point.
///
/// Always supplied by the caller (e.g. a 32/64 toggle), never inferred from
/// the notation itself: `101-16` is 101.5 in 32nds and 101.25 in 64ths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Denominator {
    /// 32 ticks per point (Treasury bonds)
    ThirtySeconds = 32,
    /// 64 ticks per point
    #[default]
    SixtyFourths = 64,
}

impl Denominator {
    /// Ticks per point as an integer.
    #[inline]
    pub const fn ticks_per_point(self) -> u32 {
        self as u32
    }

    /// Ticks per point as a decimal.
    #[inline]
    pub fn value(self) -> Decimal {
        Decimal::from(self.ticks_per_point())
    }

    /// Maps a "64ths" toggle to a denominator.
    pub const fn from_is_64(is_64: bool) -> Self {
        if is_64 {
            Denominator::SixtyFourths
        } else {
            Denominator::ThirtySeconds
        }
    }
}

impl TryFrom<u32> for Denominator {
    type Error = TickError;

    fn try_from(value: u32) -> TickResult<Self> {
        match value {
            32 => Ok(Denominator::ThirtySeconds),
            64 => Ok(Denominator::SixtyFourths),
            other => Err(TickError::UnsupportedDenominator(other)),
        }
    }
}

impl FromStr for Denominator {
    type Err = TickError;

    /// Accepts `"32"`, `"32nds"`, `"32ths"`, `"64"` and `"64ths"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_suffix("nds")
            .or_else(|| s.strip_suffix("ths"))
            .unwrap_or(s);
        let value: u32 = digits
            .parse()
            .map_err(|_| TickError::UnknownDenominator(s.to_string()))?;
        Denominator::try_from(value)
    }
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denominator::ThirtySeconds => write!(f, "32nds"),
            Denominator::SixtyFourths => write!(f, "64ths"),
        }
    }
}

// ============================================================================
// Precision Mode
// ============================================================================

/// Rounding grid applied to the remainder below one whole tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecisionMode {
    /// Nearest half tick, rendered as `+`
    #[default]
    Half,
    /// Nearest eighth of a tick
    Eighth,
    /// Nearest quarter of a tick
    Quarter,
}

impl PrecisionMode {
    /// Grid steps per tick: 2, 8 or 4.
    #[inline]
    pub const fn steps_per_tick(self) -> u32 {
        match self {
            PrecisionMode::Half => 2,
            PrecisionMode::Eighth => 8,
            PrecisionMode::Quarter => 4,
        }
    }

    /// Size of one grid step in ticks.
    pub fn step(self) -> Decimal {
        Decimal::ONE / Decimal::from(self.steps_per_tick())
    }

    /// Maps the fractional-precision selector of an input form.
    ///
    /// No selection means half ticks, `"1/8"` means eighths, and any other
    /// selection falls back to quarters.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            None | Some("") => PrecisionMode::Half,
            Some("1/8") => PrecisionMode::Eighth,
            Some(_) => PrecisionMode::Quarter,
        }
    }
}

impl FromStr for PrecisionMode {
    type Err = TickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half" | "1/2" => Ok(PrecisionMode::Half),
            "eighth" | "1/8" => Ok(PrecisionMode::Eighth),
            "quarter" | "1/4" => Ok(PrecisionMode::Quarter),
            _ => Err(TickError::UnknownPrecision(s.to_string())),
        }
    }
}

impl fmt::Display for PrecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionMode::Half => write!(f, "1/2"),
            PrecisionMode::Eighth => write!(f, "1/8"),
            PrecisionMode::Quarter => write!(f, "1/4"),
        }
    }
}
