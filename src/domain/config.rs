// ============================================================================
// Tick Convention Configuration
// Denominator and sub-tick precision used by a converter
// ============================================================================

use super::denomination::{Denominator, PrecisionMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quoting convention applied when converting between text and decimals.
///
/// Defaults to 64ths with half-tick precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickConfig {
    /// Ticks per whole point
    pub denominator: Denominator,

    /// Rounding grid for the sub-tick remainder when formatting
    pub precision: PrecisionMode,
}

impl TickConfig {
    /// Create a new configuration
    pub const fn new(denominator: Denominator, precision: PrecisionMode) -> Self {
        Self {
            denominator,
            precision,
        }
    }

    /// Builder method: Set denominator
    pub const fn with_denominator(mut self, denominator: Denominator) -> Self {
        self.denominator = denominator;
        self
    }

    /// Builder method: Set precision mode
    pub const fn with_precision(mut self, precision: PrecisionMode) -> Self {
        self.precision = precision;
        self
    }

    /// Build from the two form controls of a quote entry screen: the
    /// 32/64 toggle and the optional fractional-precision selector.
    pub fn from_selectors(is_64: bool, fractional: Option<&str>) -> Self {
        Self::new(
            Denominator::from_is_64(is_64),
            PrecisionMode::from_selector(fractional),
        )
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl TickConfig {
    /// Treasury bond style: 32nds, halves quoted as `+`
    pub const fn treasury_32nds() -> Self {
        Self::new(Denominator::ThirtySeconds, PrecisionMode::Half)
    }

    /// 32nds with quarter-tick (128ths) precision
    pub const fn treasury_32nds_quarters() -> Self {
        Self::new(Denominator::ThirtySeconds, PrecisionMode::Quarter)
    }

    /// 64ths with eighth-tick precision
    pub const fn treasury_64ths_eighths() -> Self {
        Self::new(Denominator::SixtyFourths, PrecisionMode::Eighth)
    }
}
