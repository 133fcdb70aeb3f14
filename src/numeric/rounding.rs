// ============================================================================
// Precision Rounder
// Snaps a fractional tick count onto the half/eighth/quarter grid
// ============================================================================

use crate::domain::PrecisionMode;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a raw tick quantity to the nearest multiple of the mode's grid.
///
/// Computes `round(x * k) / k` with `k` = 2, 8 or 4, rounding midpoints away
/// from zero. The result always lies on the grid, so the function is
/// idempotent.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use tick_notation::domain::PrecisionMode;
/// use tick_notation::numeric::round;
///
/// let raw = Decimal::new(1630, 2); // 16.30 ticks
/// assert_eq!(round(raw, PrecisionMode::Half), Decimal::new(165, 1));
/// assert_eq!(round(raw, PrecisionMode::Quarter), Decimal::new(1625, 2));
/// ```
pub fn round(raw_ticks: Decimal, mode: PrecisionMode) -> Decimal {
    let steps = Decimal::from(mode.steps_per_tick());
    match raw_ticks.checked_mul(steps) {
        Some(scaled) => {
            scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) / steps
        }
        // Only reachable near Decimal::MAX, where no fractional digits remain
        None => raw_ticks.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    }
}

/// Returns `true` when `ticks` already lies on the mode's grid.
pub fn is_on_grid(ticks: Decimal, mode: PrecisionMode) -> bool {
    round(ticks, mode) == ticks
}
