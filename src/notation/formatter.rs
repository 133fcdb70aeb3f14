// ============================================================================
// Tick Formatter
// Renders a decimal value as canonical tick notation
// ============================================================================

use crate::domain::{Denominator, PrecisionMode, TickPrice};
use crate::numeric::{TickError, TickResult};
use rust_decimal::Decimal;

/// Format a decimal value as tick notation.
///
/// The remainder below one point is converted to ticks and rounded to the
/// precision grid. Ticks are zero-padded to two digits, the sub-tick part is
/// rendered as `+`, ` n/4` or ` n/8`, and negative values are wrapped as
/// `-(...)`. Always uses `-` as the separator.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use tick_notation::domain::{Denominator, PrecisionMode};
/// use tick_notation::notation::format;
///
/// let value = "101.25".parse::<Decimal>().unwrap();
/// assert_eq!(format(value, Denominator::SixtyFourths, PrecisionMode::Half), "101-16");
///
/// let value = "-0.5".parse::<Decimal>().unwrap();
/// assert_eq!(format(value, Denominator::ThirtySeconds, PrecisionMode::Half), "-(0-16)");
/// ```
pub fn format(value: Decimal, denominator: Denominator, mode: PrecisionMode) -> String {
    TickPrice::from_decimal(value, denominator, mode).to_string()
}

/// Format a float, for collaborators that hold prices as `f64`.
///
/// # Errors
/// Returns `NonFiniteValue` for NaN or infinity and `Overflow` when the
/// float is outside the decimal range.
pub fn format_f64(value: f64, denominator: Denominator, mode: PrecisionMode) -> TickResult<String> {
    if !value.is_finite() {
        return Err(TickError::NonFiniteValue);
    }
    let value = Decimal::try_from(value).map_err(|_| TickError::Overflow)?;
    Ok(format(value, denominator, mode))
}
