// ============================================================================
// Tick Parser
// Converts tick notation into a signed decimal under a chosen denominator
// ============================================================================

use super::grammar::read_quote;
use crate::domain::Denominator;
use crate::numeric::TickResult;
use rust_decimal::Decimal;

/// Parse a tick price into its decimal value.
///
/// `whole + ticks / denominator`, negated for the `-(...)` form. A single
/// tick digit counts as tens (`101-5` = 50 ticks), a third digit adds tenths
/// of a tick, `+` adds half a tick and ` n/d` adds `n/d` of a tick.
///
/// # Errors
/// Input rejected by the grammar yields the same error [`validate`] would
/// report; nothing is guessed from malformed text.
///
/// [`validate`]: super::validate
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use tick_notation::domain::Denominator;
/// use tick_notation::notation::parse;
///
/// let value = parse("101-16+", Denominator::SixtyFourths).unwrap();
/// assert_eq!(value, "101.2578125".parse::<Decimal>().unwrap());
/// ```
pub fn parse(text: &str, denominator: Denominator) -> TickResult<Decimal> {
    let quote = read_quote(text)?;
    let value = quote.value(denominator)?;
    tracing::trace!(%text, %denominator, %value, "parsed tick price");
    Ok(value)
}
