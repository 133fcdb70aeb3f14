// ============================================================================
// Tick Notation Errors
// Error types for grammar validation, parsing and configuration
// ============================================================================

use thiserror::Error;

/// Errors that can occur while reading, converting or configuring tick prices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum TickError {
    /// Input ended before the grammar was satisfied
    #[error("unexpected end of input at position {position}: expected {expected}")]
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },

    /// A character that the grammar does not allow at this position
    #[error("unexpected character {found:?} at position {position}: expected {expected}")]
    UnexpectedChar {
        found: char,
        position: usize,
        expected: &'static str,
    },

    /// Whole part has more digits than a decimal can hold
    #[error("whole part {digits} is out of range")]
    WholeOutOfRange { digits: String },

    /// Only 32nds and 64ths are supported
    #[error("unsupported tick denominator {0}: expected 32 or 64")]
    UnsupportedDenominator(u32),

    /// Denominator label not recognised
    #[error("unknown tick denominator {0:?}")]
    UnknownDenominator(String),

    /// Precision selector not recognised
    #[error("unknown precision mode {0:?}")]
    UnknownPrecision(String),

    /// Tick price component outside its allowed range
    #[error("invalid tick price: {0}")]
    InvalidTickPrice(&'static str),

    /// NaN or infinite float handed to the formatter
    #[error("value is not finite")]
    NonFiniteValue,

    /// Reconstructed value exceeded the decimal range
    #[error("arithmetic overflow: tick price exceeds decimal range")]
    Overflow,
}

impl TickError {
    /// Returns `true` for errors raised by the grammar reader.
    pub const fn is_grammar_error(&self) -> bool {
        matches!(
            self,
            TickError::UnexpectedEnd { .. }
                | TickError::UnexpectedChar { .. }
                | TickError::WholeOutOfRange { .. }
        )
    }
}

/// Result type alias for tick notation operations
pub type TickResult<T> = Result<T, TickError>;
