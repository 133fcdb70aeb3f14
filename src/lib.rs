// ============================================================================
// Tick Notation Library
// Codec for fixed-income prices quoted in 32nds and 64ths
// ============================================================================

//! # Tick Notation
//!
//! Converts between tick-quoted fixed-income prices such as `101-16+` or
//! `-(98-04 3/8)` and their decimal values.
//!
//! ## Features
//!
//! - **Grammar validation** with the position of the first offending character
//! - **Parsing** under a caller-chosen denominator (32nds or 64ths)
//! - **Formatting** with half, eighth or quarter sub-tick rounding
//! - **Exact arithmetic** on `rust_decimal::Decimal`, no float drift
//! - **Converter** entry points for quote entry screens, with event hooks
//!
//! ## Example
//!
//! ```rust
//! use tick_notation::prelude::*;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! assert!(is_valid("101-16+"));
//! let value = parse("101-16+", Denominator::SixtyFourths).unwrap();
//! assert_eq!(value, Decimal::new(1012578125, 7));
//!
//! let text = format(value, Denominator::SixtyFourths, PrecisionMode::Half);
//! assert_eq!(text, "101-16+");
//!
//! // Or through a converter bound to one quoting convention
//! let converter = TickConverterBuilder::new()
//!     .thirty_seconds()
//!     .eighth_ticks()
//!     .build(Arc::new(NoOpEventHandler));
//! assert_eq!(
//!     converter.on_text_change("-(98-04 3/8)").value(),
//!     Some(Decimal::new(-9813671875, 8))
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod notation;
pub mod numeric;

#[cfg(test)]
mod proptest_properties;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Denominator, PrecisionMode, Sign, SubTickFraction, TickConfig, TickPrice,
    };
    pub use crate::engine::{
        create_from_selectors, TextConversion, TickConverter, TickConverterBuilder,
    };
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::notation::{format, is_valid, parse, validate, Separator, TickQuote};
    pub use crate::numeric::{round, TickError, TickResult};
}
