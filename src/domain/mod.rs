// ============================================================================
// Domain Models Module
// Contains the tick price value types and quoting configuration
// ============================================================================

pub mod config;
pub mod denomination;
pub mod tick_price;

pub use config::TickConfig;
pub use denomination::{Denominator, PrecisionMode};
pub use tick_price::{Sign, SubTickFraction, TickPrice};
