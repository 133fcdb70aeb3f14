// ============================================================================
// Numeric Module
// Errors and sub-tick rounding shared by the notation codec
// ============================================================================
//
// This module provides:
// - TickError: Error type for grammar, parsing and configuration failures
// - round: Snap a raw tick count onto the half/eighth/quarter grid
//
// All arithmetic runs on rust_decimal::Decimal, so every grid value
// (multiples of 1/8 of 1/64) is represented exactly.

mod errors;
mod rounding;

pub use errors::{TickError, TickResult};
pub use rounding::{is_on_grid, round};
