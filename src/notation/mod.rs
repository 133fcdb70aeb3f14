// ============================================================================
// Notation Module
// Bidirectional codec between tick notation strings and decimals
// ============================================================================
//
// This module provides:
// - is_valid / validate: Grammar gate for raw input
// - parse: Tick notation -> Decimal under a denominator
// - format: Decimal -> canonical tick notation under a precision mode
// - TickQuote: Typed syntax tree shared by the validator and the parser
//
// Every function here is pure; none of them keep state between calls.

mod formatter;
mod grammar;
mod parser;
mod separator;
mod validator;

pub use formatter::{format, format_f64};
pub use grammar::{read_quote, TickQuote, TickSuffix};
pub use parser::parse;
pub use separator::Separator;
pub use validator::{is_valid, validate};
