// ============================================================================
// Engine Module
// Stateful entry points a UI collaborator calls on every input change
// ============================================================================

mod converter;

pub mod factory;

pub use converter::{TextConversion, TickConverter};
pub use factory::{create_from_selectors, TickConverterBuilder};
