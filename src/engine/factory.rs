// ============================================================================
// Converter Factory
// Creates tick converters with proper configuration
// ============================================================================

use crate::domain::{Denominator, PrecisionMode, TickConfig};
use crate::engine::TickConverter;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from the raw form selectors: the 32/64 toggle and
/// the optional fractional-precision selection.
///
/// # Example
/// ```
/// use tick_notation::prelude::*;
/// use std::sync::Arc;
///
/// let converter = create_from_selectors(false, Some("1/8"), Arc::new(NoOpEventHandler));
/// assert_eq!(converter.config(), TickConfig::new(Denominator::ThirtySeconds, PrecisionMode::Eighth));
/// ```
pub fn create_from_selectors(
    is_64: bool,
    fractional: Option<&str>,
    event_handler: Arc<dyn EventHandler>,
) -> TickConverter {
    let config = TickConfig::from_selectors(is_64, fractional);
    tracing::debug!(
        denominator = %config.denominator,
        precision = %config.precision,
        "creating tick converter"
    );
    TickConverter::new(config, event_handler)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent builder for tick converters
///
/// # Example
/// ```
/// use tick_notation::prelude::*;
/// use std::sync::Arc;
///
/// let converter = TickConverterBuilder::new()
///     .thirty_seconds()
///     .quarter_ticks()
///     .build(Arc::new(NoOpEventHandler));
/// assert_eq!(converter.config(), TickConfig::treasury_32nds_quarters());
/// ```
#[derive(Debug, Default)]
pub struct TickConverterBuilder {
    config: TickConfig,
}

impl TickConverterBuilder {
    /// Create a new builder (64ths, half ticks)
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Denominator Configuration
    // ========================================================================

    /// Quote in 32nds
    pub fn thirty_seconds(mut self) -> Self {
        self.config.denominator = Denominator::ThirtySeconds;
        self
    }

    /// Quote in 64ths (default)
    pub fn sixty_fourths(mut self) -> Self {
        self.config.denominator = Denominator::SixtyFourths;
        self
    }

    // ========================================================================
    // Precision Configuration
    // ========================================================================

    /// Round sub-ticks to halves (default)
    pub fn half_ticks(mut self) -> Self {
        self.config.precision = PrecisionMode::Half;
        self
    }

    /// Round sub-ticks to eighths
    pub fn eighth_ticks(mut self) -> Self {
        self.config.precision = PrecisionMode::Eighth;
        self
    }

    /// Round sub-ticks to quarters
    pub fn quarter_ticks(mut self) -> Self {
        self.config.precision = PrecisionMode::Quarter;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from an existing configuration
    pub fn from_config(config: TickConfig) -> Self {
        Self { config }
    }

    /// Apply Treasury bond configuration (32nds, halves)
    pub fn treasury_32nds() -> Self {
        Self::from_config(TickConfig::treasury_32nds())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> TickConverter {
        TickConverter::new(self.config, event_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_from_selectors() {
        let converter = create_from_selectors(true, None, Arc::new(NoOpEventHandler));
        assert_eq!(converter.config(), TickConfig::default());

        let converter = create_from_selectors(false, Some("1/4"), Arc::new(NoOpEventHandler));
        assert_eq!(converter.config(), TickConfig::treasury_32nds_quarters());
    }

    #[test]
    fn test_builder_defaults() {
        let converter = TickConverterBuilder::new().build(Arc::new(NoOpEventHandler));
        assert_eq!(
            converter.config(),
            TickConfig::new(Denominator::SixtyFourths, PrecisionMode::Half)
        );
    }

    #[test]
    fn test_builder_chain() {
        let converter = TickConverterBuilder::new()
            .thirty_seconds()
            .eighth_ticks()
            .build(Arc::new(NoOpEventHandler));
        assert_eq!(
            converter.config(),
            TickConfig::new(Denominator::ThirtySeconds, PrecisionMode::Eighth)
        );

        let converter = TickConverterBuilder::treasury_32nds()
            .sixty_fourths()
            .half_ticks()
            .build(Arc::new(NoOpEventHandler));
        assert_eq!(converter.config(), TickConfig::default());
    }

    #[test]
    fn test_built_converter_formats() {
        let converter = TickConverterBuilder::treasury_32nds().build(Arc::new(NoOpEventHandler));
        assert_eq!(converter.on_value_change(Decimal::new(-5, 1)), "-(0-16)");
    }
}
