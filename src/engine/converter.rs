// ============================================================================
// Tick Converter
// Compute-on-change entry points for a quote entry screen
// ============================================================================

use crate::domain::{Denominator, PrecisionMode, TickConfig, TickPrice};
use crate::interfaces::{ConversionEvent, EventHandler};
use crate::notation::{format, read_quote};
use crate::numeric::TickError;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Outcome of converting user-entered text.
#[derive(Debug, Clone, PartialEq)]
pub enum TextConversion {
    /// Text is well formed; `value` is its decimal under the active denominator
    Valid { value: Decimal },

    /// Text failed the grammar; nothing was parsed
    Invalid { error: TickError },
}

impl TextConversion {
    /// Decimal value if the text was valid.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            TextConversion::Valid { value } => Some(*value),
            TextConversion::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, TextConversion::Valid { .. })
    }
}

/// Converts between tick notation and decimals under one quoting convention.
///
/// The surrounding UI calls `on_text_change` / `on_value_change` whenever an
/// input changes; the converter owns no subscriptions and no timers.
pub struct TickConverter {
    /// Active denominator and precision
    config: TickConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl TickConverter {
    /// Create a new converter
    pub fn new(config: TickConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> TickConfig {
        self.config
    }

    /// Replace the whole convention (e.g. both selectors changed at once)
    #[must_use]
    pub fn with_config(mut self, config: TickConfig) -> Self {
        self.config = config;
        self
    }

    /// Flip the 32/64 toggle
    pub fn set_denominator(&mut self, denominator: Denominator) {
        self.config.denominator = denominator;
    }

    /// Change the fractional-precision selector
    pub fn set_precision(&mut self, precision: PrecisionMode) {
        self.config.precision = precision;
    }

    /// Grammar check for a form field, independent of the convention.
    pub fn is_valid(&self, text: &str) -> bool {
        crate::notation::is_valid(text)
    }

    /// Validate `text` and, only if it is well formed, parse it.
    pub fn on_text_change(&self, text: &str) -> TextConversion {
        let result = read_quote(text).and_then(|quote| quote.value(self.config.denominator));

        match result {
            Ok(value) => {
                self.event_handler.on_event(ConversionEvent::TextParsed {
                    text: text.to_string(),
                    value,
                    config: self.config,
                });
                TextConversion::Valid { value }
            }
            Err(error) => {
                self.event_handler.on_event(ConversionEvent::TextRejected {
                    text: text.to_string(),
                    error: error.clone(),
                });
                TextConversion::Invalid { error }
            }
        }
    }

    /// Render `value` as tick notation under the active convention.
    pub fn on_value_change(&self, value: Decimal) -> String {
        let text = format(value, self.config.denominator, self.config.precision);
        self.event_handler.on_event(ConversionEvent::ValueFormatted {
            value,
            text: text.clone(),
            config: self.config,
        });
        text
    }

    /// Typed decomposition of `value` under the active convention.
    pub fn tick_price(&self, value: Decimal) -> TickPrice {
        TickPrice::from_decimal(value, self.config.denominator, self.config.precision)
    }
}
