// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::domain::TickConfig;
use crate::numeric::TickError;
use rust_decimal::Decimal;

/// Events emitted by the converter
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionEvent {
    /// Text passed the grammar and was converted to a decimal
    TextParsed {
        text: String,
        value: Decimal,
        config: TickConfig,
    },

    /// Text was rejected by the grammar
    TextRejected { text: String, error: TickError },

    /// A decimal was rendered as tick notation
    ValueFormatted {
        value: Decimal,
        text: String,
        config: TickConfig,
    },
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, metrics, audit trails, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::TextRejected { text, error } => {
                tracing::debug!(%text, %error, "tick notation rejected");
            }
            _ => tracing::debug!("Tick converter event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<ConversionEvent>>,
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: ConversionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(ConversionEvent::TextRejected {
            text: "101/16".to_string(),
            error: TickError::NonFiniteValue,
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(ConversionEvent::ValueFormatted {
            value: Decimal::ONE,
            text: "1-00".to_string(),
            config: TickConfig::default(),
        });
    }

    #[test]
    fn test_batch_dispatch() {
        let handler = RecordingHandler::default();
        handler.on_events(vec![
            ConversionEvent::ValueFormatted {
                value: Decimal::ONE,
                text: "1-00".to_string(),
                config: TickConfig::default(),
            },
            ConversionEvent::ValueFormatted {
                value: Decimal::TWO,
                text: "2-00".to_string(),
                config: TickConfig::default(),
            },
        ]);
        assert_eq!(handler.events.lock().unwrap().len(), 2);
    }
}
