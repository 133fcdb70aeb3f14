// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use std::sync::Arc;
use tick_notation::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Tick Notation Example ===\n");

    // Validate and parse user input under both conventions
    println!("Parsing quotes...");
    for text in ["101-16", "101-16+", "-(98-04 3/8)", "99'165", "101/16+"] {
        match validate(text) {
            Ok(()) => {
                let in_32 = parse(text, Denominator::ThirtySeconds);
                let in_64 = parse(text, Denominator::SixtyFourths);
                println!("  {:<14} 32nds: {:?}  64ths: {:?}", text, in_32, in_64);
            }
            Err(error) => println!("  {:<14} rejected: {}", text, error),
        }
    }

    // Format a decimal under each precision mode
    println!("\nFormatting 98.13671875 in 32nds...");
    let value = Decimal::new(9813671875, 8);
    for mode in [
        PrecisionMode::Half,
        PrecisionMode::Quarter,
        PrecisionMode::Eighth,
    ] {
        println!(
            "  {:>3}: {}",
            mode,
            format(value, Denominator::ThirtySeconds, mode)
        );
    }

    // Converter bound to the form selectors, reporting through tracing
    println!("\nConverter (64ths, 1/8)...");
    let converter = create_from_selectors(true, Some("1/8"), Arc::new(LoggingEventHandler));
    let entered = converter.on_text_change("-(101-16 5/8)");
    println!("  text  -> {:?}", entered);
    if let Some(value) = entered.value() {
        println!("  value -> {}", converter.on_value_change(value));
    }
}
