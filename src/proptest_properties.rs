//! Property-based tests for the notation codec.
//!
//! 1. **Rounding idempotence**: `round(round(x)) == round(x)`.
//! 2. **Grid round-trip**: on-grid values survive format then parse exactly.
//! 3. **Format-then-parse**: equals the value rounded onto the grid.
//! 4. **Sign wrapping**: one `-(...)` pair iff the value is negative.
//! 5. **Tick padding**: the tick group always has two digits.
//! 6. **Validator agreement**: `is_valid` accepts every formatted string and
//!    agrees with `parse` on arbitrary input (quickcheck).

use proptest::prelude::*;
use quickcheck::{QuickCheck, TestResult};
use rust_decimal::Decimal;

use crate::domain::{Denominator, PrecisionMode};
use crate::notation::{format, is_valid, parse};
use crate::numeric::round;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn price() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000, 0u32..=8)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn denominator() -> impl Strategy<Value = Denominator> {
    prop_oneof![
        Just(Denominator::ThirtySeconds),
        Just(Denominator::SixtyFourths)
    ]
}

fn precision() -> impl Strategy<Value = PrecisionMode> {
    prop_oneof![
        Just(PrecisionMode::Half),
        Just(PrecisionMode::Eighth),
        Just(PrecisionMode::Quarter)
    ]
}

/// Whole parts from small prices up to the largest the grammar accepts.
fn whole_part() -> impl Strategy<Value = u64> {
    prop_oneof![
        3 => 0u64..100_000,
        1 => 9_999_999_999_999_000_000u64..=9_999_999_999_999_999_999,
    ]
}

/// A value exactly on the `(denominator, mode)` grid.
fn on_grid() -> impl Strategy<Value = (Decimal, Denominator, PrecisionMode)> {
    (denominator(), precision(), whole_part(), any::<bool>()).prop_flat_map(
        |(d, m, whole, negative)| {
            let steps = d.ticks_per_point() * m.steps_per_tick();
            (0..steps).prop_map(move |step| {
                let magnitude = Decimal::from(whole) + Decimal::from(step) / Decimal::from(steps);
                let value = if negative { -magnitude } else { magnitude };
                (value, d, m)
            })
        },
    )
}

fn tick_group(text: &str) -> &str {
    let body = text
        .strip_prefix("-(")
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);
    let (_, ticks) = body.split_once('-').unwrap();
    ticks
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn round_is_idempotent(x in decimal(), mode in precision()) {
        let once = round(x, mode);
        prop_assert_eq!(round(once, mode), once);
    }

    #[test]
    fn round_lands_on_grid(x in decimal(), mode in precision()) {
        let steps = Decimal::from(mode.steps_per_tick());
        let scaled = round(x, mode) * steps;
        prop_assert_eq!(scaled, scaled.trunc());
    }

    #[test]
    fn grid_values_round_trip((value, d, m) in on_grid()) {
        let text = format(value, d, m);
        prop_assert_eq!(parse(&text, d).unwrap(), value, "{}", text);
    }

    #[test]
    fn format_then_parse_matches_rounding(x in price(), d in denominator(), m in precision()) {
        let magnitude = x.abs();
        let whole = magnitude.floor();
        let ticks = round((magnitude - whole) * d.value(), m);
        let expected_magnitude = whole + ticks / d.value();
        let expected = if x < Decimal::ZERO { -expected_magnitude } else { expected_magnitude };

        let text = format(x, d, m);
        prop_assert_eq!(parse(&text, d).unwrap(), expected, "{}", text);
    }

    #[test]
    fn negative_values_wrap_once(x in price(), d in denominator(), m in precision()) {
        let text = format(x, d, m);
        let opens = text.matches('(').count();
        let closes = text.matches(')').count();
        if x < Decimal::ZERO {
            prop_assert!(text.starts_with("-(") && text.ends_with(')'), "{}", text);
            prop_assert_eq!((opens, closes), (1, 1));
        } else {
            prop_assert_eq!((opens, closes), (0, 0));
        }
    }

    #[test]
    fn tick_group_is_two_digits(x in price(), d in denominator(), m in precision()) {
        let text = format(x, d, m);
        let digits = tick_group(&text).chars().take_while(char::is_ascii_digit).count();
        prop_assert_eq!(digits, 2, "{}", text);
    }

    #[test]
    fn formatted_output_is_valid(x in price(), d in denominator(), m in precision()) {
        let text = format(x, d, m);
        prop_assert!(is_valid(&text), "{}", text);
    }
}

#[test]
fn largest_whole_round_trips() {
    let whole = Decimal::from(9_999_999_999_999_999_999u64);
    for d in [Denominator::ThirtySeconds, Denominator::SixtyFourths] {
        let steps = d.ticks_per_point() * PrecisionMode::Eighth.steps_per_tick();
        for step in [1, steps / 2 + 1, steps - 1] {
            let magnitude = whole + Decimal::from(step) / Decimal::from(steps);
            for value in [magnitude, -magnitude] {
                let text = format(value, d, PrecisionMode::Eighth);
                assert_eq!(parse(&text, d).unwrap(), value, "{}", text);
            }
        }
    }
}

#[test]
fn validator_agrees_with_parser() {
    fn prop(text: String, is_64: bool) -> TestResult {
        let d = Denominator::from_is_64(is_64);
        TestResult::from_bool(is_valid(&text) == parse(&text, d).is_ok())
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(String, bool) -> TestResult);
}

#[test]
fn validator_agrees_on_near_misses() {
    // Random strings almost never hit the grammar; mutate real quotes instead
    fn prop(seed: Vec<u8>) -> TestResult {
        const ALPHABET: &[char] = &['0', '1', '3', '7', '8', '-', '(', ')', '+', ' ', '/', '\''];
        let mut text: Vec<char> = "-(101-16 3/8)".chars().collect();
        for (i, byte) in seed.iter().enumerate() {
            let pos = (i * 7 + *byte as usize) % text.len();
            text[pos] = ALPHABET[*byte as usize % ALPHABET.len()];
        }
        let text: String = text.into_iter().collect();
        TestResult::from_bool(
            is_valid(&text) == parse(&text, Denominator::ThirtySeconds).is_ok(),
        )
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(Vec<u8>) -> TestResult);
}
