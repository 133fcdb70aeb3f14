// ============================================================================
// Grammar Validator
// Pure predicate gating raw input before it reaches the parser
// ============================================================================

use super::grammar::read_quote;
use crate::numeric::TickResult;

/// Check whether `text` is a well-formed tick price.
///
/// Never panics and never normalizes: surrounding whitespace, a bare leading
/// `-` or an unlisted separator all make the string invalid.
///
/// # Example
/// ```
/// use tick_notation::notation::is_valid;
///
/// assert!(is_valid("101-16+"));
/// assert!(is_valid("-(98-04 3/8)"));
/// assert!(!is_valid("101/16+"));
/// ```
pub fn is_valid(text: &str) -> bool {
    read_quote(text).is_ok()
}

/// Like [`is_valid`], but reports where and why the input was rejected.
///
/// # Errors
/// Returns the first grammar violation.
pub fn validate(text: &str) -> TickResult<()> {
    read_quote(text).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::TickError;

    #[test]
    fn test_accepts_grammar() {
        for text in [
            "101-16",
            "101-16+",
            "101-5",
            "101-5+",
            "101-165",
            "101-16 1/4",
            "101-16 3/8",
            "101-16 7/8",
            "0-00",
            "-(0-16)",
            "-(98-04 3/8)",
            "-(99'165)",
            "101\u{2018}16",
            "101'16",
            "101`16",
            "-(101`16+)",
        ] {
            assert!(is_valid(text), "{} should be valid", text);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for text in [
            "",
            "101",
            "101-",
            "101/16+",
            "101,16",
            "-16",
            "-101-16",
            "(101-16)",
            "-(101-16",
            "101-16)",
            "101-16++",
            "101-1655",
            "101-16 0/8",
            "101-16 8/8",
            "101-16 1/2",
            "101-16  1/4",
            "101-16 1/4 ",
            " 101-16",
            "101-16+ 1/4",
            "101-165+",
            "abc-16",
            "101-\u{0661}\u{0662}",
        ] {
            assert!(!is_valid(text), "{} should be invalid", text);
        }
    }

    #[test]
    fn test_mixed_separators_accepted() {
        // The negation hyphen and the tick separator need not match
        assert!(is_valid("-(101'16)"));
        assert!(is_valid("-(101\u{2018}16 1/4)"));
    }

    #[test]
    fn test_validate_reports_position() {
        assert_eq!(validate("101-16+"), Ok(()));
        assert_eq!(
            validate("101-16 3/16"),
            Err(TickError::UnexpectedChar {
                found: '1',
                position: 9,
                expected: "sub-tick denominator 4 or 8",
            })
        );
    }
}
