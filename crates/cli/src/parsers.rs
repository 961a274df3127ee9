// crates/cli/src/parsers.rs
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a reading speed in words per minute, constrained to [1, 10000].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range.
pub fn parse_words_per_minute(s: &str) -> Result<u32, String> {
    parse_bounded_number(s, 1, Some(10_000))
}

/// Parse a positive `u64` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_u64(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse one markup tag name, accepting `p`, `<p>` or `</p>` spellings.
///
/// # Errors
/// Returns an error if nothing remains after removing the angle brackets.
pub fn parse_tag_name(s: &str) -> Result<String, String> {
    let name = s
        .trim()
        .trim_start_matches('<')
        .trim_start_matches('/')
        .trim_end_matches('>')
        .trim();
    if name.is_empty() {
        return Err(format!("Empty tag name: '{s}'"));
    }
    Ok(name.to_ascii_lowercase())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Test positive usize parsing
        #[test]
        fn test_positive_usize(n in 1usize..1_000_000) {
            let formatted = format!("{n}");
            let parsed = parse_positive_usize(&formatted).unwrap();
            prop_assert_eq!(parsed, n);
        }

        /// Test that zero is rejected for positive u64
        #[test]
        fn test_positive_u64_rejects_zero(_dummy in 0..1) {
            prop_assert!(parse_positive_u64("0").is_err());
        }

        /// Test that tag names survive bracket decoration
        #[test]
        fn test_tag_name_roundtrip(name in "[a-z][a-z0-9]{0,10}") {
            prop_assert_eq!(parse_tag_name(&format!("</{name}>")).unwrap(), name.clone());
            prop_assert_eq!(parse_tag_name(&name).unwrap(), name);
        }
    }
}
