// crates/domain/src/model/validation.rs
//! Positional validation of the canonical `YYYY-MM-DD hh:mm:ss` layout.
//!
//! Every character position has its own rule. Two-digit fields additionally cap
//! their ones digit by the tens digit in front of it, which bounds months to
//! 12, days to 31 and hours to 23 without any numeric conversion.

use std::fmt;

use thiserror::Error;

/// Length of a canonical timestamp string.
pub const CANONICAL_LEN: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Digit,
    Literal(u8),
    Between(u8, u8),
    /// A digit that may not exceed `max` when the previous position holds `lead`.
    CappedAfter { lead: u8, max: u8 },
}

impl Rule {
    fn accepts(self, current: u8, previous: Option<u8>) -> bool {
        match self {
            Self::Digit => current.is_ascii_digit(),
            Self::Literal(expected) => current == expected,
            Self::Between(lo, hi) => (lo..=hi).contains(&current),
            Self::CappedAfter { lead, max } => current.is_ascii_digit() && !(previous == Some(lead) && current > max),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit => f.write_str("a digit in 0-9"),
            Self::Literal(b' ') => f.write_str("a space"),
            Self::Literal(c) => write!(f, "'{}'", char::from(*c)),
            Self::Between(lo, hi) => write!(f, "a digit in {}-{}", char::from(*lo), char::from(*hi)),
            Self::CappedAfter { lead, max } => write!(
                f,
                "a digit in 0-9, at most {} after a leading {}",
                char::from(*max),
                char::from(*lead)
            ),
        }
    }
}

const LAYOUT: [(&str, Rule); CANONICAL_LEN] = [
    ("YYYY", Rule::Digit),
    ("YYYY", Rule::Digit),
    ("YYYY", Rule::Digit),
    ("YYYY", Rule::Digit),
    ("YYYY-MM delimiter", Rule::Literal(b'-')),
    ("MM", Rule::Between(b'0', b'1')),
    ("MM", Rule::CappedAfter { lead: b'1', max: b'2' }),
    ("MM-DD delimiter", Rule::Literal(b'-')),
    ("DD", Rule::Between(b'0', b'3')),
    ("DD", Rule::CappedAfter { lead: b'3', max: b'1' }),
    ("date/time separator", Rule::Literal(b' ')),
    ("hh", Rule::Between(b'0', b'2')),
    ("hh", Rule::CappedAfter { lead: b'2', max: b'3' }),
    ("hh:mm delimiter", Rule::Literal(b':')),
    ("mm", Rule::Between(b'0', b'5')),
    ("mm", Rule::Digit),
    ("mm:ss delimiter", Rule::Literal(b':')),
    ("ss", Rule::Between(b'0', b'5')),
    ("ss", Rule::Digit),
];

/// Why a string is not a canonical timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("expected 19 characters (YYYY-MM-DD hh:mm:ss), found {found}")]
    Length { found: usize },

    #[error("invalid {field} at position {position}: found '{found}', expected {expected}")]
    Field {
        position: usize,
        field: &'static str,
        found: char,
        expected: String,
    },
}

/// Checks `input` against the canonical layout, stopping at the first offending position.
///
/// The input is only borrowed, so a caller can still reinterpret it (as a path, say)
/// after a rejection.
///
/// # Errors
/// Returns [`TimestampError::Length`] when `input` is not exactly 19 bytes long and
/// [`TimestampError::Field`] for the first position that breaks its rule.
pub fn validate(input: &str) -> Result<(), TimestampError> {
    let bytes = input.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return Err(TimestampError::Length { found: bytes.len() });
    }

    let mut previous = None;
    for (position, (&current, &(field, rule))) in bytes.iter().zip(LAYOUT.iter()).enumerate() {
        if !rule.accepts(current, previous) {
            return Err(TimestampError::Field {
                position,
                field,
                found: char::from(current),
                expected: rule.to_string(),
            });
        }
        previous = Some(current);
    }
    Ok(())
}
