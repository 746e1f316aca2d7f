//! Dialgen - A library for enumerating valid phone numbers from digit rules
//!
//! Given a number of digit positions and a set of disallowed digits, this
//! library produces every digit string of that length satisfying three rules:
//! any string containing a '4' must start with '4' (a rewrite applied before
//! the filters), no two adjacent digits may be equal, and no digit may come
//! from the disallowed set. Results are deduplicated and sorted ascending.

pub mod candidates;
pub mod engine;
pub mod rules;

// Re-export the main public API
pub use candidates::{CandidateError, Candidates};
pub use engine::{EngineError, NumberEnumerator};
pub use rules::DisallowedDigits;

/// Enumerate every valid number of the given length.
///
/// This is a convenience function that builds a default enumerator over the
/// provided disallowed digits.
///
/// # Arguments
///
/// * `length` - Number of digit positions; must be positive
/// * `disallowed` - Digits that must not appear in any result; values outside
///   0-9 are inert
///
/// # Returns
///
/// The distinct valid numbers as zero-padded strings, sorted ascending.
///
/// # Errors
///
/// This function will return an error if:
/// * `length` is zero or negative
/// * `length` describes a raw space too large to enumerate
///
/// # Examples
///
/// ```
/// use dialgen::enumerate_valid_numbers;
///
/// let numbers = enumerate_valid_numbers(1, &[7]).expect("valid length");
/// assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6", "8", "9"]);
/// ```
pub fn enumerate_valid_numbers(
    length: i64,
    disallowed: &[i64],
) -> Result<Vec<String>, EngineError> {
    let enumerator = NumberEnumerator::new(DisallowedDigits::from_values(disallowed));
    enumerator.enumerate(length)
}
