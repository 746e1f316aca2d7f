use crate::candidates::CandidateError;
use crate::engine::{EngineError, NumberEnumerator};
use crate::rules::DisallowedDigits;

fn enumerate(length: i64, disallowed: &[i64]) -> Result<Vec<String>, EngineError> {
    NumberEnumerator::new(DisallowedDigits::from_values(disallowed)).enumerate(length)
}

#[test]
fn test_length_one_no_disallowed() {
    let numbers = enumerate(1, &[]).unwrap();
    assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
}

#[test]
fn test_length_one_with_disallowed() {
    let numbers = enumerate(1, &[4]).unwrap();
    assert_eq!(numbers, vec!["1", "2", "3", "5", "6", "7", "8", "9"]);
}

#[test]
fn test_length_two_no_disallowed() {
    let numbers = enumerate(2, &[]).unwrap();

    // 72 two-digit strings without a '4' and without an adjacent repeat,
    // plus the 9 anchored forms "40".."49" minus "44"
    assert_eq!(numbers.len(), 81);

    for expected in ["01", "10", "12", "13", "40", "49", "98"] {
        assert!(numbers.iter().any(|n| n == expected), "missing {}", expected);
    }
    for rejected in ["11", "22", "44", "99", "04", "24", "00"] {
        assert!(!numbers.iter().any(|n| n == rejected), "found {}", rejected);
    }
}

#[test]
fn test_raw_twenty_four_dies_after_anchoring() {
    // "24" anchors to "44", which the adjacency filter then rejects, so
    // neither string reaches the output
    let numbers = enumerate(2, &[]).unwrap();
    assert!(!numbers.contains(&"24".to_string()));
    assert!(!numbers.contains(&"44".to_string()));
}

#[test]
fn test_length_two_without_zero() {
    let numbers = enumerate(2, &[0]).unwrap();
    assert_eq!(numbers.len(), 64);
    assert!(!numbers.iter().any(|n| n.contains('0')));
}

#[test]
fn test_output_is_sorted_and_distinct() {
    let numbers = enumerate(3, &[]).unwrap();
    assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_output_is_deterministic() {
    let first = enumerate(3, &[0, 9]).unwrap();
    let second = enumerate(3, &[0, 9]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_result_invariants_hold() {
    let disallowed = [0];
    let numbers = enumerate(3, &disallowed).unwrap();
    assert!(!numbers.is_empty());

    for number in &numbers {
        assert_eq!(number.len(), 3);
        assert!(!number.contains('0'));
        let bytes = number.as_bytes();
        assert!(bytes.windows(2).all(|pair| pair[0] != pair[1]));
        if number.contains('4') {
            assert!(number.starts_with('4'));
        }
    }
}

#[test]
fn test_growing_disallowed_set_shrinks_result() {
    let base = enumerate(3, &[7]).unwrap();
    let narrowed = enumerate(3, &[7, 2]).unwrap();
    assert!(narrowed.len() < base.len());
    assert!(narrowed.iter().all(|n| base.contains(n)));
}

#[test]
fn test_out_of_range_disallowed_values_change_nothing() {
    let base = enumerate(2, &[]).unwrap();
    let with_inert = enumerate(2, &[-1, 12]).unwrap();
    assert_eq!(base, with_inert);
}

#[test]
fn test_all_digits_disallowed_yields_empty_result() {
    let numbers = enumerate(2, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    assert!(numbers.is_empty());
}

#[test]
fn test_zero_length_is_rejected() {
    let result = enumerate(0, &[]);
    assert_eq!(
        result,
        Err(EngineError::CandidateError(CandidateError::InvalidLength(0)))
    );
}

#[test]
fn test_negative_length_is_rejected() {
    let result = enumerate(-3, &[]);
    assert_eq!(
        result,
        Err(EngineError::CandidateError(CandidateError::InvalidLength(
            -3
        )))
    );
}

#[test]
fn test_default_enumerator_has_no_disallowed_digits() {
    let numbers = NumberEnumerator::default().enumerate(1).unwrap();
    assert_eq!(numbers.len(), 9);
}
