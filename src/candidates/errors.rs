use thiserror::Error;

/// Errors that can occur when describing a candidate space
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("Length must be a positive integer: {0}")]
    InvalidLength(i64),
    #[error("Length {0} exceeds the enumerable range")]
    LengthTooLarge(i64),
}
