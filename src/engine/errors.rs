use thiserror::Error;

use crate::candidates::CandidateError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Candidate space error: {0}")]
    CandidateError(#[from] CandidateError),
}
