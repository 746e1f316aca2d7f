//! Candidate generation: the raw, unfiltered digit-string space

mod core;
mod errors;

pub use core::{CandidateIter, Candidates};
pub use errors::CandidateError;
