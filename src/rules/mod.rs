//! The three pipeline rules, applied in order: four-anchoring rewrite,
//! adjacency filter, disallowed-digit filter. The downstream filters always
//! see the rewritten string, never the raw candidate.

mod adjacency;
mod anchor;
mod exclusion;

pub use adjacency::has_adjacent_repeat;
pub use anchor::anchor_fours;
pub use exclusion::DisallowedDigits;
