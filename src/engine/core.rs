use log::info;
use rayon::prelude::*;

use crate::candidates::Candidates;
use crate::engine::errors::EngineError;
use crate::rules::{DisallowedDigits, anchor_fours, has_adjacent_repeat};

/// Runs the full pipeline for a fixed exclusion set:
/// generate, anchor fours, drop adjacent repeats, drop disallowed digits,
/// then dedupe and sort the survivors.
pub struct NumberEnumerator {
    disallowed: DisallowedDigits,
}

impl NumberEnumerator {
    pub fn new(disallowed: DisallowedDigits) -> Self {
        Self { disallowed }
    }

    /// Enumerate every valid number of the given length, ascending, without
    /// duplicates. Pure: identical inputs give byte-identical output.
    ///
    /// Only the survivors are ever materialized; the raw space is streamed
    /// across the rayon pool and the final sort restores the order the
    /// parallel bridge loses.
    ///
    /// # Errors
    ///
    /// Fails before any generation begins if `length` is not positive or the
    /// raw space is too large to enumerate.
    pub fn enumerate(&self, length: i64) -> Result<Vec<String>, EngineError> {
        let candidates = Candidates::new(length)?;

        info!(
            "Enumerating {} raw candidates of width {}",
            candidates.len(),
            candidates.width()
        );

        let mut survivors: Vec<String> = candidates
            .iter()
            .par_bridge()
            .filter_map(|raw| {
                let anchored = anchor_fours(raw);
                if has_adjacent_repeat(&anchored) {
                    return None;
                }
                if !self.disallowed.accepts(&anchored) {
                    return None;
                }
                Some(anchored)
            })
            .collect();

        survivors.par_sort_unstable();
        survivors.dedup();

        info!("{} candidates survived the pipeline", survivors.len());
        Ok(survivors)
    }
}

impl Default for NumberEnumerator {
    fn default() -> Self {
        Self::new(DisallowedDigits::default())
    }
}
