use log::{debug, warn};

use crate::candidates::errors::CandidateError;

/// The raw candidate space for a given number of digit positions: every
/// integer from 1 through 10^length - 1, rendered as a zero-padded string.
///
/// "000...0" is never a candidate (the range starts at 1), but zero-leading
/// candidates like "001" are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    width: usize,
    last: u64,
}

impl Candidates {
    /// # Errors
    ///
    /// Returns an error if `length` is not positive, or if the raw space
    /// does not fit the u64 counter (length > 19).
    pub fn new(length: i64) -> Result<Self, CandidateError> {
        debug!("Building candidate space for length {}", length);

        if length <= 0 {
            warn!("Rejecting non-positive length {}", length);
            return Err(CandidateError::InvalidLength(length));
        }

        let exponent =
            u32::try_from(length).map_err(|_| CandidateError::LengthTooLarge(length))?;
        let last = 10u64
            .checked_pow(exponent)
            .map(|bound| bound - 1)
            .ok_or(CandidateError::LengthTooLarge(length))?;

        Ok(Self {
            width: exponent as usize,
            last,
        })
    }

    /// Number of digit positions in every candidate.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Size of the raw space, 10^length - 1.
    pub fn len(&self) -> u64 {
        self.last
    }

    pub fn is_empty(&self) -> bool {
        self.last == 0
    }

    /// A fresh enumeration of the space, independent of any previous one.
    pub fn iter(&self) -> CandidateIter {
        CandidateIter {
            next: 1,
            last: self.last,
            width: self.width,
        }
    }
}

/// Lazy ascending walk over a candidate space. Each yielded string has
/// exactly `width` characters, left-padded with zeros.
#[derive(Debug, Clone)]
pub struct CandidateIter {
    next: u64,
    last: u64,
    width: usize,
}

impl Iterator for CandidateIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let candidate = format!("{:0width$}", self.next, width = self.width);
        self.next += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.last {
            0
        } else {
            self.last - self.next + 1
        };
        usize::try_from(remaining).map_or((usize::MAX, None), |n| (n, Some(n)))
    }
}
