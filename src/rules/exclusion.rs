use log::debug;

/// Set of digits that must not appear anywhere in an accepted candidate.
///
/// Built from arbitrary integers; only values 0 through 9 can ever match a
/// candidate character, so anything outside that range is inert and silently
/// dropped rather than treated as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisallowedDigits {
    mask: u16,
}

impl DisallowedDigits {
    pub fn from_values(values: &[i64]) -> Self {
        let mut mask = 0u16;
        for &value in values {
            if (0..=9).contains(&value) {
                mask |= 1 << value;
            } else {
                debug!("Ignoring out-of-range disallowed digit {}", value);
            }
        }
        Self { mask }
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn contains(&self, digit: u8) -> bool {
        digit <= 9 && self.mask & (1 << digit) != 0
    }

    /// True if no character of the candidate is a disallowed digit.
    /// The empty set accepts everything.
    pub fn accepts(&self, candidate: &str) -> bool {
        candidate
            .bytes()
            .filter(u8::is_ascii_digit)
            .all(|b| self.mask & (1 << (b - b'0')) == 0)
    }
}

impl FromIterator<i64> for DisallowedDigits {
    fn from_iter<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let collected: Vec<i64> = values.into_iter().collect();
        Self::from_values(&collected)
    }
}
