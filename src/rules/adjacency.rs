/// True if any two adjacent positions hold the same character.
/// Single-character candidates never have a repeat.
pub fn has_adjacent_repeat(candidate: &str) -> bool {
    candidate.as_bytes().windows(2).any(|pair| pair[0] == pair[1])
}
