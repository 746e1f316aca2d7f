/// If '4' occurs anywhere in the candidate, overwrite the first character
/// with '4'; otherwise pass the candidate through unchanged.
///
/// This is a rewrite, not a filter: distinct raw candidates can map onto the
/// same output ("14" and "41" do not, but "341" and "241" both become "441"),
/// so downstream collection must deduplicate.
pub fn anchor_fours(candidate: String) -> String {
    if candidate.contains('4') && !candidate.starts_with('4') {
        let mut anchored = candidate;
        anchored.replace_range(0..1, "4");
        anchored
    } else {
        candidate
    }
}
