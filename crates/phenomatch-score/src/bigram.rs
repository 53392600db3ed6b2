/// Slide a 2-character window (step 1) across each boundary-marked token,
/// concatenating the fingerprints in token order. Duplicates are preserved;
/// the output is a multiset, not a set.
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for token in tokens {
        let chars: Vec<char> = token.chars().collect();
        for window in chars.windows(2) {
            out.push(window.iter().collect());
        }
    }
    out
}
