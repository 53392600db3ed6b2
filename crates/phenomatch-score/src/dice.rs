use phenomatch_core::Signature;

/// Dice-style overlap between two bigram multisets, scaled to [0, 100].
///
/// `shared` is the true multiset intersection size, so the result does not
/// depend on any pairing order. Two empty signatures score 0 rather than
/// dividing by zero.
pub fn dice_score(left: &Signature, right: &Signature) -> f64 {
    let total = left.len() + right.len();
    if total == 0 {
        return 0.0;
    }
    100.0 * 2.0 * f64::from(left.shared(right)) / f64::from(total)
}
