//! Phenomatch core domain types, constants, and errors.

mod error;
mod types;

pub use error::MatchError;
pub use types::{
    canonical_prefix, AliasEntry, MatchResult, Signature, CANONICAL_ID_LEN, MATCH_THRESHOLD,
};

#[cfg(test)]
mod tests {
    use super::*;

    // --- canonical_prefix ---

    #[test]
    fn canonical_prefix_truncates_long_ids() {
        assert_eq!(canonical_prefix("0000001b12"), "0000001");
    }

    #[test]
    fn canonical_prefix_keeps_exact_length_ids() {
        assert_eq!(canonical_prefix("0000001"), "0000001");
    }

    #[test]
    fn canonical_prefix_keeps_short_ids() {
        assert_eq!(canonical_prefix("001"), "001");
        assert_eq!(canonical_prefix(""), "");
    }

    // --- Signature ---

    fn sig(bigrams: &[&str]) -> Signature {
        Signature::from_bigrams(bigrams.iter().map(|b| b.to_string()))
    }

    #[test]
    fn signature_counts_duplicates() {
        let s = sig(&["^n", "no", "no", "o$"]);
        assert_eq!(s.len(), 4);
        assert_eq!(s.distinct(), 3);
        assert_eq!(s.count("no"), 2);
        assert_eq!(s.count("o$"), 1);
        assert_eq!(s.count("zz"), 0);
    }

    #[test]
    fn signature_empty() {
        let s = Signature::default();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.distinct(), 0);
    }

    #[test]
    fn shared_takes_minimum_counts() {
        let left = sig(&["ab", "ab", "ab", "cd"]);
        let right = sig(&["ab", "cd", "cd"]);
        // ab: min(3, 1) = 1, cd: min(1, 2) = 1
        assert_eq!(left.shared(&right), 2);
    }

    #[test]
    fn shared_is_symmetric() {
        let left = sig(&["ab", "ab", "cd", "ef"]);
        let right = sig(&["ab", "cd", "cd", "gh"]);
        assert_eq!(left.shared(&right), right.shared(&left));
    }

    #[test]
    fn shared_disjoint_is_zero() {
        let left = sig(&["ab", "cd"]);
        let right = sig(&["ef", "gh"]);
        assert_eq!(left.shared(&right), 0);
    }

    #[test]
    fn shared_with_empty_is_zero() {
        let left = sig(&["ab", "cd"]);
        assert_eq!(left.shared(&Signature::default()), 0);
        assert_eq!(Signature::default().shared(&left), 0);
    }

    #[test]
    fn shared_identical_is_full_length() {
        let s = sig(&["ab", "ab", "cd"]);
        assert_eq!(s.shared(&s.clone()), 3);
    }

    #[test]
    fn signature_order_does_not_matter() {
        let a = sig(&["ab", "cd", "ab"]);
        let b = sig(&["ab", "ab", "cd"]);
        assert_eq!(a, b);
    }

    // --- MatchError ---

    #[test]
    fn match_error_display() {
        let err = MatchError::Parse("record missing name line".to_string());
        assert!(err.to_string().contains("record missing name line"));
    }

    #[test]
    fn match_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: MatchError = io_err.into();
        assert!(err.to_string().contains("not found"));
    }
}
