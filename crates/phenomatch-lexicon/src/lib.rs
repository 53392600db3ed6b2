//! Immutable lexical resources: stopwords, VIP words, and the English stemmer.
//!
//! Every resource is owned by the [`Lexicon`] instance rather than held in
//! process-global state, so independently configured matchers can coexist.

mod stopwords;
mod vip;

pub use stopwords::StopwordSet;
pub use vip::VipWordSet;

use phenomatch_core::MatchError;
use rust_stemmers::{Algorithm, Stemmer};
use std::path::Path;

/// The full lexical resource bundle consumed by the normalizer.
pub struct Lexicon {
    stopwords: StopwordSet,
    vip: VipWordSet,
    stemmer: Stemmer,
}

impl Lexicon {
    /// Load the VIP lexicon file and assemble the English resources.
    pub fn load(vip_path: &Path) -> Result<Self, MatchError> {
        Ok(Self::with_vip(VipWordSet::load(vip_path)?))
    }

    /// Build from in-memory VIP source text.
    pub fn from_vip_source(source: &str) -> Self {
        Self::with_vip(VipWordSet::from_source(source))
    }

    fn with_vip(vip: VipWordSet) -> Self {
        Self {
            stopwords: StopwordSet::english(),
            vip,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Whether the token contains any VIP word as a substring.
    pub fn vip_match(&self, token: &str) -> bool {
        self.vip.matches(token)
    }

    /// Snowball-stem a token. The stem is uppercase when the token is fully
    /// uppercase, lowercase otherwise.
    pub fn stem(&self, token: &str) -> String {
        let stem = self.stemmer.stem(&token.to_lowercase()).into_owned();
        if is_fully_uppercase(token) {
            stem.to_uppercase()
        } else {
            stem
        }
    }

    pub fn vip_words(&self) -> &VipWordSet {
        &self.vip
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}

/// At least one alphabetic character and no lowercase ones.
fn is_fully_uppercase(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_vip_source("nose ear\nheart\n")
    }

    #[test]
    fn stem_reduces_plurals() {
        let lex = lexicon();
        assert_eq!(lex.stem("anomalies"), lex.stem("anomaly"));
        assert_eq!(lex.stem("noses"), "nose");
    }

    #[test]
    fn stem_lowercases_mixed_case_input() {
        let lex = lexicon();
        assert_eq!(lex.stem("Hearing"), "hear");
    }

    #[test]
    fn stem_preserves_fully_uppercase_tokens() {
        let lex = lexicon();
        assert_eq!(lex.stem("NOSES"), "NOSE");
        assert_eq!(lex.stem("NOSE"), "NOSE");
    }

    #[test]
    fn digit_only_tokens_are_not_uppercase() {
        assert!(!is_fully_uppercase("42"));
        assert!(!is_fully_uppercase(""));
        assert!(is_fully_uppercase("T4"));
        assert!(!is_fully_uppercase("t4"));
    }

    #[test]
    fn stopwords_and_vip_are_wired_through() {
        let lex = lexicon();
        assert!(lex.is_stopword("the"));
        assert!(lex.is_stopword("congenital"));
        assert!(!lex.is_stopword("nose"));
        assert!(lex.vip_match("nose"));
        assert!(lex.vip_match("mental"));
        assert!(!lex.vip_match("femur"));
    }
}
