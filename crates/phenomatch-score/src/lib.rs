//! Normalization, bigram encoding, and Dice similarity scoring.

mod bigram;
mod dice;
mod normalize;

pub use bigram::bigrams;
pub use dice::dice_score;
pub use normalize::{Normalizer, TermKind};

use phenomatch_core::Signature;
use phenomatch_lexicon::Lexicon;

/// Normalize and bigram-encode a piece of text into its signature.
pub fn encode(lexicon: &Lexicon, text: &str, kind: TermKind) -> Signature {
    let tokens = Normalizer::new(lexicon).normalize(text, kind);
    Signature::from_bigrams(bigrams(&tokens))
}
