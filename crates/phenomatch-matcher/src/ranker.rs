use phenomatch_core::{canonical_prefix, MatchResult, Signature};
use phenomatch_index::OntologyIndex;
use phenomatch_score::dice_score;
use rayon::prelude::*;

/// Score a query signature against every cached alias signature, keep
/// candidates strictly above `threshold`, resolve canonical names, and sort
/// descending by score.
///
/// Per-alias scores are independent, so the loop runs on the rayon pool.
/// Collection preserves index order and the final sort is stable, so the
/// parallel run returns exactly the sequential ordering.
pub fn rank(query: &Signature, index: &OntologyIndex, threshold: f64) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = index
        .aliases()
        .par_iter()
        .filter_map(|alias| {
            let score = dice_score(query, &alias.signature);
            if score <= threshold {
                return None;
            }
            let prefix = canonical_prefix(&alias.id);
            match index.canonical_name(prefix) {
                Some(descriptor) => Some(MatchResult {
                    descriptor: descriptor.to_string(),
                    code: format!("{}:{prefix}", alias.namespace),
                    score,
                }),
                None => {
                    // Alias points at a concept the canonical source does not
                    // know: skip the candidate instead of failing the query.
                    tracing::warn!(
                        alias = %alias.name,
                        id = %alias.id,
                        "alias id prefix missing from canonical table"
                    );
                    None
                }
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results
}
