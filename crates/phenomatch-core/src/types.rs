use serde::Serialize;
use std::collections::HashMap;

/// Length of the id prefix that identifies a true ontology concept. Alias ids
/// from the extended source may carry longer synthetic codes; only the first
/// `CANONICAL_ID_LEN` characters are keys into the canonical table.
pub const CANONICAL_ID_LEN: usize = 7;

/// Default ranking threshold. Candidates must score strictly above this.
pub const MATCH_THRESHOLD: f64 = 30.0;

/// Truncate an alias id to the fixed-length prefix used for canonical lookup.
pub fn canonical_prefix(id: &str) -> &str {
    match id.char_indices().nth(CANONICAL_ID_LEN) {
        Some((byte, _)) => &id[..byte],
        None => id,
    }
}

/// Bigram multiset for one normalized term.
///
/// Stored as a counting map plus the total fingerprint count, so multiset
/// intersection runs in time linear in the number of distinct fingerprints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    counts: HashMap<String, u32>,
    len: u32,
}

impl Signature {
    /// Collapse an ordered fingerprint sequence into its counting form.
    pub fn from_bigrams<I>(bigrams: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut len = 0u32;
        for bigram in bigrams {
            debug_assert_eq!(bigram.chars().count(), 2);
            *counts.entry(bigram).or_default() += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Total number of fingerprints, duplicates included.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct fingerprints.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of one fingerprint.
    pub fn count(&self, bigram: &str) -> u32 {
        self.counts.get(bigram).copied().unwrap_or(0)
    }

    /// Multiset intersection size: the sum over distinct fingerprints of the
    /// smaller of the two counts.
    pub fn shared(&self, other: &Self) -> u32 {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(bigram, &count)| count.min(large.count(bigram)))
            .sum()
    }
}

/// One name from the extended ontology source: the namespace and id parsed
/// from its first record line, and the signature precomputed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub namespace: String,
    pub id: String,
    pub signature: Signature,
}

/// A ranked candidate returned for a query string.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// Canonical display name of the matched concept.
    pub descriptor: String,
    /// Fully qualified concept code, e.g. `HP:0000001`.
    pub code: String,
    /// Similarity in (threshold, 100].
    pub score: f64,
}
