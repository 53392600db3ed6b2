//! Matcher facade: owns the lexical resources and the ontology index, and
//! answers free-text queries with ranked ontology matches.

mod ranker;

pub use ranker::rank;

use phenomatch_core::{MatchError, MatchResult, MATCH_THRESHOLD};
use phenomatch_index::OntologyIndex;
use phenomatch_lexicon::Lexicon;
use phenomatch_score::{encode, TermKind};
use std::path::Path;

pub struct Matcher {
    lexicon: Lexicon,
    index: OntologyIndex,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}

impl Matcher {
    /// Load every resource and build the index. Any unreadable file or
    /// malformed record fails construction; no partial matcher exists.
    pub fn new(
        extended_path: &Path,
        canonical_path: &Path,
        lexicon_path: &Path,
    ) -> Result<Self, MatchError> {
        let lexicon = Lexicon::load(lexicon_path)?;
        let index = OntologyIndex::build(extended_path, canonical_path, &lexicon)?;
        Ok(Self { lexicon, index })
    }

    /// Build from in-memory sources.
    pub fn from_sources(
        extended: &str,
        canonical: &str,
        vip_source: &str,
    ) -> Result<Self, MatchError> {
        let lexicon = Lexicon::from_vip_source(vip_source);
        let index = OntologyIndex::from_sources(extended, canonical, &lexicon)?;
        Ok(Self { lexicon, index })
    }

    /// Ranked matches scoring strictly above the default threshold.
    pub fn get_matches(&self, text: &str) -> Vec<MatchResult> {
        self.get_matches_with_threshold(text, MATCH_THRESHOLD)
    }

    pub fn get_matches_with_threshold(&self, text: &str, threshold: f64) -> Vec<MatchResult> {
        let query = encode(&self.lexicon, text, TermKind::Query);
        tracing::debug!(fingerprints = query.len(), threshold, "query encoded");
        ranker::rank(&query, &self.index, threshold)
    }

    pub fn index(&self) -> &OntologyIndex {
        &self.index
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
