//! Ontology index: alias entries with precomputed signatures plus the
//! canonical id-to-name table. Built once, read-only afterwards.

mod record;

pub use record::{parse_records, Record};

use phenomatch_core::{AliasEntry, MatchError};
use phenomatch_lexicon::Lexicon;
use phenomatch_score::{encode, TermKind};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub struct OntologyIndex {
    aliases: Vec<AliasEntry>,
    canonical: HashMap<String, String>,
}

impl OntologyIndex {
    /// Read both ontology sources and build the index. Any unreadable file or
    /// malformed record fails the build; no partial index is produced.
    pub fn build(
        extended_path: &Path,
        canonical_path: &Path,
        lexicon: &Lexicon,
    ) -> Result<Self, MatchError> {
        let extended = read_source(extended_path)?;
        let canonical = read_source(canonical_path)?;
        Self::from_sources(&extended, &canonical, lexicon)
    }

    /// Build from in-memory source text.
    pub fn from_sources(
        extended: &str,
        canonical: &str,
        lexicon: &Lexicon,
    ) -> Result<Self, MatchError> {
        let mut aliases: Vec<AliasEntry> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for record in record::parse_records(extended)? {
            let signature = encode(lexicon, &record.name, TermKind::Canonical);
            let entry = AliasEntry {
                name: record.name,
                namespace: record.namespace,
                id: record.id,
                signature,
            };
            match by_name.get(&entry.name) {
                // Duplicate alias names: the later record wins, in place.
                Some(&pos) => aliases[pos] = entry,
                None => {
                    by_name.insert(entry.name.clone(), aliases.len());
                    aliases.push(entry);
                }
            }
        }

        let mut canonical_table = HashMap::new();
        for record in record::parse_records(canonical)? {
            canonical_table.insert(record.id, record.name);
        }

        tracing::info!(
            aliases = aliases.len(),
            concepts = canonical_table.len(),
            "ontology index built"
        );

        Ok(Self {
            aliases,
            canonical: canonical_table,
        })
    }

    /// All alias entries in load order.
    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    /// Canonical display name for a fixed-length id prefix.
    pub fn canonical_name(&self, id_prefix: &str) -> Option<&str> {
        self.canonical.get(id_prefix).map(String::as_str)
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn concept_count(&self) -> usize {
        self.canonical.len()
    }
}

fn read_source(path: &Path) -> Result<String, MatchError> {
    fs::read_to_string(path).map_err(|err| MatchError::Io(format!("{}: {err}", path.display())))
}
