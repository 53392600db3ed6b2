use phenomatch_core::MatchError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// VIP words carried in addition to the lexicon file.
const SUPPLEMENTARY_VIP_WORDS: &[&str] = &["mental"];

/// Words flagged as diagnostically significant. A token containing any of
/// them as a substring receives double weight during normalization.
#[derive(Debug, Clone)]
pub struct VipWordSet {
    words: HashSet<String>,
}

impl VipWordSet {
    /// Load VIP words from a lexicon file: whitespace-separated tokens per
    /// line, lowercased. Empty tokens are discarded.
    pub fn load(path: &Path) -> Result<Self, MatchError> {
        let source = fs::read_to_string(path)
            .map_err(|err| MatchError::Lexicon(format!("{}: {err}", path.display())))?;
        Ok(Self::from_source(&source))
    }

    pub fn from_source(source: &str) -> Self {
        let mut words: HashSet<String> = source
            .lines()
            .flat_map(str::split_whitespace)
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();
        words.extend(SUPPLEMENTARY_VIP_WORDS.iter().map(|w| w.to_string()));
        Self { words }
    }

    /// Whether any VIP word occurs as a substring of `token`.
    pub fn matches(&self, token: &str) -> bool {
        self.words.iter().any(|word| token.contains(word.as_str()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
