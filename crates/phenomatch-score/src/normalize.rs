use phenomatch_lexicon::Lexicon;

/// Connector phrases that open a qualifying clause in free-text input.
/// Query text is truncated at the earliest occurrence; ontology names keep
/// their full text.
const CLAUSE_CONNECTORS: &[&str] = &[
    " with ",
    " w/ ",
    " without ",
    " w/o ",
    " due to ",
    " following ",
];

/// Sentinels affixed to both ends of a stem so edge bigrams are
/// distinguishable from interior ones. Neither survives tokenization, so they
/// cannot collide with input text.
const BOUNDARY_START: char = '^';
const BOUNDARY_END: char = '$';

/// Whether the text being normalized is an ontology name or free-form query
/// input. Clause stripping applies only to queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Canonical,
    Query,
}

/// Turns raw text into the ordered sequence of weighted, boundary-marked
/// stems that feeds the bigram encoder.
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn normalize(&self, text: &str, kind: TermKind) -> Vec<String> {
        let lowered = text.to_lowercase();
        let clause = match kind {
            TermKind::Query => strip_clauses(&lowered),
            TermKind::Canonical => lowered.as_str(),
        };
        let spaced = clause.replace(['-', '/'], " ");

        let tokens: Vec<String> = spaced
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter(|token| !self.lexicon.is_stopword(token))
            .map(str::to_string)
            .collect();

        self.weight(tokens)
            .iter()
            .map(|token| {
                let stem = self.lexicon.stem(token);
                format!("{BOUNDARY_START}{stem}{BOUNDARY_END}")
            })
            .collect()
    }

    /// VIP weighting: every token is kept; a token containing a VIP word gets
    /// exactly one fully-uppercased duplicate appended after it, doubling its
    /// bigram weight.
    fn weight(&self, tokens: Vec<String>) -> Vec<String> {
        let mut weighted = Vec::with_capacity(tokens.len());
        for token in tokens {
            if self.lexicon.vip_match(&token) {
                let upper = token.to_uppercase();
                weighted.push(token);
                weighted.push(upper);
            } else {
                weighted.push(token);
            }
        }
        weighted
    }
}

/// Keep only the text before the earliest connector phrase.
fn strip_clauses(text: &str) -> &str {
    match CLAUSE_CONNECTORS
        .iter()
        .filter_map(|connector| text.find(connector))
        .min()
    {
        Some(cut) => &text[..cut],
        None => text,
    }
}
