pub mod parser;
pub mod seed;
pub mod token;

use bridge_morph::{analyze, normalize, MorphAnalysis};
use bridge_protocol::{Classification, LexicalEntry, Lexicon, Provenance};
use rkyv::Archived;

use crate::parser::{parse_with_spans, RawToken};
use crate::token::PhraseToken;

/// One ranked result of a lookup.
///
/// The entry payload is owned: diminutive matches synthesize a derived
/// entry rather than reusing the stored one verbatim, and the store is
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct BridgeMatch {
    pub key: String,
    pub provenance: Provenance,
    pub entry: LexicalEntry,
}

/// Output of one lookup. Absence of matches is a valid result, not an
/// error; an empty query yields no analysis at all.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub matches: Vec<BridgeMatch>,
    pub analysis: Option<MorphAnalysis>,
}

impl LookupResult {
    fn empty() -> Self {
        Self {
            matches: Vec::new(),
            analysis: None,
        }
    }
}

pub struct BridgeLookup<'a> {
    lexicon: &'a Archived<Lexicon>,
}

impl<'a> BridgeLookup<'a> {
    pub fn new(lexicon: &'a Archived<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Primary entry point: ranked matches for one query.
    ///
    /// Priority order is fixed: direct key match first (at most one), then
    /// a diminutive-base match (at most one), then gloss-substring matches
    /// in lexicon iteration order. Matches are deduplicated by key, first
    /// occurrence wins.
    pub fn lookup(&self, raw_query: &str) -> LookupResult {
        let query = normalize(raw_query);
        if query.is_empty() {
            return LookupResult::empty();
        }

        let analysis = analyze(&query);
        let mut matches: Vec<BridgeMatch> = Vec::new();

        // 1. Direct key match
        if let Some(found) = self.find_entry(&query) {
            matches.push(BridgeMatch {
                key: query.clone(),
                provenance: Provenance::Direct,
                entry: to_owned_entry(found),
            });
        }

        // 2. Diminutive-base match: synthesize a derived entry
        if analysis.classification == Classification::Diminutive
            && !matches.iter().any(|m| m.key == query)
        {
            if let Some(base) = self.find_entry(&analysis.base) {
                let mut derived = to_owned_entry(base);
                let base_gloss = derived.gloss.clone();
                derived.gloss = format!("little {} (child of {})", base_gloss, base_gloss);
                if !derived.morphology_notes.is_empty() {
                    derived.morphology_notes.push(' ');
                }
                derived.morphology_notes.push_str(&format!(
                    "Diminutive of '{}' recognized automatically from the ji'j suffix.",
                    derived.key
                ));
                derived.key = query.clone();

                matches.push(BridgeMatch {
                    key: query.clone(),
                    provenance: Provenance::Diminutive,
                    entry: derived,
                });
            }
        }

        // 3. Gloss-substring scan, in lexicon order, deduplicated by key
        for archived in self.lexicon.entries.iter() {
            if archived.gloss.as_str().to_lowercase().contains(query.as_str()) {
                let key = archived.key.as_str();
                if matches.iter().any(|m| m.key == key) {
                    continue;
                }
                matches.push(BridgeMatch {
                    key: key.to_string(),
                    provenance: Provenance::EnglishGloss,
                    entry: to_owned_entry(archived),
                });
            }
        }

        LookupResult {
            matches,
            analysis: Some(analysis),
        }
    }

    /// Word-by-word lookup over a whole phrase, punctuation dropped.
    pub fn lookup_phrase(&self, raw: &str) -> Vec<PhraseToken> {
        parse_with_spans(raw)
            .into_iter()
            .filter_map(|(span, raw_token)| match raw_token {
                RawToken::Word(text) => Some(PhraseToken {
                    span,
                    text: text.to_string(),
                    result: self.lookup(text),
                }),
                RawToken::Punct(_) => None,
            })
            .collect()
    }

    /// Linear scan lookup (O(N)) — the lexicon is small and fully
    /// materialized, so no index is warranted.
    fn find_entry(&self, key: &str) -> Option<&Archived<LexicalEntry>> {
        self.lexicon
            .entries
            .iter()
            .find(|entry| entry.key.as_str() == key)
    }
}

fn to_owned_entry(archived: &Archived<LexicalEntry>) -> LexicalEntry {
    LexicalEntry {
        key: archived.key.as_str().to_string(),
        gloss: archived.gloss.as_str().to_string(),
        pos: archived.pos.as_str().to_string(),
        sfo: archived.sfo.as_str().to_string(),
        pacifique: archived.pacifique.as_ref().map(|s| s.as_str().to_string()),
        semantic_root: archived.semantic_root.as_str().to_string(),
        morphology_notes: archived.morphology_notes.as_str().to_string(),
        reflection: archived.reflection.as_str().to_string(),
    }
}
