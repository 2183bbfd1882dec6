use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::EventId;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One word/concept in the teaching lexicon.
///
/// `key` is the primary identifier and is always stored in normalized form
/// (trimmed, lowercased). Entries are immutable after load.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexicalEntry {
    pub key: String,
    /// Core English gloss, e.g. "bee" or "I love you".
    pub gloss: String,
    /// Part-of-speech tag ("VAI", "NA", "expression", ...).
    pub pos: String,
    /// Smith-Francis orthography spelling.
    pub sfo: String,
    /// Pacifique orthography spelling, where the sources record one.
    pub pacifique: Option<String>,
    /// Semantic root description.
    pub semantic_root: String,
    pub morphology_notes: String,
    /// Cross-cultural reflection shown alongside the entry.
    pub reflection: String,
}

/// The full lexicon: an explicitly ordered sequence of entries.
///
/// Order matters — gloss-substring matches are emitted in this order, so the
/// canonical representation is a `Vec`, never an unordered map.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexicalEntry>,
}

/// A person associated with a timeline event.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Person {
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
}

/// One historical occurrence on the timeline. Immutable after load.
///
/// `sort_key` gives a total chronological order independent of the
/// human-readable `display_date`.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TimelineEvent {
    pub id: EventId,
    pub title: String,
    pub display_date: String,
    pub sort_key: i64,
    pub era: String,
    /// Type label ("governance", "treaty", "law", ...).
    pub kind: String,
    pub tags: Vec<String>,
    /// Western-lens narrative, where recorded.
    pub western_lens: Option<String>,
    /// L'nuk-lens narrative, where recorded.
    pub lnuk_lens: Option<String>,
    /// Synthesis reflection bridging the two lenses.
    pub synthesis: Option<String>,
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Timeline {
    pub version: u32,
    pub events: Vec<TimelineEvent>,
}

#[cfg(feature = "std")]
mod validate {
    use super::*;
    use std::collections::BTreeSet;
    use thiserror::Error;

    /// Violations of the corpus invariants, caught at compile/authoring time.
    #[derive(Debug, Error)]
    pub enum CorpusError {
        #[error("lexicon key '{0}' is not in normalized (trimmed, lowercased) form")]
        UnnormalizedKey(String),
        #[error("duplicate lexicon key '{0}'")]
        DuplicateKey(String),
        #[error("duplicate timeline event id {0}")]
        DuplicateEventId(u32),
    }

    impl Lexicon {
        /// Check the key invariants: every key normalized, no duplicates.
        pub fn validate(&self) -> Result<(), CorpusError> {
            let mut seen = BTreeSet::new();
            for entry in &self.entries {
                if entry.key != entry.key.trim().to_lowercase() {
                    return Err(CorpusError::UnnormalizedKey(entry.key.clone()));
                }
                if !seen.insert(entry.key.as_str()) {
                    return Err(CorpusError::DuplicateKey(entry.key.clone()));
                }
            }
            Ok(())
        }
    }

    impl Timeline {
        /// Check that event ids are unique across the set.
        pub fn validate(&self) -> Result<(), CorpusError> {
            let mut seen = BTreeSet::new();
            for event in &self.events {
                if !seen.insert(event.id.0) {
                    return Err(CorpusError::DuplicateEventId(event.id.0));
                }
            }
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
pub use validate::CorpusError;
