#![no_std] // Critical for WASM compatibility

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod ids;
pub mod tags;

// Re-export core types for convenience
pub use ids::EventId;
pub use tags::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_enum_serialization() {
        // Test basic enum round-trip
        let original = Provenance::EnglishGloss;

        // Serialize
        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Provenance");

        // Deserialize (Simulate loading from disk)
        let deserialized: Provenance = from_bytes(&bytes).expect("Failed to deserialize Provenance");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_serialization() {
        // Test NewType ID round-trip
        let original = EventId::new(42);

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize EventId");
        let deserialized: EventId = from_bytes(&bytes).expect("Failed to deserialize EventId");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_layout() {
        // Verify Zero-Cost abstraction: EventId(u32) should be exactly 4 bytes
        assert_eq!(core::mem::size_of::<EventId>(), 4);
        assert_eq!(core::mem::size_of::<Option<EventId>>(), 8); // u32 + tag (padding)
    }

    #[test]
    fn test_entry_round_trip() {
        use alloc::string::ToString;
        use alloc::vec;

        let lexicon = Lexicon {
            version: 1,
            entries: vec![LexicalEntry {
                key: "amu".to_string(),
                gloss: "bee".to_string(),
                pos: "NA".to_string(),
                sfo: "amu".to_string(),
                pacifique: None,
                semantic_root: "amu (flying insect)".to_string(),
                morphology_notes: "Simple animate noun.".to_string(),
                reflection: "Pollinators as relations, not resources.".to_string(),
            }],
        };

        let bytes = to_bytes::<_, 256>(&lexicon).expect("Failed to serialize Lexicon");
        let deserialized: Lexicon = from_bytes(&bytes).expect("Failed to deserialize Lexicon");

        assert_eq!(deserialized.entries.len(), 1);
        assert_eq!(deserialized.entries[0].key, "amu");
        assert!(deserialized.entries[0].pacifique.is_none());
    }

    #[test]
    fn test_provenance_labels() {
        assert_eq!(Provenance::Direct.as_str(), "direct");
        assert_eq!(Provenance::Diminutive.as_str(), "diminutive");
        assert_eq!(Provenance::EnglishGloss.as_str(), "english-gloss");
    }

    #[test]
    fn test_sort_direction_param() {
        assert_eq!(SortDirection::from_param("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::from_param("DESC"), SortDirection::Descending);
        assert_eq!(SortDirection::from_param("asc"), SortDirection::Ascending);
        // Unknown values fall back to the default direction
        assert_eq!(SortDirection::from_param("sideways"), SortDirection::Ascending);
    }
}
