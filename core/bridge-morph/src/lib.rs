#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

use alloc::string::String;

use bridge_protocol::Classification;

/// Recognized diminutive suffixes, one entry per apostrophe variant
/// (straight U+0027 and typographic U+2019). Further suffixes are a data
/// addition here, not a code change.
const DIMINUTIVE_SUFFIXES: &[&str] = &["ji'j", "ji\u{2019}j"];

/// Normalized form used for all matching and for lexicon keys:
/// surrounding whitespace trimmed, lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Transient result of analyzing one input string.
///
/// Invariant: if `classification` is `Diminutive`, `base` is a strict
/// non-empty prefix of `normalized` obtained by stripping the suffix;
/// if `Simple`, `base` equals `normalized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphAnalysis {
    pub classification: Classification,
    pub base: String,
    pub normalized: String,
}

/// Classify a raw input as simple or diminutive and extract its base form.
/// Pure and deterministic; no side effects.
pub fn analyze(raw: &str) -> MorphAnalysis {
    let normalized = normalize(raw);

    for suffix in DIMINUTIVE_SUFFIXES {
        if let Some(prefix) = normalized.strip_suffix(suffix) {
            // A bare suffix with no base is not a diminutive of anything.
            if !prefix.is_empty() {
                return MorphAnalysis {
                    classification: Classification::Diminutive,
                    base: String::from(prefix),
                    normalized,
                };
            }
        }
    }

    MorphAnalysis {
        classification: Classification::Simple,
        base: normalized.clone(),
        normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use proptest::prelude::*;

    #[test]
    fn recognizes_diminutive() {
        let analysis = analyze("amuji'j");
        assert_eq!(analysis.classification, Classification::Diminutive);
        assert_eq!(analysis.base, "amu");
        assert_eq!(analysis.normalized, "amuji'j");
    }

    #[test]
    fn recognizes_typographic_apostrophe() {
        let analysis = analyze("amuji\u{2019}j");
        assert_eq!(analysis.classification, Classification::Diminutive);
        assert_eq!(analysis.base, "amu");
    }

    #[test]
    fn bare_suffix_is_simple() {
        // Empty-prefix boundary: "ji'j" alone must NOT classify as diminutive.
        let analysis = analyze("ji'j");
        assert_eq!(analysis.classification, Classification::Simple);
        assert_eq!(analysis.base, "ji'j");
    }

    #[test]
    fn empty_input_is_simple() {
        let analysis = analyze("");
        assert_eq!(analysis.classification, Classification::Simple);
        assert_eq!(analysis.base, "");
        assert_eq!(analysis.normalized, "");
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let analysis = analyze("  Kwe'  ");
        assert_eq!(analysis.classification, Classification::Simple);
        assert_eq!(analysis.normalized, "kwe'");
        assert_eq!(analysis.base, analysis.normalized);
    }

    proptest! {
        #[test]
        fn any_base_plus_suffix_is_diminutive(base in "[a-z']{1,12}") {
            let word = format!("{}ji'j", base);
            let analysis = analyze(&word);

            prop_assert_eq!(analysis.classification, Classification::Diminutive);
            prop_assert_eq!(analysis.base.as_str(), base.as_str());
            prop_assert!(analysis.normalized.starts_with(analysis.base.as_str()));
        }

        #[test]
        fn simple_base_always_equals_normalized(word in "[a-z]{0,12}") {
            let analysis = analyze(&word);

            // No suffix present, so classification must be Simple with
            // base == normalized.
            prop_assert_eq!(analysis.classification, Classification::Simple);
            prop_assert_eq!(analysis.base, analysis.normalized);
        }
    }
}
