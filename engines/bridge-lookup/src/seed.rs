//! The built-in teaching lexicon.
//!
//! A deliberately small, fixed entry set: the structure stays stable while
//! the knowledge grows. Keys are stored in normalized form and the `Vec`
//! order is the canonical iteration order for gloss-substring matching.

use bridge_protocol::{LexicalEntry, Lexicon};

#[allow(clippy::too_many_arguments)]
fn entry(
    key: &str,
    gloss: &str,
    pos: &str,
    sfo: &str,
    pacifique: Option<&str>,
    semantic_root: &str,
    morphology_notes: &str,
    reflection: &str,
) -> LexicalEntry {
    LexicalEntry {
        key: key.to_string(),
        gloss: gloss.to_string(),
        pos: pos.to_string(),
        sfo: sfo.to_string(),
        pacifique: pacifique.map(str::to_string),
        semantic_root: semantic_root.to_string(),
        morphology_notes: morphology_notes.to_string(),
        reflection: reflection.to_string(),
    }
}

pub fn seed_lexicon() -> Lexicon {
    Lexicon {
        version: 1,
        entries: vec![
            entry(
                "kwe'",
                "hello",
                "interjection",
                "Kwe'",
                None,
                "kwe' (greeting)",
                "Single-morpheme greeting; often the first word children learn.",
                "Opening with a greeting sets a tone of respect and relationship.",
            ),
            entry(
                "teluisi",
                "my name is ...",
                "VAI-1sg",
                "Teluisi",
                None,
                "telui- (to be called, to be named)",
                "telu- root with the -isi first-person stative ending.",
                "Introductions carry place and kin, not just a personal name.",
            ),
            entry(
                "kesalul",
                "I love you",
                "VTA-1sg>2",
                "Kesalul",
                None,
                "sal (love, be precious)",
                "ke- marks the second person, sal is the root, -ul marks first person acting on you.",
                "Tiny shifts in glottal stop position change the meaning entirely.",
            ),
            entry(
                "msit no'kmaq",
                "all my relations",
                "expression",
                "Msit No'kmaq",
                None,
                "msit (all) + no'kmaq (my kin)",
                "Quantifier plus relational noun; ceremonial register.",
                "Names the full web of kin: people, animals, plants, waters, ancestors.",
            ),
            entry(
                "wela'lin",
                "thank you",
                "expression",
                "Wela'lin",
                None,
                "wel- (good, well)",
                "wel root with the a'lin 'to be thus' ending.",
                "Often deeper than thanks: it names the good state you are brought into.",
            ),
            entry(
                "netukulimk",
                "living by netukulimk: taking only what is needed while caring for the land",
                "noun-abstract",
                "Netukulimk",
                None,
                "netukulimk",
                "Opaque single stem; treated as an unanalyzable cultural keyword.",
                "The law of balance between harvest and responsibility.",
            ),
            entry(
                "kataq",
                "american eel",
                "NA",
                "Kataq",
                None,
                "kataq (eel)",
                "Animate noun; animate plural kataqk.",
                "The eel is a teacher and relative in the stories, not only food.",
            ),
            entry(
                "tekek",
                "it is cold",
                "VII",
                "Tekek",
                None,
                "tekek (cold, inanimate state)",
                "Inanimate intransitive verb of state.",
                "States are verbs here: the land is doing cold, not being cold.",
            ),
            entry(
                "nme'j",
                "fish",
                "NA",
                "Nme'j",
                None,
                "nme' (fish)",
                "Animate noun; -jik marks the animate plural (nme'jik).",
                "Fish are counted among the animate relations, like people.",
            ),
            entry(
                "epsi",
                "I am warm; I am passionate",
                "VAI-1sg",
                "Epsi",
                Some("\u{ea}psi"),
                "eps- (warmth)",
                "First-person stative; physical and emotional warmth share one stem.",
                "Warmth of body and warmth of spirit are the same word.",
            ),
            entry(
                "welo'tasi",
                "it is well taken care of; in a good state",
                "VII",
                "Welo'tasi",
                None,
                "welo't (good, well kept)",
                "welo't root with the tasi 'in state of' ending.",
                "Implies an ongoing good relationship, not a one-time fix.",
            ),
            entry(
                "amu",
                "bee",
                "NA",
                "Amu",
                Some("amou"),
                "amu (flying insect)",
                "Simple animate noun.",
                "Pollinators as relations whose work feeds everyone downstream.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_passes_corpus_validation() {
        seed_lexicon().validate().expect("seed lexicon must be valid");
    }

    #[test]
    fn seed_keys_are_normalized() {
        for e in seed_lexicon().entries {
            assert_eq!(e.key, bridge_morph::normalize(&e.key));
        }
    }
}
