use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// How the morphology analyzer classified an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Classification {
    Simple = 0,
    Diminutive = 1,
}

/// The rule that produced a lookup match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Provenance {
    Direct = 0,
    Diminutive = 1,
    EnglishGloss = 2,
}

impl Provenance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Provenance::Direct => "direct",
            Provenance::Diminutive => "diminutive",
            Provenance::EnglishGloss => "english-gloss",
        }
    }
}

/// Chronological ordering of the timeline view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum SortDirection {
    Ascending = 0,
    Descending = 1,
}

impl SortDirection {
    /// Parse the wire value sent by the selection controls.
    /// Anything other than "desc" sorts ascending, the declared default.
    pub fn from_param(param: &str) -> Self {
        if param.eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}
