use bridge_protocol::TimelineEvent;
use std::collections::BTreeSet;

/// The distinct values actually present in the loaded event set, used to
/// populate the three filter controls. Computed once at startup; each list
/// is deduplicated and sorted lexicographically for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    pub eras: Vec<String>,
    pub kinds: Vec<String>,
    pub tags: Vec<String>,
}

impl Facets {
    pub fn from_events(events: &[TimelineEvent]) -> Self {
        let mut eras = BTreeSet::new();
        let mut kinds = BTreeSet::new();
        let mut tags = BTreeSet::new();

        for event in events {
            eras.insert(event.era.clone());
            kinds.insert(event.kind.clone());
            for tag in &event.tags {
                tags.insert(tag.clone());
            }
        }

        Self {
            eras: eras.into_iter().collect(),
            kinds: kinds.into_iter().collect(),
            tags: tags.into_iter().collect(),
        }
    }
}
