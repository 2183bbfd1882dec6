use bridge_protocol::{SortDirection, TimelineEvent};

/// Wire value for the "no filter" selection on either axis.
pub const ALL: &str = "all";

/// Transient filter/sort selection, owned by the event-handling shell and
/// passed into `view` — never ambient mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// `None` means the wildcard "all".
    pub era: Option<String>,
    pub tag: Option<String>,
    pub direction: SortDirection,
}

impl FilterState {
    /// Build from the raw control values ("all" maps to the wildcard).
    pub fn from_params(era: &str, tag: &str, direction: &str) -> Self {
        Self {
            era: wildcard(era),
            tag: wildcard(tag),
            direction: SortDirection::from_param(direction),
        }
    }
}

fn wildcard(param: &str) -> Option<String> {
    if param == ALL {
        None
    } else {
        Some(param.to_string())
    }
}

/// Filtered, ordered view over the event store.
///
/// Era and tag filters are exact, case-sensitive comparisons — unlike the
/// lexicon path, no normalization is applied here. The sort is stable in
/// both directions, so events with equal sort keys keep their original
/// relative order whichever way the view is ordered. Returns a fresh view
/// each call; the store is never mutated.
pub fn view<'a>(events: &'a [TimelineEvent], filter: &FilterState) -> Vec<&'a TimelineEvent> {
    let mut selected: Vec<&TimelineEvent> = events
        .iter()
        .filter(|event| filter.era.as_deref().map_or(true, |era| event.era == era))
        .filter(|event| {
            filter
                .tag
                .as_deref()
                .map_or(true, |tag| event.tags.iter().any(|t| t == tag))
        })
        .collect();

    match filter.direction {
        SortDirection::Ascending => selected.sort_by(|a, b| a.sort_key.cmp(&b.sort_key)),
        SortDirection::Descending => selected.sort_by(|a, b| b.sort_key.cmp(&a.sort_key)),
    }

    selected
}
