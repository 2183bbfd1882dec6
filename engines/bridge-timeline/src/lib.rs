pub mod facets;
pub mod seed;
pub mod selection;
pub mod view;

pub use facets::Facets;
pub use selection::{advance_selection, is_active_in_view};
pub use view::{view, FilterState, ALL};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_timeline;
    use bridge_protocol::{EventId, SortDirection, TimelineEvent};

    fn two_equal_key_events() -> Vec<TimelineEvent> {
        let mut events = Vec::new();
        for (id, title) in [(1, "A"), (2, "B")] {
            events.push(TimelineEvent {
                id: EventId::new(id),
                title: title.to_string(),
                display_date: "1761".to_string(),
                sort_key: 1761,
                era: "Treaty Era".to_string(),
                kind: "treaty".to_string(),
                tags: vec!["treaty".to_string()],
                western_lens: None,
                lnuk_lens: None,
                synthesis: None,
                people: vec![],
            });
        }
        events
    }

    #[test]
    fn unfiltered_ascending_view_is_the_full_set_in_order() {
        let timeline = seed_timeline();
        let filter = FilterState::from_params("all", "all", "asc");
        let result = view(&timeline.events, &filter);

        assert_eq!(result.len(), timeline.events.len());
        for pair in result.windows(2) {
            assert!(pair[0].sort_key <= pair[1].sort_key);
        }
    }

    #[test]
    fn filters_are_exact_conjunctive_predicates() {
        let timeline = seed_timeline();
        let filter = FilterState::from_params("Treaty Era", "ceremony", "asc");
        let result = view(&timeline.events, &filter);

        assert!(!result.is_empty());
        for event in &result {
            assert_eq!(event.era, "Treaty Era");
            assert!(event.tags.iter().any(|t| t == "ceremony"));
        }

        // Era comparison is case-sensitive: no normalization on this path.
        let lowercased = FilterState::from_params("treaty era", "all", "asc");
        assert!(view(&timeline.events, &lowercased).is_empty());
    }

    #[test]
    fn descending_view_reverses_distinct_keys() {
        let timeline = seed_timeline();
        let filter = FilterState::from_params("all", "all", "desc");
        let result = view(&timeline.events, &filter);

        for pair in result.windows(2) {
            assert!(pair[0].sort_key >= pair[1].sort_key);
        }
    }

    #[test]
    fn equal_keys_keep_source_order_in_both_directions() {
        let events = two_equal_key_events();

        let asc = view(&events, &FilterState::from_params("all", "all", "asc"));
        let desc = view(&events, &FilterState::from_params("all", "all", "desc"));

        // Stability is orientation-independent: [A, B] both ways.
        assert_eq!(asc.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(desc.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn empty_view_is_a_valid_result() {
        let timeline = seed_timeline();
        let filter = FilterState::from_params("Pre-Contact", "fishery", "asc");
        assert!(view(&timeline.events, &filter).is_empty());
    }

    #[test]
    fn first_event_becomes_active_when_nothing_is_selected() {
        let timeline = seed_timeline();
        let current = view(&timeline.events, &FilterState::default());

        let active = advance_selection(&current, None);
        assert_eq!(active, Some(current[0].id));
        assert!(is_active_in_view(current[0].id, active, &current));
    }

    #[test]
    fn selection_survives_an_excluding_filter() {
        let timeline = seed_timeline();

        // Select Marshall (Modern Era), then filter down to the Treaty Era.
        let marshall = EventId::new(10);
        let treaty_view = view(
            &timeline.events,
            &FilterState::from_params("Treaty Era", "all", "asc"),
        );
        assert!(!treaty_view.is_empty());

        let active = advance_selection(&treaty_view, Some(marshall));
        assert_eq!(active, Some(marshall));
        // No card is highlighted, but the selection is not cleared.
        assert!(!is_active_in_view(marshall, active, &treaty_view));

        // An empty view is the only thing that resets the selection.
        let empty_view = view(
            &timeline.events,
            &FilterState::from_params("Treaty Era", "fishery", "asc"),
        );
        assert!(empty_view.is_empty());
        assert_eq!(advance_selection(&empty_view, active), None);
    }

    #[test]
    fn view_does_not_mutate_the_store() {
        let timeline = seed_timeline();
        let before: Vec<u32> = timeline.events.iter().map(|e| e.id.0).collect();

        let _ = view(&timeline.events, &FilterState::from_params("all", "all", "desc"));

        let after: Vec<u32> = timeline.events.iter().map(|e| e.id.0).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn facets_are_distinct_and_lexicographic() {
        let timeline = seed_timeline();
        let facets = Facets::from_events(&timeline.events);

        for list in [&facets.eras, &facets.kinds, &facets.tags] {
            for pair in list.windows(2) {
                assert!(pair[0] < pair[1], "sorted and deduplicated: {:?}", list);
            }
        }
        assert!(facets.eras.contains(&"Treaty Era".to_string()));
        assert!(facets.tags.contains(&"fishery".to_string()));
        assert!(facets.kinds.contains(&"governance".to_string()));
    }
}
