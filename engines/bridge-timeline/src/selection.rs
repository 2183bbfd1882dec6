use bridge_protocol::{EventId, TimelineEvent};

/// Active-event policy, applied after every re-filter or card selection.
///
/// Selection persistence is deliberate: a previously chosen event stays
/// active even when the current view no longer contains it (the detail
/// pane keeps showing it, no card is highlighted). Only an empty view
/// resets the selection.
pub fn advance_selection(
    view: &[&TimelineEvent],
    previous: Option<EventId>,
) -> Option<EventId> {
    if view.is_empty() {
        return None;
    }
    match previous {
        Some(id) => Some(id),
        None => Some(view[0].id),
    }
}

/// Highlighting is derived separately from the selection itself: a card is
/// visually active iff it carries the active id AND sits in the current view.
pub fn is_active_in_view(id: EventId, active: Option<EventId>, view: &[&TimelineEvent]) -> bool {
    active == Some(id) && view.iter().any(|event| event.id == id)
}
