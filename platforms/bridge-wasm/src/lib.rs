use wasm_bindgen::prelude::*;

use bridge_lookup::{BridgeLookup, LookupResult};
use bridge_protocol::{Classification, EventId, Lexicon, Timeline, TimelineEvent};
use bridge_timeline::{advance_selection, is_active_in_view, view, Facets, FilterState, ALL};
use rkyv::Deserialize as RkyvDeserialize;
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Placeholder shown for an absent orthography.
const ABSENT_SPELLING: &str = "\u{2014}";

/// Fixed informational messages for the two non-error empty states.
const EMPTY_QUERY_MESSAGE: &str = "Type a Mi'kmaw or English word to look it up.";
const NO_MATCH_MESSAGE: &str =
    "No entry found. A good word to bring to a fluent speaker or elder.";
const NO_EVENTS_MESSAGE: &str = "No events match the current filters.";

/// Explanatory note appended once after all match blocks whenever the query
/// triggered diminutive analysis, however many matches were found.
const DIMINUTIVE_NOTE: &str =
    "The ending ji'j marks a diminutive: a small or young form of the base word.";

// ---------------------------------------------------------------------------
// Structured responses sent back to the JavaScript shell
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct MatchBlock {
    pub heading: String,
    pub caption: String,
    pub key: String,
    pub sfo: String,
    pub pacifique: String,
    pub pos: String,
    pub semantic_root: String,
    pub morphology_notes: String,
    pub reflection: String,
}

#[derive(Serialize)]
pub struct LookupReport {
    pub query: String,
    pub matches: Vec<MatchBlock>,
    pub diminutive_note: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct PhraseWordReport {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub report: LookupReport,
}

#[derive(Serialize)]
pub struct CardBlock {
    pub id: u32,
    pub title: String,
    pub display_date: String,
    pub era: String,
    pub kind: String,
    pub tags: Vec<String>,
    pub active: bool,
}

#[derive(Serialize)]
pub struct PersonBlock {
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
}

#[derive(Serialize)]
pub struct DetailBlock {
    pub title: String,
    /// Composite date/era/type line shown under the title.
    pub date_line: String,
    pub western_lens: Option<String>,
    pub lnuk_lens: Option<String>,
    pub synthesis: Option<String>,
    pub people: Vec<PersonBlock>,
}

#[derive(Serialize)]
pub struct TimelineReport {
    pub cards: Vec<CardBlock>,
    pub active_id: Option<u32>,
    pub detail: Option<DetailBlock>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct FacetsReport {
    pub eras: Vec<String>,
    pub kinds: Vec<String>,
    pub tags: Vec<String>,
    pub default_era: String,
    pub default_tag: String,
    pub default_direction: String,
}

// ---------------------------------------------------------------------------
// The Engine Instance running in the Browser
// ---------------------------------------------------------------------------

#[wasm_bindgen]
pub struct BridgeEngine {
    // Raw binary of the compiled lexicon (loaded via fetch() in JS),
    // re-copied into an aligned buffer for zero-copy access.
    lexicon_bytes: rkyv::AlignedVec,
    events: Vec<TimelineEvent>,
    facets: Facets,
}

#[wasm_bindgen]
impl BridgeEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(lexicon_bytes: Vec<u8>, timeline_bytes: Vec<u8>) -> Self {
        // In a production app, we would validate both archives here using
        // rkyv::check_archived_root before trusting the bytes.
        let mut aligned_lexicon = rkyv::AlignedVec::new();
        aligned_lexicon.extend_from_slice(&lexicon_bytes);

        let mut aligned_timeline = rkyv::AlignedVec::new();
        aligned_timeline.extend_from_slice(&timeline_bytes);

        let archived = unsafe { rkyv::archived_root::<Timeline>(&aligned_timeline) };
        let timeline: Timeline = archived.deserialize(&mut rkyv::Infallible).unwrap();

        let facets = Facets::from_events(&timeline.events);

        Self {
            lexicon_bytes: aligned_lexicon,
            events: timeline.events,
            facets,
        }
    }

    /// Bridge lookup: query -> ranked match blocks plus display messages.
    pub fn lookup(&self, query: &str) -> JsValue {
        let report = self.build_lookup_report(query);
        serde_wasm_bindgen::to_value(&report).unwrap()
    }

    /// Word-by-word lookup over a whole phrase.
    pub fn lookup_phrase(&self, input: &str) -> JsValue {
        let lexicon = unsafe { rkyv::archived_root::<Lexicon>(&self.lexicon_bytes) };
        let engine = BridgeLookup::new(lexicon);

        let words: Vec<PhraseWordReport> = engine
            .lookup_phrase(input)
            .into_iter()
            .map(|token| PhraseWordReport {
                start: token.span.start,
                end: token.span.end,
                report: build_report(&token.text, token.result),
                text: token.text,
            })
            .collect();

        serde_wasm_bindgen::to_value(&words).unwrap()
    }

    /// Timeline view: filter/sort selection (+ previous active id) ->
    /// cards, updated active id, and the detail pane content.
    ///
    /// The JS shell owns the selection state: it passes the previous value
    /// in and stores the `active_id` this returns.
    pub fn timeline_view(
        &self,
        era: &str,
        tag: &str,
        direction: &str,
        active_id: Option<u32>,
    ) -> JsValue {
        let filter = FilterState::from_params(era, tag, direction);
        let current = view(&self.events, &filter);

        let previous = active_id.map(EventId::new);
        let active = advance_selection(&current, previous);

        let cards: Vec<CardBlock> = current
            .iter()
            .map(|event| CardBlock {
                id: event.id.0,
                title: event.title.clone(),
                display_date: event.display_date.clone(),
                era: event.era.clone(),
                kind: event.kind.clone(),
                tags: event.tags.clone(),
                active: is_active_in_view(event.id, active, &current),
            })
            .collect();

        let (detail, message) = if current.is_empty() {
            (None, Some(NO_EVENTS_MESSAGE.to_string()))
        } else {
            // The detail pane reflects the active event even when the
            // current view no longer contains it.
            let shown = active
                .and_then(|id| self.events.iter().find(|e| e.id == id))
                .or(current.first().copied());
            (shown.map(detail_block), None)
        };

        let report = TimelineReport {
            cards,
            active_id: active.map(|id| id.0),
            detail,
            message,
        };

        serde_wasm_bindgen::to_value(&report).unwrap()
    }

    /// Values for the three filter controls, with their default selections.
    pub fn facets(&self) -> JsValue {
        let report = FacetsReport {
            eras: self.facets.eras.clone(),
            kinds: self.facets.kinds.clone(),
            tags: self.facets.tags.clone(),
            default_era: ALL.to_string(),
            default_tag: ALL.to_string(),
            default_direction: bridge_protocol::SortDirection::Ascending.as_str().to_string(),
        };
        serde_wasm_bindgen::to_value(&report).unwrap()
    }

    fn build_lookup_report(&self, query: &str) -> LookupReport {
        let lexicon = unsafe { rkyv::archived_root::<Lexicon>(&self.lexicon_bytes) };
        let engine = BridgeLookup::new(lexicon);
        build_report(query, engine.lookup(query))
    }
}

fn build_report(query: &str, result: LookupResult) -> LookupReport {
    let diminutive = matches!(
        result.analysis.as_ref().map(|a| a.classification),
        Some(Classification::Diminutive)
    );

    let matches: Vec<MatchBlock> = result
        .matches
        .into_iter()
        .map(|m| MatchBlock {
            heading: m.entry.gloss.clone(),
            caption: format!("{} \u{00b7} {}", query.trim(), m.provenance.as_str()),
            key: m.key,
            sfo: m.entry.sfo,
            pacifique: m.entry.pacifique.unwrap_or_else(|| ABSENT_SPELLING.to_string()),
            pos: m.entry.pos,
            semantic_root: m.entry.semantic_root,
            morphology_notes: m.entry.morphology_notes,
            reflection: m.entry.reflection,
        })
        .collect();

    let message = if result.analysis.is_none() {
        Some(EMPTY_QUERY_MESSAGE.to_string())
    } else if matches.is_empty() {
        Some(NO_MATCH_MESSAGE.to_string())
    } else {
        None
    };

    LookupReport {
        query: query.to_string(),
        matches,
        diminutive_note: diminutive.then(|| DIMINUTIVE_NOTE.to_string()),
        message,
    }
}

fn detail_block(event: &TimelineEvent) -> DetailBlock {
    DetailBlock {
        title: event.title.clone(),
        date_line: format!(
            "{} \u{00b7} {} \u{00b7} {}",
            event.display_date, event.era, event.kind
        ),
        western_lens: event.western_lens.clone(),
        lnuk_lens: event.lnuk_lens.clone(),
        synthesis: event.synthesis.clone(),
        people: event
            .people
            .iter()
            .map(|p| PersonBlock {
                name: p.name.clone(),
                role: p.role.clone(),
                bio: p.bio.clone(),
            })
            .collect(),
    }
}
