//! The built-in historical timeline.
//!
//! Sort keys are years (approximate for the pre-contact entry); they order
//! the events chronologically independent of the display date strings.
//! Narrative fields are optional by design — some events carry both lenses
//! and a synthesis, some carry neither.

use bridge_protocol::{EventId, Person, Timeline, TimelineEvent};

fn person(name: &str, role: Option<&str>, bio: Option<&str>) -> Person {
    Person {
        name: name.to_string(),
        role: role.map(str::to_string),
        bio: bio.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    display_date: &str,
    sort_key: i64,
    era: &str,
    kind: &str,
    tags: &[&str],
    western_lens: Option<&str>,
    lnuk_lens: Option<&str>,
    synthesis: Option<&str>,
    people: Vec<Person>,
) -> TimelineEvent {
    TimelineEvent {
        id: EventId::new(id),
        title: title.to_string(),
        display_date: display_date.to_string(),
        sort_key,
        era: era.to_string(),
        kind: kind.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        western_lens: western_lens.map(str::to_string),
        lnuk_lens: lnuk_lens.map(str::to_string),
        synthesis: synthesis.map(str::to_string),
        people,
    }
}

pub fn seed_timeline() -> Timeline {
    Timeline {
        version: 1,
        events: vec![
            event(
                1,
                "The Mawio'mi and the seven districts of Mi'kma'ki",
                "Time immemorial",
                1200,
                "Pre-Contact",
                "governance",
                &["governance", "land"],
                Some(
                    "European accounts later described a loose seasonal confederacy \
                     of bands led by chiefs, coordinated through a Grand Council.",
                ),
                Some(
                    "The Mawio'mi carries responsibility for the districts, not \
                     ownership of them; leadership is service to the relations of \
                     a territory, human and other-than-human.",
                ),
                Some(
                    "Both accounts describe the same structure; they differ on \
                     whether land is a jurisdiction or a relative.",
                ),
                vec![],
            ),
            event(
                2,
                "French settlement at Port-Royal",
                "1605",
                1605,
                "Contact Era",
                "contact",
                &["land", "trade"],
                None,
                None,
                None,
                vec![],
            ),
            event(
                3,
                "Membertou's alliance with the French",
                "1610",
                1610,
                "Contact Era",
                "alliance",
                &["governance", "ceremony"],
                Some(
                    "The kji'saqmaw Membertou and his family were baptized at \
                     Port-Royal, sealing a trade and military alliance with France.",
                ),
                Some(
                    "An alliance entered as an equal, through ceremony — an \
                     extension of kinship to newcomers, not a submission to them.",
                ),
                None,
                vec![person(
                    "Membertou",
                    Some("Kji'saqmaw (Grand Chief)"),
                    Some(
                        "Saqmaw of the Port-Royal district, remembered as the first \
                         Grand Chief to formalize relations with the French.",
                    ),
                )],
            ),
            event(
                4,
                "Treaty of 1726",
                "1726",
                1726,
                "Treaty Era",
                "treaty",
                &["treaty", "law"],
                Some(
                    "Signed after Dummer's War: the Crown promised not to interfere \
                     with Mi'kmaw hunting, fishing and planting.",
                ),
                Some(
                    "A nation-to-nation undertaking of peace and friendship. No land \
                     was surrendered; the wording assumes continued Mi'kmaw use of \
                     the territory.",
                ),
                Some(
                    "The first of the Covenant Chain of treaties that later courts \
                     would read alongside the oral record.",
                ),
                vec![],
            ),
            event(
                5,
                "Peace and Friendship Treaty of 1752",
                "November 22, 1752",
                1752,
                "Treaty Era",
                "treaty",
                &["treaty", "law", "trade"],
                Some(
                    "Renewed the 1726 terms and promised 'free liberty of hunting \
                     and fishing as usual' plus truckhouses for trade.",
                ),
                Some(
                    "Remembered and renewed annually on Treaty Day; the promise is \
                     a living relationship, not an archived document.",
                ),
                None,
                vec![person(
                    "Jean-Baptiste Cope",
                    Some("Saqmaw of Shubenacadie"),
                    Some("Negotiated and signed the 1752 treaty for his district."),
                )],
            ),
            event(
                6,
                "Treaties of 1760-61 and the Burying of the Hatchet",
                "1760-1761",
                1761,
                "Treaty Era",
                "treaty",
                &["treaty", "ceremony"],
                Some(
                    "A series of district-by-district treaties ending hostilities \
                     after the fall of New France, concluded by ceremony at the \
                     Governor's farm in Halifax.",
                ),
                Some(
                    "Each district spoke for itself, as the Mawio'mi requires; the \
                     hatchet was buried in ceremony so the peace would be renewed, \
                     not merely recorded.",
                ),
                Some(
                    "These are the treaties the Supreme Court of Canada read in \
                     Marshall; the ceremony and the text carry the same promise.",
                ),
                vec![],
            ),
            event(
                7,
                "Confederation and the Indian Act",
                "1867 / 1876",
                1876,
                "Confederation Era",
                "law",
                &["law", "displacement"],
                Some(
                    "The new Dominion asserted legislative authority over 'Indians \
                     and lands reserved for the Indians', consolidated in the Indian \
                     Act of 1876.",
                ),
                None,
                None,
                vec![],
            ),
            event(
                8,
                "Centralization policy in Nova Scotia",
                "1942",
                1942,
                "Confederation Era",
                "policy",
                &["displacement", "land"],
                Some(
                    "Ottawa attempted to relocate all Mi'kmaq in Nova Scotia to two \
                     reserves, Eskasoni and Shubenacadie; the policy collapsed \
                     within a decade.",
                ),
                Some(
                    "Families were moved away from the places their names, stories \
                     and livelihoods belong to. Many walked home.",
                ),
                None,
                vec![],
            ),
            event(
                9,
                "Constitution Act, section 35",
                "1982",
                1982,
                "Modern Era",
                "law",
                &["law", "treaty"],
                Some(
                    "Existing aboriginal and treaty rights were recognized and \
                     affirmed in the supreme law of Canada.",
                ),
                Some(
                    "What the treaties always were — binding — the newcomers' own \
                     law finally said out loud.",
                ),
                None,
                vec![],
            ),
            event(
                10,
                "R. v. Marshall",
                "September 17, 1999",
                1999,
                "Modern Era",
                "law",
                &["law", "treaty", "fishery"],
                Some(
                    "The Supreme Court of Canada held that the 1760-61 treaties \
                     protect a right to fish and trade for a moderate livelihood.",
                ),
                Some(
                    "Vindication of a livelihood fishery governed by netukulimk: \
                     take what is needed, leave the rest for the relations to come.",
                ),
                Some(
                    "A 1761 promise, kept alive orally for two centuries, read back \
                     into force by the newcomers' highest court.",
                ),
                vec![person(
                    "Donald Marshall Jr.",
                    Some("Appellant"),
                    Some(
                        "Mi'kmaw man from Membertou whose eel fishery prosecution \
                         became the leading treaty-rights case.",
                    ),
                )],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_passes_corpus_validation() {
        seed_timeline().validate().expect("seed timeline must be valid");
    }

    #[test]
    fn seed_sort_keys_follow_chronology() {
        let events = seed_timeline().events;
        for pair in events.windows(2) {
            assert!(pair[0].sort_key <= pair[1].sort_key);
        }
    }
}
