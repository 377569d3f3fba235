use crate::{Error, Session, RSVP_KIND};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use sweep_types::{Addr, Event, EventTemplate, Id, Pubkey, Tag, Tags};

/// The JSON content body of an RSVP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpContent {
    /// Attendance status
    pub status: String,
}

/// The status string published on every RSVP
pub const STATUS_ATTENDING: &str = "attending";

/// Build the RSVP draft event for the session user.
///
/// The 'd' tag is unique per (event, attendee), so re-RSVPing replaces the
/// earlier RSVP instead of duplicating it.
pub fn rsvp_template(session: &Session, addr: &Addr, event_id: Id) -> Result<EventTemplate, Error> {
    let content = serde_json::to_string(&RsvpContent {
        status: STATUS_ATTENDING.to_owned(),
    })?;
    let target = addr.to_tag_value();
    let identifier = format!("rsvp-{}-{}", event_id, session.pubkey);
    let mut tags = Tags::new();
    tags.push(Tag::new(&["a", target.as_str()]));
    tags.push(Tag::new(&["d", identifier.as_str()]));
    Ok(EventTemplate {
        kind: RSVP_KIND,
        content,
        tags,
    })
}

/// The attendee set for the event at `addr`: the unique pubkeys across all
/// RSVPs whose 'a' tag targets it.
///
/// Deduplicated by pubkey, not by RSVP event id, so one attendee's multiple
/// RSVPs count once.
pub fn attendees(rsvps: &[Event], addr: &Addr) -> BTreeSet<Pubkey> {
    let target = addr.to_tag_value();
    let mut set: BTreeSet<Pubkey> = BTreeSet::new();
    for rsvp in rsvps {
        if rsvp.kind == RSVP_KIND && rsvp.tags.value("a") == Some(target.as_str()) {
            let _ = set.insert(rsvp.pubkey);
        }
    }
    set
}

/// Whether the given user has RSVPed to the event at `addr`
pub fn is_attending(rsvps: &[Event], addr: &Addr, pubkey: Pubkey) -> bool {
    attendees(rsvps, addr).contains(&pubkey)
}
