//! Builders for every relay query the pages issue, plus the per-call-site
//! timeouts the external client enforces on them.

use crate::{CLEANUP_KIND, CLEANUP_TOPIC, RSVP_KIND, SCHEDULE_KIND, SCHEDULE_TOPIC};
use std::time::Duration;
use sweep_types::{Addr, Filter, Pubkey};

/// Timeout the pages apply to the gallery and schedule feed queries
pub const FEED_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for detail, home and profile queries
pub const DETAIL_TIMEOUT: Duration = Duration::from_secs(3);

/// Timeout for RSVP lookups
pub const RSVP_TIMEOUT: Duration = Duration::from_secs(2);

/// All cleanup posts (the gallery feed)
pub fn cleanup_feed() -> Filter {
    Filter {
        kinds: Some(vec![CLEANUP_KIND]),
        topics: Some(vec![CLEANUP_TOPIC.to_owned()]),
        ..Filter::default()
    }
}

/// The most recent cleanup posts, for the home page highlights
pub fn recent_cleanups(limit: u32) -> Filter {
    Filter {
        limit: Some(limit),
        ..cleanup_feed()
    }
}

/// All scheduled events (the schedule feed)
pub fn schedule_feed() -> Filter {
    Filter {
        kinds: Some(vec![SCHEDULE_KIND]),
        topics: Some(vec![SCHEDULE_TOPIC.to_owned()]),
        ..Filter::default()
    }
}

/// One author's cleanup posts, for the profile page
pub fn cleanups_by_author(author: Pubkey) -> Filter {
    Filter {
        authors: Some(vec![author]),
        ..cleanup_feed()
    }
}

/// One author's scheduled events, for the profile page
pub fn schedule_by_author(author: Pubkey) -> Filter {
    Filter {
        authors: Some(vec![author]),
        ..schedule_feed()
    }
}

/// The event at an address.
///
/// The protocol replaces events sharing (kind, author, identifier), so
/// callers take the first result as the latest version of the resource.
pub fn by_addr(addr: &Addr) -> Filter {
    Filter {
        kinds: Some(vec![addr.kind]),
        authors: Some(vec![addr.author]),
        identifiers: Some(vec![addr.identifier.clone()]),
        ..Filter::default()
    }
}

/// All RSVPs targeting the event at an address
pub fn rsvps_for(addr: &Addr) -> Filter {
    Filter {
        kinds: Some(vec![RSVP_KIND]),
        addresses: Some(vec![addr.to_tag_value()]),
        ..Filter::default()
    }
}

#[cfg(test)]
mod test {
    use super::{by_addr, cleanup_feed, recent_cleanups, rsvps_for, schedule_feed};
    use sweep_types::{Addr, Event, Kind, Pubkey};

    #[test]
    fn test_feed_filters() {
        let json = serde_json::to_string(&cleanup_feed()).unwrap();
        assert_eq!(json, r##"{"kinds":[30023],"#t":["garbage-cleanup"]}"##);

        let json = serde_json::to_string(&schedule_feed()).unwrap();
        assert_eq!(json, r##"{"kinds":[31923],"#t":["cleanup-event"]}"##);

        let json = serde_json::to_string(&recent_cleanups(6)).unwrap();
        assert_eq!(json, r##"{"kinds":[30023],"#t":["garbage-cleanup"],"limit":6}"##);
    }

    #[test]
    fn test_by_addr_matches_the_addressed_event() {
        let event = Event::from_json(
            r#"{
                "id": "a9663055164ab8b30d9524656370c4bf93393bb051b7edf4556f40c5298dc0c7",
                "pubkey": "1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d",
                "created_at": 1716700000,
                "kind": 31923,
                "tags": [["t","cleanup-event"],["d","event-1"]],
                "content": "{}"
            }"#,
        )
        .unwrap();
        let filter = by_addr(&event.addr());
        assert!(filter.matches(&event));
        assert!(filter.limit.is_none());
    }

    #[test]
    fn test_rsvps_for_uses_the_a_tag_value() {
        let addr = Addr {
            kind: Kind::new(31923),
            author: Pubkey::read_hex(
                b"1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d",
            )
            .unwrap(),
            identifier: "event-1".to_owned(),
        };
        let filter = rsvps_for(&addr);
        assert_eq!(
            filter.addresses,
            Some(vec![addr.to_tag_value()])
        );
    }
}
