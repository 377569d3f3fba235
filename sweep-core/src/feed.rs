//! Pure functions that turn extracted records into the lists the pages
//! render. No state lives here: every call is a function of its inputs.

use crate::{CleanupRecord, ScheduleRecord};
use chrono::{DateTime, Utc};

/// Feed ordering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Oldest first
    Ascending,

    /// Most recent first
    Descending,
}

/// Sort cleanup records by creation time.
///
/// Stable: records with equal timestamps keep their relative order, so the
/// feed does not visibly reshuffle between renders.
pub fn sort_cleanups(records: &mut [CleanupRecord], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortDirection::Descending => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

/// Sort schedule records by start time. Stable under equal keys.
pub fn sort_schedule(records: &mut [ScheduleRecord], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| a.start.cmp(&b.start)),
        SortDirection::Descending => records.sort_by(|a, b| b.start.cmp(&a.start)),
    }
}

/// A record the text search can look at
pub trait Searchable {
    /// The concatenated searchable text: title, description and location,
    /// with missing fields treated as empty
    fn haystack(&self) -> String;
}

impl Searchable for CleanupRecord {
    fn haystack(&self) -> String {
        [
            self.title.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.location.as_deref().unwrap_or(""),
        ]
        .join("\n")
    }
}

impl Searchable for ScheduleRecord {
    fn haystack(&self) -> String {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_deref().unwrap_or(""),
        ]
        .join("\n")
    }
}

/// Case-insensitive substring search over title, description and location.
///
/// An empty query keeps every record, in order.
pub fn filter_by_text<T: Searchable>(records: Vec<T>, query: &str) -> Vec<T> {
    if query.is_empty() {
        return records;
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.haystack().to_lowercase().contains(&needle))
        .collect()
}

/// Split schedule records around a reference instant.
///
/// Returns `(upcoming, past)`: upcoming events start strictly after the
/// reference and come back soonest-first; past events, including any
/// starting exactly at the reference, come back most-recent-first. Every
/// input record lands in exactly one half.
pub fn partition_by_start(
    records: Vec<ScheduleRecord>,
    reference: DateTime<Utc>,
) -> (Vec<ScheduleRecord>, Vec<ScheduleRecord>) {
    let (mut upcoming, mut past): (Vec<ScheduleRecord>, Vec<ScheduleRecord>) = records
        .into_iter()
        .partition(|record| record.start > reference);
    sort_schedule(&mut upcoming, SortDirection::Ascending);
    sort_schedule(&mut past, SortDirection::Descending);
    (upcoming, past)
}

#[cfg(test)]
mod test {
    use super::{
        filter_by_text, partition_by_start, sort_cleanups, sort_schedule, SortDirection,
    };
    use crate::{CleanupRecord, ScheduleRecord};
    use chrono::{DateTime, Utc};
    use sweep_types::Event;

    fn cleanup(id_byte: &str, created_at: u64, title: &str) -> CleanupRecord {
        let event = Event::from_json(&format!(
            r#"{{
                "id": "{id_byte}9663055164ab8b30d9524656370c4bf93393bb051b7edf4556f40c5298dc0c7",
                "pubkey": "1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d",
                "created_at": {created_at},
                "kind": 30023,
                "tags": [["d","cleanup-{id_byte}"]],
                "content": "{{\"title\":\"{title}\"}}"
            }}"#
        ))
        .unwrap();
        CleanupRecord::from_event(&event)
    }

    fn schedule(id_byte: &str, start: &str) -> ScheduleRecord {
        let event = Event::from_json(&format!(
            r#"{{
                "id": "{id_byte}9663055164ab8b30d9524656370c4bf93393bb051b7edf4556f40c5298dc0c7",
                "pubkey": "1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d",
                "created_at": 1716700000,
                "kind": 31923,
                "tags": [["d","event-{id_byte}"]],
                "content": "{{\"title\":\"T\",\"description\":\"D\",\"startDate\":\"{start}\"}}"
            }}"#
        ))
        .unwrap();
        ScheduleRecord::from_event(&event).unwrap()
    }

    fn when(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_sort_cleanups_both_directions() {
        let mut records = vec![
            cleanup("a", 300, "newest"),
            cleanup("b", 100, "oldest"),
            cleanup("c", 200, "middle"),
        ];
        sort_cleanups(&mut records, SortDirection::Descending);
        assert_eq!(records[0].created_at.as_u64(), 300);
        assert_eq!(records[2].created_at.as_u64(), 100);

        sort_cleanups(&mut records, SortDirection::Ascending);
        assert_eq!(records[0].created_at.as_u64(), 100);
        assert_eq!(records[2].created_at.as_u64(), 300);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut records = vec![
            cleanup("a", 100, "first"),
            cleanup("b", 100, "second"),
            cleanup("c", 50, "older"),
        ];
        sort_cleanups(&mut records, SortDirection::Descending);
        // equal timestamps keep original relative order
        assert_eq!(records[0].title.as_deref(), Some("first"));
        assert_eq!(records[1].title.as_deref(), Some("second"));

        let sorted_once = records.clone();
        sort_cleanups(&mut records, SortDirection::Descending);
        assert_eq!(records, sorted_once);
    }

    #[test]
    fn test_filter_by_text_empty_query_is_identity() {
        let records = vec![
            cleanup("a", 100, "Beach day"),
            cleanup("b", 200, "Park pickup"),
        ];
        let filtered = filter_by_text(records.clone(), "");
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_by_text_case_insensitive() {
        let records = vec![
            cleanup("a", 100, "Beach day"),
            cleanup("b", 200, "Park pickup"),
        ];
        let filtered = filter_by_text(records, "BEACH");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title.as_deref(), Some("Beach day"));
    }

    #[test]
    fn test_filter_by_text_searches_location() {
        let event = Event::from_json(
            r#"{
                "id": "a9663055164ab8b30d9524656370c4bf93393bb051b7edf4556f40c5298dc0c7",
                "pubkey": "1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d",
                "created_at": 100,
                "kind": 30023,
                "tags": [["location","Sunset Pier"]],
                "content": "{}"
            }"#,
        )
        .unwrap();
        let records = vec![CleanupRecord::from_event(&event)];
        assert_eq!(filter_by_text(records.clone(), "sunset").len(), 1);
        assert_eq!(filter_by_text(records, "harbor").len(), 0);
    }

    #[test]
    fn test_partition_exhaustive_and_disjoint() {
        let records = vec![
            schedule("a", "2026-09-05T09:00:00Z"),
            schedule("b", "2026-08-01T09:00:00Z"),
            schedule("c", "2026-10-01T09:00:00Z"),
            schedule("d", "2026-07-01T09:00:00Z"),
        ];
        let reference = when("2026-08-30T00:00:00Z");
        let (upcoming, past) = partition_by_start(records.clone(), reference);
        assert_eq!(upcoming.len() + past.len(), records.len());

        // soonest first
        assert_eq!(upcoming[0].start, when("2026-09-05T09:00:00Z"));
        assert_eq!(upcoming[1].start, when("2026-10-01T09:00:00Z"));

        // most recent first
        assert_eq!(past[0].start, when("2026-08-01T09:00:00Z"));
        assert_eq!(past[1].start, when("2026-07-01T09:00:00Z"));

        for record in &records {
            let in_upcoming = upcoming.iter().filter(|r| r.id == record.id).count();
            let in_past = past.iter().filter(|r| r.id == record.id).count();
            assert_eq!(in_upcoming + in_past, 1);
        }
    }

    #[test]
    fn test_partition_boundary_is_past() {
        let records = vec![schedule("a", "2026-08-30T12:00:00Z")];
        let (upcoming, past) = partition_by_start(records, when("2026-08-30T12:00:00Z"));
        assert!(upcoming.is_empty());
        assert_eq!(past.len(), 1);
    }

    #[test]
    fn test_sort_schedule_directions() {
        let mut records = vec![
            schedule("a", "2026-09-05T09:00:00Z"),
            schedule("b", "2026-08-01T09:00:00Z"),
        ];
        sort_schedule(&mut records, SortDirection::Ascending);
        assert_eq!(records[0].start, when("2026-08-01T09:00:00Z"));
        sort_schedule(&mut records, SortDirection::Descending);
        assert_eq!(records[0].start, when("2026-09-05T09:00:00Z"));
    }
}
