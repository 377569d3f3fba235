use crate::{Error, InnerError, SCHEDULE_KIND, SCHEDULE_TOPIC};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sweep_types::{Addr, Event, EventTemplate, Id, Pubkey, Tag, Tags, Time};

/// The JSON content body of a scheduled event (camelCase on the wire,
/// RFC 3339 date strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleContent {
    /// Event title
    pub title: String,

    /// What the event is about
    pub description: String,

    /// Where to meet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// When the event starts
    pub start_date: DateTime<Utc>,

    /// When the event ends, if an end time was set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    /// What to bring, where exactly to meet, and so on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// A scheduled cleanup event, extracted and validated from a raw relay event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    /// The underlying event id
    pub id: Id,

    /// The organizer
    pub pubkey: Pubkey,

    /// When the announcement was created
    pub created_at: Time,

    /// The address used to link to this event
    pub addr: Addr,

    /// Event title
    pub title: String,

    /// What the event is about
    pub description: String,

    /// Where to meet
    pub location: Option<String>,

    /// When the event starts
    pub start: DateTime<Utc>,

    /// When the event ends, if an end time was set
    pub end: Option<DateTime<Utc>>,

    /// What to bring, where exactly to meet, and so on
    pub instructions: Option<String>,
}

impl ScheduleRecord {
    /// Extract and validate a scheduled event from a raw event.
    ///
    /// Unlike cleanup extraction this is a strict decode: content that is not
    /// valid JSON, lacks a parseable `startDate`, or rides on the wrong kind
    /// is rejected. An invalid-date sentinel never reaches the sort and
    /// partition comparisons.
    pub fn from_event(event: &Event) -> Result<ScheduleRecord, Error> {
        if event.kind != SCHEDULE_KIND {
            return Err(InnerError::BadEventKind {
                expected: SCHEDULE_KIND,
                found: event.kind,
            }
            .into());
        }
        let content: ScheduleContent = serde_json::from_str(&event.content)?;
        Ok(ScheduleRecord {
            id: event.id,
            pubkey: event.pubkey,
            created_at: event.created_at,
            addr: event.addr(),
            title: content.title,
            description: content.description,
            // JSON content wins; the location tag is a redundant copy
            location: content
                .location
                .or_else(|| event.tags.value("location").map(str::to_owned)),
            start: content.start_date,
            end: content.end_date,
            instructions: content.instructions,
        })
    }

    /// Whether the event has already started as of `reference`.
    ///
    /// An event starting exactly at the reference counts as past, matching
    /// the feed partition boundary.
    pub fn is_past(&self, reference: DateTime<Utc>) -> bool {
        self.start <= reference
    }
}

/// Extract a whole query result into schedule records, dropping events whose
/// content does not validate.
///
/// An empty input (e.g. from a timed-out fetch) is a valid input and yields
/// an empty feed.
pub fn extract_schedule_feed(events: &[Event]) -> Vec<ScheduleRecord> {
    events
        .iter()
        .filter_map(|event| match ScheduleRecord::from_event(event) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("skipping schedule event {}: {e}", event.id);
                None
            }
        })
        .collect()
}

/// A new scheduled event as entered in the create form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    /// Event title
    pub title: String,

    /// What the event is about
    pub description: String,

    /// Where to meet
    pub location: String,

    /// When the event starts
    pub start: DateTime<Utc>,

    /// When the event ends, if an end time was set
    pub end: Option<DateTime<Utc>>,

    /// What to bring, where exactly to meet, and so on
    pub instructions: Option<String>,
}

impl ScheduleDraft {
    /// Build the publishable draft event.
    ///
    /// The identifier uses the creation time in milliseconds as its
    /// uniqueness source; collisions are not detected.
    pub fn to_template(&self) -> Result<EventTemplate, Error> {
        let identifier = format!("event-{}", Time::now_millis());
        self.to_template_with_identifier(&identifier)
    }

    /// Build the publishable draft event with an explicit identifier
    pub fn to_template_with_identifier(&self, identifier: &str) -> Result<EventTemplate, Error> {
        let content = serde_json::to_string(&ScheduleContent {
            title: self.title.clone(),
            description: self.description.clone(),
            location: Some(self.location.clone()),
            start_date: self.start,
            end_date: self.end,
            instructions: self.instructions.clone(),
        })?;

        let mut tags = Tags::new();
        tags.push(Tag::new(&["t", SCHEDULE_TOPIC]));
        tags.push(Tag::new(&["d", identifier]));
        tags.push(Tag::new(&["location", self.location.as_str()]));
        let start_ts = self.start.timestamp().to_string();
        tags.push(Tag::new(&["start", start_ts.as_str()]));
        if let Some(end) = &self.end {
            let end_ts = end.timestamp().to_string();
            tags.push(Tag::new(&["end", end_ts.as_str()]));
        }

        Ok(EventTemplate {
            kind: SCHEDULE_KIND,
            content,
            tags,
        })
    }
}
