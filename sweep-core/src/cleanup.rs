use crate::{Error, CLEANUP_KIND, CLEANUP_TOPIC};
use serde::{Deserialize, Serialize};
use sweep_types::{Addr, Event, EventTemplate, Id, Pubkey, Tag, Tags, Time};

/// The JSON content body of a cleanup post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupContent {
    /// Post title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// What was cleaned up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A cleanup post (before/after photos, description, location) extracted
/// from a raw relay event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupRecord {
    /// The underlying event id
    pub id: Id,

    /// The author
    pub pubkey: Pubkey,

    /// When the post was created
    pub created_at: Time,

    /// The address used to link to this post
    pub addr: Addr,

    /// Title, when the content carried one
    pub title: Option<String>,

    /// Description; plain-text content lands here verbatim
    pub description: Option<String>,

    /// URL of the "before" photo, from the image tags
    pub before_image_url: Option<String>,

    /// URL of the "after" photo, from the image tags
    pub after_image_url: Option<String>,

    /// Where the cleanup happened
    pub location: Option<String>,
}

impl CleanupRecord {
    /// Extract a cleanup record from a raw event.
    ///
    /// This never fails: the content is third-party authored, so content
    /// that does not parse as the expected JSON becomes the description and
    /// missing tags leave fields unset.
    pub fn from_event(event: &Event) -> CleanupRecord {
        let content: CleanupContent = match serde_json::from_str(&event.content) {
            Ok(content) => content,
            Err(_) => CleanupContent {
                title: None,
                description: Some(event.content.clone()),
            },
        };
        CleanupRecord {
            id: event.id,
            pubkey: event.pubkey,
            created_at: event.created_at,
            addr: event.addr(),
            title: content.title,
            description: content.description,
            before_image_url: event
                .tags
                .value_marked("image", "before")
                .map(str::to_owned),
            after_image_url: event.tags.value_marked("image", "after").map(str::to_owned),
            location: event.tags.value("location").map(str::to_owned),
        }
    }
}

/// Extract a whole query result into cleanup records.
///
/// An empty input (e.g. from a timed-out fetch) is a valid input and yields
/// an empty feed.
pub fn extract_cleanup_feed(events: &[Event]) -> Vec<CleanupRecord> {
    events.iter().map(CleanupRecord::from_event).collect()
}

/// A new cleanup post as entered in the share form.
///
/// Image URLs come back from the external upload service before the draft is
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupDraft {
    /// Post title
    pub title: String,

    /// What was cleaned up
    pub description: String,

    /// Where the cleanup happened
    pub location: Option<String>,

    /// Uploaded "before" photo URL
    pub before_image_url: Option<String>,

    /// Uploaded "after" photo URL
    pub after_image_url: Option<String>,
}

impl CleanupDraft {
    /// Build the publishable draft event.
    ///
    /// The identifier uses the creation time in milliseconds as its
    /// uniqueness source; collisions are not detected.
    pub fn to_template(&self) -> Result<EventTemplate, Error> {
        let identifier = format!("cleanup-{}", Time::now_millis());
        self.to_template_with_identifier(&identifier)
    }

    /// Build the publishable draft event with an explicit identifier
    pub fn to_template_with_identifier(&self, identifier: &str) -> Result<EventTemplate, Error> {
        let mut tags = Tags::new();
        tags.push(Tag::new(&["t", CLEANUP_TOPIC]));
        tags.push(Tag::new(&["d", identifier]));
        if let Some(url) = &self.before_image_url {
            tags.push(Tag::new(&["image", url.as_str(), "before"]));
        }
        if let Some(url) = &self.after_image_url {
            tags.push(Tag::new(&["image", url.as_str(), "after"]));
        }
        if let Some(location) = &self.location {
            tags.push(Tag::new(&["location", location.as_str()]));
        }
        let content = serde_json::to_string(&CleanupContent {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
        })?;
        Ok(EventTemplate {
            kind: CLEANUP_KIND,
            content,
            tags,
        })
    }
}
