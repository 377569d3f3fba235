use crate::{Addr, Error, Id, Kind, Pubkey, Tags, Time};
use serde::{Deserialize, Serialize};

/// A signed protocol event as received from a relay.
///
/// The signature is produced and checked by the external relay client, so it
/// is not carried here; unknown fields in relay JSON (such as `sig`) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    /// The event id
    pub id: Id,

    /// The author's public key
    pub pubkey: Pubkey,

    /// When the event was created
    pub created_at: Time,

    /// The event kind
    pub kind: Kind,

    /// The event tags
    pub tags: Tags,

    /// The content, often JSON-encoded
    pub content: String,
}

impl Event {
    /// Parse an event from relay JSON
    pub fn from_json(json: &str) -> Result<Event, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The 'd' tag identifier; an absent tag is treated as the empty string
    pub fn identifier(&self) -> &str {
        self.tags.value("d").unwrap_or("")
    }

    /// The address of this event, built from its own kind, author and 'd' tag
    pub fn addr(&self) -> Addr {
        Addr {
            kind: self.kind,
            author: self.pubkey,
            identifier: self.identifier().to_owned(),
        }
    }
}

/// An unsigned draft event, handed to the external signer/publisher.
///
/// Publishing returns the fully signed, id-assigned `Event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventTemplate {
    /// The event kind
    pub kind: Kind,

    /// The content, often JSON-encoded
    pub content: String,

    /// The event tags
    pub tags: Tags,
}
