use crate::{Event, Id, Kind, Pubkey, Time};
use serde::{Deserialize, Serialize};

/// A relay subscription filter.
///
/// Serializes to the JSON object the external relay client sends on the
/// wire: tag filters use `#t`/`#d`/`#a` keys and unset fields are omitted.
/// An event matches when it satisfies every set field; within a field, any
/// listed value matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Event ids to match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<Id>>,

    /// Authors to match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Pubkey>>,

    /// Kinds to match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<Kind>>,

    /// 't' (topic) tag values to match
    #[serde(rename = "#t", skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,

    /// 'd' (identifier) tag values to match
    #[serde(rename = "#d", skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<String>>,

    /// 'a' (address) tag values to match
    #[serde(rename = "#a", skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,

    /// Earliest creation time to match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<Time>,

    /// Latest creation time to match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<Time>,

    /// Maximum number of events the relay should return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Filter {
    /// Whether the event matches this filter.
    ///
    /// `limit` is a query bound, not a matching criterion, so it is ignored
    /// here.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(&event.id) {
                return false;
            }
        }
        if let Some(authors) = &self.authors {
            if !authors.contains(&event.pubkey) {
                return false;
            }
        }
        if let Some(kinds) = &self.kinds {
            if !kinds.contains(&event.kind) {
                return false;
            }
        }
        if let Some(topics) = &self.topics {
            if !tag_match(event, "t", topics) {
                return false;
            }
        }
        if let Some(identifiers) = &self.identifiers {
            if !tag_match(event, "d", identifiers) {
                return false;
            }
        }
        if let Some(addresses) = &self.addresses {
            if !tag_match(event, "a", addresses) {
                return false;
            }
        }
        if let Some(since) = self.since {
            if event.created_at < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if event.created_at > until {
                return false;
            }
        }
        true
    }
}

// Any tag with this name may match, not just the first occurrence
fn tag_match(event: &Event, name: &str, values: &[String]) -> bool {
    event.tags.iter().any(|tag| {
        tag.name() == Some(name)
            && tag
                .value()
                .map(|v| values.iter().any(|wanted| wanted == v))
                .unwrap_or(false)
    })
}
