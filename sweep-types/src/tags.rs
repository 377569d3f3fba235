use serde::{Deserialize, Serialize};

/// A single tag: an ordered list of strings whose first element is the tag name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Build a tag from string parts
    pub fn new<S: AsRef<str>>(parts: &[S]) -> Tag {
        Tag(parts.iter().map(|s| s.as_ref().to_owned()).collect())
    }

    /// The tag name (first element)
    pub fn name(&self) -> Option<&str> {
        self.0.first().map(|s| s.as_str())
    }

    /// The tag value (second element)
    pub fn value(&self) -> Option<&str> {
        self.0.get(1).map(|s| s.as_str())
    }

    /// The tag marker (third element), e.g. "before"/"after" on image tags
    pub fn marker(&self) -> Option<&str> {
        self.0.get(2).map(|s| s.as_str())
    }
}

/// An ordered list of tags, as carried on every event.
///
/// Accessors follow a first-occurrence policy: when multiple tags share a
/// name (or a name and marker), the first one wins and the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    /// An empty tag list
    pub fn new() -> Tags {
        Tags(Vec::new())
    }

    /// Build tags from nested string parts
    pub fn from_parts<T: AsRef<[U]>, U: AsRef<str>>(parts: &[T]) -> Tags {
        Tags(parts.iter().map(|tag| Tag::new(tag.as_ref())).collect())
    }

    /// Append a tag
    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    /// The value of the first tag with this name
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|tag| tag.name() == Some(name))
            .and_then(|tag| tag.value())
    }

    /// The value of the first tag with this name whose marker matches
    pub fn value_marked(&self, name: &str, marker: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|tag| tag.name() == Some(name) && tag.marker() == Some(marker))
            .and_then(|tag| tag.value())
    }
}

#[cfg(test)]
mod test {
    use super::{Tag, Tags};

    #[test]
    fn test_tag_accessors() {
        let tag = Tag::new(&["image", "https://x/1.jpg", "before"]);
        assert_eq!(tag.name(), Some("image"));
        assert_eq!(tag.value(), Some("https://x/1.jpg"));
        assert_eq!(tag.marker(), Some("before"));

        let bare = Tag::new(&["d"]);
        assert_eq!(bare.name(), Some("d"));
        assert_eq!(bare.value(), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let tags = Tags::from_parts(&[
            &["location", "Beach"][..],
            &["location", "Park"][..],
            &["image", "U1", "before"][..],
            &["image", "U2", "after"][..],
            &["image", "U3", "before"][..],
        ]);
        assert_eq!(tags.value("location"), Some("Beach"));
        assert_eq!(tags.value_marked("image", "before"), Some("U1"));
        assert_eq!(tags.value_marked("image", "after"), Some("U2"));
        assert_eq!(tags.value_marked("image", "during"), None);
        assert_eq!(tags.value("d"), None);
    }

    #[test]
    fn test_tags_json() {
        let json = r#"[["t","garbage-cleanup"],["d","cleanup-1"]]"#;
        let tags: Tags = serde_json::from_str(json).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.value("t"), Some("garbage-cleanup"));
        assert_eq!(serde_json::to_string(&tags).unwrap(), json);
    }
}
