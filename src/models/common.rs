//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// One resolution variant of an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSource {
    /// Resolution marker, e.g. "500x500".
    pub resolution: String,

    /// Secure URL of the variant.
    pub url: String,
}

impl ImageSource {
    pub fn new<S1: Into<String>, S2: Into<String>>(resolution: S1, url: S2) -> Self {
        Self {
            resolution: resolution.into(),
            url: url.into(),
        }
    }
}

/// One bitrate variant of a media stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadLink {
    /// Bitrate label, e.g. "320kbps".
    pub bitrate: String,

    pub url: String,
}

impl DownloadLink {
    pub fn new<S1: Into<String>, S2: Into<String>>(bitrate: S1, url: S2) -> Self {
        Self {
            bitrate: bitrate.into(),
            url: url.into(),
        }
    }
}

/// Artist preview, as embedded in songs, albums and search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRef {
    pub id: String,

    pub name: String,

    /// Role on the parent entity ("primary_artists", "singer", "music", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default)]
    pub images: Vec<ImageSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ArtistRef {
    /// Create an artist with just a name and ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Artists of an entity, split by credit.
///
/// `primary` is always present; `featured` and `all` only when upstream sent them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistsGroup {
    #[serde(default)]
    pub primary: Vec<ArtistRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<Vec<ArtistRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<ArtistRef>>,
}

impl ArtistsGroup {
    /// Get the primary artist names joined by a separator.
    pub fn primary_names(&self, separator: &str) -> String {
        self.primary
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
            && self.featured.as_ref().map_or(true, Vec::is_empty)
            && self.all.as_ref().map_or(true, Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_names() {
        let group = ArtistsGroup {
            primary: vec![ArtistRef::new("1", "Vishal"), ArtistRef::new("2", "Shekhar")],
            ..Default::default()
        };
        assert_eq!(group.primary_names(", "), "Vishal, Shekhar");
        assert!(!group.is_empty());
        assert!(ArtistsGroup::default().is_empty());
    }

    #[test]
    fn test_optional_groups_are_omitted() {
        let json = serde_json::to_value(ArtistsGroup::default()).unwrap();
        assert_eq!(json, serde_json::json!({"primary": []}));
    }
}
