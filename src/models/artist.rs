//! Artist models.

use serde::{Deserialize, Serialize};

use super::album::AlbumPreview;
use super::common::{ArtistRef, ImageSource};
use super::song::SongPreview;

/// One section of an artist biography.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BioSection {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub sequence: i64,
}

/// Social profile links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
}

/// A full artist record.
///
/// The nested collections hold previews only; they are never expanded further.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fan_count: Option<u64>,

    #[serde(default)]
    pub is_verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_type: Option<String>,

    /// Biography sections ordered by sequence.
    #[serde(default)]
    pub bio: Vec<BioSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(default)]
    pub social: SocialLinks,

    #[serde(default)]
    pub available_languages: Vec<String>,

    #[serde(default)]
    pub is_radio_present: bool,

    #[serde(default)]
    pub images: Vec<ImageSource>,

    #[serde(default)]
    pub top_songs: Vec<SongPreview>,

    #[serde(default)]
    pub top_albums: Vec<AlbumPreview>,

    #[serde(default)]
    pub singles: Vec<AlbumPreview>,

    #[serde(default)]
    pub similar_artists: Vec<ArtistRef>,
}

impl Artist {
    /// Full biography as plain text, sections separated by blank lines.
    pub fn bio_text(&self) -> String {
        self.bio
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
