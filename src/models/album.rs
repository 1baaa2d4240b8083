//! Album models.

use serde::{Deserialize, Serialize};

use super::common::{ArtistsGroup, ImageSource};
use super::song::SongPreview;

/// A full album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,

    #[serde(default)]
    pub is_explicit: bool,

    #[serde(default)]
    pub artists: ArtistsGroup,

    #[serde(default)]
    pub images: Vec<ImageSource>,

    /// Tracks, when the endpoint embeds them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<SongPreview>>,
}

impl Album {
    /// Number of embedded tracks, falling back to the reported count.
    pub fn total_songs(&self) -> u32 {
        self.songs
            .as_ref()
            .map(|s| s.len() as u32)
            .or(self.song_count)
            .unwrap_or(0)
    }
}

/// Album projection used in search results and artist pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPreview {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_count: Option<u32>,

    #[serde(default)]
    pub is_explicit: bool,

    /// Primary artist names, comma separated.
    #[serde(default)]
    pub primary_artists: String,

    #[serde(default)]
    pub images: Vec<ImageSource>,
}
