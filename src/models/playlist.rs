//! Playlist models.

use serde::{Deserialize, Serialize};

use super::common::{ArtistsGroup, ImageSource};
use super::song::SongPreview;

/// A full playlist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
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
    pub follower_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,

    #[serde(default)]
    pub is_explicit: bool,

    /// Display name of the curator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default)]
    pub artists: ArtistsGroup,

    #[serde(default)]
    pub images: Vec<ImageSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<SongPreview>>,
}

/// Playlist projection used in search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPreview {
    pub id: String,

    pub title: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_count: Option<u32>,

    #[serde(default)]
    pub is_explicit: bool,

    #[serde(default)]
    pub images: Vec<ImageSource>,
}
