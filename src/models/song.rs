//! Song models.
//!
//! [`Song`] is the full detail record; [`SongPreview`] is the projection used
//! inside albums, playlists and artist pages.

use serde::{Deserialize, Serialize};

use super::common::{ArtistsGroup, DownloadLink, ImageSource};

/// Album reference carried by a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongAlbum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A full song record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,

    pub title: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    /// Share link on jiosaavn.com.
    pub url: String,

    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub is_explicit: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,

    #[serde(default)]
    pub has_lyrics: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(default)]
    pub album: SongAlbum,

    #[serde(default)]
    pub artists: ArtistsGroup,

    /// Exactly three variants when upstream had an image, otherwise empty.
    #[serde(default)]
    pub images: Vec<ImageSource>,

    /// Exactly five bitrates when the media URL decrypted, otherwise empty.
    #[serde(default)]
    pub download_links: Vec<DownloadLink>,
}

impl Song {
    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> Option<String> {
        self.duration_seconds
            .map(|total| format!("{:02}:{:02}", total / 60, total % 60))
    }

    /// Highest bitrate link, if any.
    pub fn best_download(&self) -> Option<&DownloadLink> {
        self.download_links.last()
    }
}

/// Lightweight song projection without download links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SongPreview {
    pub id: String,

    pub title: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,

    #[serde(default)]
    pub is_explicit: bool,

    #[serde(default)]
    pub album: SongAlbum,

    /// Primary artist names, comma separated.
    #[serde(default)]
    pub primary_artists: String,

    #[serde(default)]
    pub images: Vec<ImageSource>,
}
