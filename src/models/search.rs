//! Models for the combined "search all" response.

use serde::{Deserialize, Serialize};

use super::common::ImageSource;

/// One hit of a combined search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,

    pub title: String,

    #[serde(rename = "type", default)]
    pub entity_type: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_artists: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    #[serde(default)]
    pub images: Vec<ImageSource>,
}

/// A group of hits with its display position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchSection {
    pub position: u32,

    pub results: Vec<SearchHit>,
}

/// Combined search results, one section per entity kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAll {
    pub top_query: SearchSection,
    pub songs: SearchSection,
    pub albums: SearchSection,
    pub artists: SearchSection,
    pub playlists: SearchSection,
}
