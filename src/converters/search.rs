//! Combined search converters.

use serde_json::Value;

use super::song::{parse_images, primary_artist_names};
use super::{keys, Raw};
use crate::error::Result;
use crate::models::{SearchAll, SearchHit, SearchSection};

/// Parse an `autocomplete.get` response.
pub fn parse_search_all(json: &Value) -> Result<SearchAll> {
    let raw = Raw::object(json, "search results")?;

    Ok(SearchAll {
        top_query: parse_section(raw.value(&["topquery", "top_query"])),
        songs: parse_section(raw.value(&["songs"])),
        albums: parse_section(raw.value(&["albums"])),
        artists: parse_section(raw.value(&["artists"])),
        playlists: parse_section(raw.value(&["playlists"])),
    })
}

fn parse_section(section: Option<&Value>) -> SearchSection {
    let Some(section) = section.filter(|s| s.is_object()) else {
        return SearchSection::default();
    };
    let raw = Raw::new(section);

    SearchSection {
        position: raw.u32(&["position"]).unwrap_or_default(),
        results: raw.array(&["data"]).iter().filter_map(parse_hit).collect(),
    }
}

fn parse_hit(json: &Value) -> Option<SearchHit> {
    let raw = Raw::object(json, "search hit").ok()?;

    let primary_artists = primary_artist_names(&raw);

    Some(SearchHit {
        id: raw.text(&["id"]),
        title: raw.text(&["title", "name"]),
        entity_type: raw.text(keys::TYPE),
        url: raw.text(keys::URL),
        description: raw.string(&["description", "subtitle"]),
        language: raw.string(keys::LANGUAGE),
        primary_artists: (!primary_artists.is_empty()).then_some(primary_artists),
        album: raw.string(&["album"]),
        images: parse_images(&raw),
    })
}
