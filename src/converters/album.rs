//! Album converters.

use serde_json::Value;

use super::song::{parse_artists_group, parse_images, parse_song_previews, primary_artist_names};
use super::{keys, Raw};
use crate::error::Result;
use crate::models::{Album, AlbumPreview};

/// Parse a full album record.
///
/// Embedded tracks are reduced to previews; no download links are derived
/// at that depth.
pub fn parse_album(json: &Value) -> Result<Album> {
    let raw = Raw::object(json, "album")?;

    let songs = raw
        .value(&["list", "songs"])
        .and_then(Value::as_array)
        .map(|items| parse_song_previews(items));

    Ok(Album {
        id: raw.text(keys::ALBUM_ID),
        title: raw.text(keys::ALBUM_TITLE),
        description: raw.string(keys::DESCRIPTION),
        url: raw.text(keys::URL),
        language: raw.string(keys::LANGUAGE),
        release_year: raw.u32(keys::YEAR),
        song_count: raw.u32(keys::SONG_COUNT),
        play_count: raw.u64(keys::PLAY_COUNT),
        is_explicit: raw.flag(keys::EXPLICIT),
        artists: parse_artists_group(&raw),
        images: parse_images(&raw),
        songs,
    })
}

/// Parse an album projection for search results and artist pages.
pub fn parse_album_preview(json: &Value) -> Result<AlbumPreview> {
    let raw = Raw::object(json, "album")?;

    Ok(AlbumPreview {
        id: raw.text(keys::ALBUM_ID),
        title: raw.text(keys::ALBUM_TITLE),
        description: raw.string(keys::DESCRIPTION),
        url: raw.text(keys::URL),
        language: raw.string(keys::LANGUAGE),
        release_year: raw.u32(keys::YEAR),
        song_count: raw.u32(keys::SONG_COUNT),
        is_explicit: raw.flag(keys::EXPLICIT),
        primary_artists: primary_artist_names(&raw),
        images: parse_images(&raw),
    })
}

pub(crate) fn parse_album_previews(items: &[Value]) -> Vec<AlbumPreview> {
    items
        .iter()
        .filter_map(|item| parse_album_preview(item).ok())
        .collect()
}
