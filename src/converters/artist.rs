//! Artist converters.

use serde_json::Value;

use super::album::parse_album_previews;
use super::song::{parse_images, parse_song_previews};
use super::{coerce_i64, coerce_string, keys, Raw};
use crate::error::Result;
use crate::models::{Artist, ArtistRef, BioSection, SocialLinks};

/// Parse an artist preview. Non-object entries yield `None`.
pub fn parse_artist_ref(json: &Value) -> Option<ArtistRef> {
    let raw = Raw::object(json, "artist").ok()?;

    Some(ArtistRef {
        id: raw.text(keys::ARTIST_ID),
        name: raw.text(keys::ARTIST_NAME),
        role: raw.string(&["role"]),
        entity_type: raw.string(keys::TYPE),
        images: parse_images(&raw),
        url: raw.string(keys::URL),
    })
}

/// Parse a full artist page.
///
/// `topSongs`, `topAlbums`, `singles` and `similarArtists` are converted to
/// previews; their own nested collections are ignored.
pub fn parse_artist(json: &Value) -> Result<Artist> {
    let raw = Raw::object(json, "artist")?;

    let url = raw.string(keys::URL).or_else(|| {
        raw.value(&["urls"])
            .and_then(|urls| urls.get("overview"))
            .and_then(coerce_string)
    });

    Ok(Artist {
        id: raw.text(keys::ARTIST_ID),
        name: raw.text(keys::ARTIST_NAME),
        url,
        entity_type: raw.string(keys::TYPE),
        follower_count: raw.u64(&["follower_count"]),
        fan_count: raw.u64(&["fan_count"]),
        is_verified: raw.flag(&["isVerified", "is_verified"]),
        dominant_language: raw.string(&["dominantLanguage"]),
        dominant_type: raw.string(&["dominantType"]),
        bio: raw.value(&["bio"]).map(parse_bio).unwrap_or_default(),
        date_of_birth: raw.string(&["dob"]),
        social: SocialLinks {
            facebook: raw.string(&["fb"]),
            twitter: raw.string(&["twitter"]),
            wiki: raw.string(&["wiki"]),
        },
        available_languages: raw
            .array(&["availableLanguages"])
            .iter()
            .filter_map(coerce_string)
            .collect(),
        is_radio_present: raw.flag(&["isRadioPresent"]),
        images: parse_images(&raw),
        top_songs: parse_song_previews(collection(&raw, "topSongs", "songs")),
        top_albums: parse_album_previews(collection(&raw, "topAlbums", "albums")),
        singles: parse_album_previews(collection(&raw, "singles", "albums")),
        similar_artists: raw
            .array(&["similarArtists"])
            .iter()
            .filter_map(parse_artist_ref)
            .collect(),
    })
}

/// Nested collection given either as an array or as `{"<inner>": [...]}`.
pub(crate) fn collection<'a>(raw: &Raw<'a>, key: &str, inner: &str) -> &'a [Value] {
    match raw.value(&[key]) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(wrapper) => wrapper
            .get(inner)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        None => &[],
    }
}

/// Parse biography sections, given as an array or as a JSON-encoded string.
fn parse_bio(value: &Value) -> Vec<BioSection> {
    let decoded;
    let sections = match value {
        Value::Array(items) => items,
        Value::String(s) => {
            decoded = serde_json::from_str::<Value>(s).unwrap_or(Value::Null);
            match decoded.as_array() {
                Some(items) => items,
                None => return Vec::new(),
            }
        }
        _ => return Vec::new(),
    };

    let mut bio: Vec<BioSection> = sections
        .iter()
        .filter(|s| s.is_object())
        .filter_map(|section| {
            let raw = Raw::new(section);
            let text = raw.string(&["text"])?;
            Some(BioSection {
                text,
                title: raw.string(&["title"]),
                sequence: raw
                    .value(&["sequence"])
                    .and_then(coerce_i64)
                    .unwrap_or_default(),
            })
        })
        .collect();

    bio.sort_by_key(|s| s.sequence);
    bio
}
