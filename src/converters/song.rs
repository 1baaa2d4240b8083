//! Song converters.

use serde_json::Value;
use tracing::debug;

use super::artist::parse_artist_ref;
use super::images::image_variants;
use super::{keys, Raw};
use crate::crypto;
use crate::error::{Result, SaavnError};
use crate::models::{ArtistRef, ArtistsGroup, Song, SongAlbum, SongPreview};

/// Shapes in which upstream returns song details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongEnvelope {
    /// `{"songs": [...]}`, returned by current detail and link endpoints.
    List,
    /// `{"<id>": {...}, ...}`, returned by the classic detail endpoint.
    Keyed,
    /// `{"0": {"song": {...}}, "1": ..., "stationid": "..."}`, returned by radio stations.
    Station,
}

/// Parse a full song record.
pub fn parse_song(json: &Value) -> Result<Song> {
    let raw = Raw::object(json, "song")?;

    let download_links = match raw.raw_str(&["encrypted_media_url"]) {
        Some(encrypted) => crypto::download_links(encrypted),
        None => Vec::new(),
    };
    if download_links.is_empty() {
        debug!("No download links for song {}", raw.text(keys::SONG_ID));
    }

    Ok(Song {
        id: raw.text(keys::SONG_ID),
        title: raw.text(keys::TITLE),
        entity_type: raw.string(keys::TYPE),
        url: raw.text(keys::URL),
        language: raw.text(keys::LANGUAGE),
        release_year: raw.u32(keys::YEAR),
        release_date: raw.string(&["release_date"]),
        duration_seconds: raw.u32(&["duration"]),
        label: raw.string(&["label"]),
        is_explicit: raw.flag(keys::EXPLICIT),
        play_count: raw.u64(keys::PLAY_COUNT),
        has_lyrics: raw.flag(&["has_lyrics"]),
        lyrics_id: raw.string(&["lyrics_id"]),
        copyright: raw.string(&["copyright_text"]),
        album: parse_song_album(&raw),
        artists: parse_artists_group(&raw),
        images: parse_images(&raw),
        download_links,
    })
}

/// Parse the lightweight projection used inside albums, playlists and artist pages.
pub fn parse_song_preview(json: &Value) -> Result<SongPreview> {
    let raw = Raw::object(json, "song")?;

    Ok(SongPreview {
        id: raw.text(keys::SONG_ID),
        title: raw.text(keys::TITLE),
        url: raw.text(keys::URL),
        language: raw.string(keys::LANGUAGE),
        release_year: raw.u32(keys::YEAR),
        duration_seconds: raw.u32(&["duration"]),
        is_explicit: raw.flag(keys::EXPLICIT),
        album: parse_song_album(&raw),
        primary_artists: primary_artist_names(&raw),
        images: parse_images(&raw),
    })
}

/// Parse a list of song previews, dropping entries that are not objects.
pub(crate) fn parse_song_previews(items: &[Value]) -> Vec<SongPreview> {
    items
        .iter()
        .filter_map(|item| parse_song_preview(item).ok())
        .collect()
}

/// Parse a song detail response of the given shape.
pub fn parse_song_envelope(json: &Value, shape: SongEnvelope) -> Result<Vec<Song>> {
    let map = json
        .as_object()
        .ok_or_else(|| SaavnError::api("Song response is not a JSON object"))?;

    match shape {
        SongEnvelope::List => map
            .get("songs")
            .and_then(Value::as_array)
            .ok_or_else(|| SaavnError::api("Song response has no songs list"))?
            .iter()
            .filter(|v| v.is_object())
            .map(parse_song)
            .collect(),
        SongEnvelope::Keyed => map
            .values()
            .filter(|v| v.is_object())
            .map(parse_song)
            .collect(),
        SongEnvelope::Station => {
            let mut entries: Vec<(u64, &Value)> = map
                .iter()
                .filter_map(|(key, value)| {
                    let song = value.get("song").filter(|s| s.is_object())?;
                    Some((key.parse::<u64>().ok()?, song))
                })
                .collect();
            entries.sort_by_key(|(index, _)| *index);
            entries.into_iter().map(|(_, song)| parse_song(song)).collect()
        }
    }
}

pub(crate) fn parse_images(raw: &Raw<'_>) -> Vec<crate::models::ImageSource> {
    raw.raw_str(keys::IMAGE)
        .map(image_variants)
        .unwrap_or_default()
}

fn parse_song_album(raw: &Raw<'_>) -> SongAlbum {
    SongAlbum {
        id: raw.string(&["album_id", "albumid"]),
        title: raw.string(&["album"]),
        url: raw.string(&["album_url"]),
    }
}

/// Build the artist credits of an entity.
///
/// Prefers the nested `artistMap`; falls back to a flat `artists` list and
/// finally to the comma-separated name/id strings of older payloads.
pub(crate) fn parse_artists_group(raw: &Raw<'_>) -> ArtistsGroup {
    if let Some(map) = raw.value(&["artistMap"]).filter(|m| m.is_object()) {
        let list = |key: &str| -> Option<Vec<ArtistRef>> {
            map.get(key)
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(parse_artist_ref).collect())
        };

        return ArtistsGroup {
            primary: list("primary_artists").unwrap_or_default(),
            featured: list("featured_artists"),
            all: list("artists"),
        };
    }

    let flat = raw.array(&["artists"]);
    if !flat.is_empty() {
        return ArtistsGroup {
            primary: flat.iter().filter_map(parse_artist_ref).collect(),
            ..Default::default()
        };
    }

    let names = raw.string(&["primary_artists", "singers"]).unwrap_or_default();
    let ids = raw.string(&["primary_artists_id"]).unwrap_or_default();
    let ids: Vec<&str> = ids.split(',').map(str::trim).collect();

    ArtistsGroup {
        primary: names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .enumerate()
            .map(|(i, name)| ArtistRef::new(ids.get(i).copied().unwrap_or_default(), name))
            .collect(),
        ..Default::default()
    }
}

/// Primary artist names as one display string.
pub(crate) fn primary_artist_names(raw: &Raw<'_>) -> String {
    let group = parse_artists_group(raw);
    if group.primary.is_empty() {
        raw.text(&["music"])
    } else {
        group.primary_names(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::prelude::*;
    use cipher::block_padding::Pkcs7;
    use cipher::{BlockEncryptMut, KeyInit};
    use serde_json::json;

    fn encrypted_url() -> String {
        let encryptor = ecb::Encryptor::<des::Des>::new_from_slice(b"38346591").unwrap();
        let ciphertext = encryptor
            .encrypt_padded_vec_mut::<Pkcs7>(b"https://aac.saavncdn.com/815/believer_96.mp4");
        BASE64_STANDARD.encode(ciphertext)
    }

    fn raw_song() -> Value {
        json!({
            "id": "KD8zfAZp",
            "title": "Believer",
            "type": "song",
            "perma_url": "https://www.jiosaavn.com/song/believer/KD8zfAZpZFo",
            "image": "http://c.saavncdn.com/248/Evolve-English-2017-150x150.jpg",
            "language": "english",
            "year": "2017",
            "play_count": "1234567",
            "explicit_content": "0",
            "more_info": {
                "album_id": "10510401",
                "album": "Evolve",
                "album_url": "https://www.jiosaavn.com/album/evolve/zMEtFDmnqiI_",
                "label": "Kid Ina Korner / Interscope",
                "duration": "204",
                "has_lyrics": "true",
                "copyright_text": "&copy; 2017 KIDinaKORNER/Interscope Records",
                "release_date": "2017-06-23",
                "encrypted_media_url": encrypted_url(),
                "artistMap": {
                    "primary_artists": [
                        {"id": "456863", "name": "Imagine Dragons", "role": "primary_artists", "type": "artist",
                         "image": "http://c.saavncdn.com/artists/Imagine_Dragons_150x150.jpg",
                         "perma_url": "https://www.jiosaavn.com/artist/imagine-dragons-songs/Ozm3oiu7HDE_"}
                    ],
                    "featured_artists": [],
                    "artists": [
                        {"id": "456863", "name": "Imagine Dragons", "role": "singer", "type": "artist"},
                        {"id": "573221", "name": "Justin Tranter", "role": "lyricist", "type": "artist"}
                    ]
                }
            }
        })
    }

    #[test]
    fn test_parse_song() {
        let song = parse_song(&raw_song()).unwrap();
        assert_eq!(song.id, "KD8zfAZp");
        assert_eq!(song.title, "Believer");
        assert_eq!(song.release_year, Some(2017));
        assert_eq!(song.duration_seconds, Some(204));
        assert_eq!(song.play_count, Some(1234567));
        assert!(!song.is_explicit);
        assert!(song.has_lyrics);
        assert_eq!(song.album.title.as_deref(), Some("Evolve"));
        assert_eq!(song.album.id.as_deref(), Some("10510401"));
        assert_eq!(song.artists.primary.len(), 1);
        assert_eq!(song.artists.primary[0].name, "Imagine Dragons");
        assert_eq!(song.artists.primary[0].images.len(), 3);
        assert_eq!(song.artists.featured.as_deref(), Some(&[][..]));
        assert_eq!(song.artists.all.as_ref().map(Vec::len), Some(2));
        assert_eq!(song.images.len(), 3);
        assert!(song.images.iter().all(|i| i.url.starts_with("https://")));
        assert_eq!(song.download_links.len(), 5);
        assert_eq!(
            song.download_links[4].url,
            "https://aac.saavncdn.com/815/believer_320.mp4"
        );
    }

    #[test]
    fn test_parse_song_is_deterministic() {
        let raw = raw_song();
        assert_eq!(parse_song(&raw).unwrap(), parse_song(&raw).unwrap());
    }

    #[test]
    fn test_missing_fields_degrade() {
        let song = parse_song(&json!({"id": "x", "more_info": {"encrypted_media_url": "garbage"}})).unwrap();
        assert_eq!(song.title, "");
        assert_eq!(song.release_year, None);
        assert!(song.images.is_empty());
        assert!(song.download_links.is_empty());
        assert!(song.artists.primary.is_empty());
        assert!(song.artists.featured.is_none());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(parse_song(&json!("Believer")).is_err());
        assert!(parse_song(&Value::Null).is_err());
        assert!(parse_song_preview(&json!(3)).is_err());
    }

    #[test]
    fn test_classic_payload_fields() {
        let raw = json!({
            "id": "abc",
            "song": "Kesariya",
            "album": "Brahmastra",
            "albumid": "3867",
            "duration": 268,
            "primary_artists": "Pritam, Arijit Singh",
            "primary_artists_id": "455130, 459320",
            "explicit_content": 1
        });
        let song = parse_song(&raw).unwrap();
        assert_eq!(song.title, "Kesariya");
        assert_eq!(song.album.id.as_deref(), Some("3867"));
        assert_eq!(song.duration_seconds, Some(268));
        assert!(song.is_explicit);
        assert_eq!(song.artists.primary.len(), 2);
        assert_eq!(song.artists.primary[1].id, "459320");
        assert_eq!(song.artists.primary[1].name, "Arijit Singh");
    }

    #[test]
    fn test_preview_has_flat_artists() {
        let preview = parse_song_preview(&raw_song()).unwrap();
        assert_eq!(preview.primary_artists, "Imagine Dragons");
        assert_eq!(preview.images.len(), 3);
        assert_eq!(preview.language.as_deref(), Some("english"));
    }

    #[test]
    fn test_envelopes() {
        let list = json!({"songs": [raw_song()]});
        assert_eq!(parse_song_envelope(&list, SongEnvelope::List).unwrap().len(), 1);
        assert!(parse_song_envelope(&json!({}), SongEnvelope::List).is_err());

        let keyed = json!({"KD8zfAZp": raw_song()});
        assert_eq!(parse_song_envelope(&keyed, SongEnvelope::Keyed).unwrap()[0].title, "Believer");

        let mut second = raw_song();
        second["title"] = json!("Thunder");
        let mut tenth = raw_song();
        tenth["title"] = json!("Whatever It Takes");
        let station = json!({
            "10": {"song": tenth},
            "2": {"song": second},
            "0": {"song": raw_song()},
            "stationid": "abc"
        });
        let titles: Vec<String> = parse_song_envelope(&station, SongEnvelope::Station)
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["Believer", "Thunder", "Whatever It Takes"]);
    }

    #[test]
    fn test_list_envelope_skips_non_objects() {
        let list = json!({"songs": [raw_song(), null, "junk"]});
        let songs = parse_song_envelope(&list, SongEnvelope::List).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Believer");
    }

    #[test]
    fn test_keyed_envelope_skips_non_objects() {
        let keyed = json!({"KD8zfAZp": raw_song(), "broken": null});
        assert_eq!(parse_song_envelope(&keyed, SongEnvelope::Keyed).unwrap().len(), 1);
    }

    #[test]
    fn test_station_envelope_skips_non_objects() {
        let station = json!({
            "0": {"song": raw_song()},
            "1": {"song": "oops"},
            "2": null,
            "stationid": "abc"
        });
        let songs = parse_song_envelope(&station, SongEnvelope::Station).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, "KD8zfAZp");
    }
}
