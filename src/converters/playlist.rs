//! Playlist converters.

use serde_json::Value;

use super::song::{parse_artists_group, parse_images, parse_song_previews};
use super::{keys, Raw};
use crate::error::Result;
use crate::models::{Playlist, PlaylistPreview};

/// Parse a full playlist record.
pub fn parse_playlist(json: &Value) -> Result<Playlist> {
    let raw = Raw::object(json, "playlist")?;

    let songs = raw
        .value(&["list", "songs"])
        .and_then(Value::as_array)
        .map(|items| parse_song_previews(items));

    Ok(Playlist {
        id: raw.text(keys::PLAYLIST_ID),
        title: raw.text(keys::PLAYLIST_TITLE),
        description: raw.string(keys::DESCRIPTION),
        url: raw.text(keys::URL),
        language: raw.string(keys::LANGUAGE),
        release_year: raw.u32(keys::YEAR),
        song_count: raw.u32(keys::SONG_COUNT),
        follower_count: raw.u64(&["follower_count", "fan_count"]),
        play_count: raw.u64(keys::PLAY_COUNT),
        is_explicit: raw.flag(keys::EXPLICIT),
        owner: owner_name(&raw),
        artists: parse_artists_group(&raw),
        images: parse_images(&raw),
        songs,
    })
}

/// Parse a playlist projection for search results.
pub fn parse_playlist_preview(json: &Value) -> Result<PlaylistPreview> {
    let raw = Raw::object(json, "playlist")?;

    Ok(PlaylistPreview {
        id: raw.text(keys::PLAYLIST_ID),
        title: raw.text(keys::PLAYLIST_TITLE),
        url: raw.text(keys::URL),
        language: raw.string(keys::LANGUAGE),
        song_count: raw.u32(keys::SONG_COUNT),
        is_explicit: raw.flag(keys::EXPLICIT),
        images: parse_images(&raw),
    })
}

fn owner_name(raw: &Raw<'_>) -> Option<String> {
    let full_name = [raw.string(&["firstname"]), raw.string(&["lastname"])]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    if full_name.is_empty() {
        raw.string(&["username"])
    } else {
        Some(full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_playlist() {
        let raw = json!({
            "id": "110858205",
            "title": "Top 50 English",
            "subtitle": "JioSaavn",
            "type": "playlist",
            "perma_url": "https://www.jiosaavn.com/featured/top-50-english/I3kvhipIy73uCJW60TJk1Q__",
            "image": "http://c.saavncdn.com/editorial/Top50English_150x150.jpg",
            "language": "english",
            "list_count": "50",
            "list": [{"id": "KD8zfAZp", "title": "Believer"}],
            "more_info": {
                "firstname": "JioSaavn",
                "follower_count": "84210",
                "artists": [{"id": "456863", "name": "Imagine Dragons", "role": "singer"}]
            }
        });

        let playlist = parse_playlist(&raw).unwrap();
        assert_eq!(playlist.id, "110858205");
        assert_eq!(playlist.title, "Top 50 English");
        assert_eq!(playlist.description.as_deref(), Some("JioSaavn"));
        assert_eq!(playlist.song_count, Some(50));
        assert_eq!(playlist.follower_count, Some(84210));
        assert_eq!(playlist.owner.as_deref(), Some("JioSaavn"));
        assert_eq!(playlist.artists.primary[0].role.as_deref(), Some("singer"));
        assert!(playlist.artists.all.is_none());
        assert_eq!(playlist.images[2].url, "https://c.saavncdn.com/editorial/Top50English_500x500.jpg");
        assert_eq!(playlist.songs.map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_classic_playlist_fields() {
        let raw = json!({"listid": "42", "listname": "Chill", "username": "dj", "count": 7});
        let playlist = parse_playlist(&raw).unwrap();
        assert_eq!(playlist.id, "42");
        assert_eq!(playlist.title, "Chill");
        assert_eq!(playlist.owner.as_deref(), Some("dj"));
        assert_eq!(playlist.song_count, Some(7));
        assert!(playlist.songs.is_none());
    }

    #[test]
    fn test_parse_playlist_preview() {
        let raw = json!({"id": "1", "title": "Lo-fi", "more_info": {"song_count": "30"}, "explicit_content": "1"});
        let preview = parse_playlist_preview(&raw).unwrap();
        assert_eq!(preview.song_count, Some(30));
        assert!(preview.is_explicit);
    }
}
