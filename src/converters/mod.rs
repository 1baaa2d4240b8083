//! JSON to model converters.
//!
//! Upstream payloads are loosely typed: the same field can be a number or a
//! numeric string, booleans arrive as `"0"`/`"1"`/`"true"`, and several fields
//! changed name between API versions. Converters read everything through
//! [`Raw`], which probes an explicit list of candidate keys, checking the
//! object itself and then its nested `more_info` block for each key.
//!
//! The entity converters only fail when handed something that is not a JSON
//! object; every other defect degrades to an absent field.

pub mod album;
pub mod artist;
pub mod images;
pub mod playlist;
pub mod search;
pub mod song;

use serde_json::Value;

use crate::error::{Result, SaavnError};

pub use album::{parse_album, parse_album_preview};
pub use artist::{parse_artist, parse_artist_ref};
pub use images::image_variants;
pub use playlist::{parse_playlist, parse_playlist_preview};
pub use search::parse_search_all;
pub use song::{parse_song, parse_song_envelope, parse_song_preview, SongEnvelope};

static NULL: Value = Value::Null;

/// Candidate key lists for fields with more than one historical spelling.
pub(crate) mod keys {
    pub const SONG_ID: &[&str] = &["id", "song_id"];
    pub const ALBUM_ID: &[&str] = &["id", "albumid", "album_id"];
    pub const PLAYLIST_ID: &[&str] = &["id", "listid"];
    pub const ARTIST_ID: &[&str] = &["artistId", "id", "artist_id"];
    pub const TITLE: &[&str] = &["title", "song", "name"];
    pub const ALBUM_TITLE: &[&str] = &["title", "name"];
    pub const PLAYLIST_TITLE: &[&str] = &["title", "listname", "name"];
    pub const ARTIST_NAME: &[&str] = &["name", "title"];
    pub const URL: &[&str] = &["perma_url", "perm_url", "url"];
    pub const DESCRIPTION: &[&str] = &["header_desc", "description", "subtitle"];
    pub const SONG_COUNT: &[&str] = &["song_count", "list_count", "numsongs", "count"];
    pub const YEAR: &[&str] = &["year"];
    pub const LANGUAGE: &[&str] = &["language"];
    pub const PLAY_COUNT: &[&str] = &["play_count"];
    pub const EXPLICIT: &[&str] = &["explicit_content"];
    pub const IMAGE: &[&str] = &["image"];
    pub const TYPE: &[&str] = &["type"];
}

/// Read-only view over a raw upstream object.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Raw<'a> {
    top: &'a Value,
    info: &'a Value,
}

impl<'a> Raw<'a> {
    pub(crate) fn new(json: &'a Value) -> Self {
        let info = json
            .get("more_info")
            .filter(|v| v.is_object())
            .unwrap_or(&NULL);
        Self { top: json, info }
    }

    /// Like [`Raw::new`], but rejects anything that is not an object.
    pub(crate) fn object(json: &'a Value, what: &str) -> Result<Self> {
        if json.is_object() {
            Ok(Self::new(json))
        } else {
            Err(SaavnError::api(format!(
                "Expected a JSON object for {}, got {}",
                what,
                value_type(json)
            )))
        }
    }

    /// First non-null value among the candidates, in candidate order.
    ///
    /// Each candidate is looked up on the top level before `more_info`.
    pub(crate) fn value(&self, candidates: &[&str]) -> Option<&'a Value> {
        candidates
            .iter()
            .flat_map(|key| [self.top.get(*key), self.info.get(*key)])
            .flatten()
            .find(|v| !v.is_null())
    }

    /// Display string with HTML entities decoded.
    pub(crate) fn string(&self, candidates: &[&str]) -> Option<String> {
        self.value(candidates)
            .and_then(coerce_string)
            .map(|s| decode_entities(&s))
    }

    /// Like [`Raw::string`], defaulting to an empty string.
    pub(crate) fn text(&self, candidates: &[&str]) -> String {
        self.string(candidates).unwrap_or_default()
    }

    /// Raw string without entity decoding.
    pub(crate) fn raw_str(&self, candidates: &[&str]) -> Option<&'a str> {
        self.value(candidates)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub(crate) fn u64(&self, candidates: &[&str]) -> Option<u64> {
        self.value(candidates).and_then(coerce_u64)
    }

    pub(crate) fn u32(&self, candidates: &[&str]) -> Option<u32> {
        self.u64(candidates).and_then(|n| u32::try_from(n).ok())
    }

    pub(crate) fn flag(&self, candidates: &[&str]) -> bool {
        self.value(candidates).and_then(coerce_bool).unwrap_or(false)
    }

    /// Array under the first candidate that holds one.
    pub(crate) fn array(&self, candidates: &[&str]) -> &'a [Value] {
        self.value(candidates)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn value_type(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strings and numbers become trimmed, non-empty strings.
pub(crate) fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative integers, given as numbers or numeric strings.
pub(crate) fn coerce_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    }
}

/// Signed integers, given as numbers or numeric strings.
pub(crate) fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

/// Booleans, `"1"`/`"0"`, `"true"`/`"false"` and numbers.
pub(crate) fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Decode the handful of HTML entities upstream leaves in display strings.
pub(crate) fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
