//! Share link parsing.
//!
//! A share link looks like `https://www.jiosaavn.com/<type>/<slug>/<token>`,
//! optionally behind the `/s/` short-link prefix. The entity type comes from
//! the first path segment and the token is always the last one.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SaavnError};

/// Path prefix used by short share links.
const SHORT_LINK_MARKER: &str = "s";

/// Kind of entity a share link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Song,
    Album,
    Artist,
    Playlist,
    Show,
}

impl EntityType {
    /// Value of the upstream `type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Song => "song",
            EntityType::Album => "album",
            EntityType::Artist => "artist",
            EntityType::Playlist => "playlist",
            EntityType::Show => "show",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "song" => Some(EntityType::Song),
            "album" => Some(EntityType::Album),
            "artist" => Some(EntityType::Artist),
            "playlist" | "featured" => Some(EntityType::Playlist),
            "show" => Some(EntityType::Show),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub entity_type: EntityType,
    pub token: String,
}

fn path_segments(link: &str) -> Vec<String> {
    let link = link.trim();

    if let Ok(url) = Url::parse(link) {
        if url.has_host() {
            return url
                .path_segments()
                .map(|segments| {
                    segments
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
        }
    }

    let path = link.split(['?', '#']).next().unwrap_or_default();
    let mut segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    // "www.jiosaavn.com/song/..." without a scheme.
    if !path.starts_with('/') && segments.first().is_some_and(|s| s.contains('.')) {
        segments.remove(0);
    }

    segments
}

/// Parse a share link into its entity type and token.
pub fn parse(link: &str) -> Option<ShareLink> {
    let mut segments = path_segments(link);

    if segments
        .first()
        .is_some_and(|s| s.eq_ignore_ascii_case(SHORT_LINK_MARKER))
    {
        segments.remove(0);
    }

    if segments.len() < 2 {
        return None;
    }

    let entity_type = EntityType::from_segment(&segments[0])?;
    let token = segments.pop()?;

    Some(ShareLink { entity_type, token })
}

/// Parse a share link, rejecting it when its type differs from `expected`.
pub fn extract(link: &str, expected: Option<EntityType>) -> Option<ShareLink> {
    let parsed = parse(link)?;
    match expected {
        Some(expected) if expected != parsed.entity_type => None,
        _ => Some(parsed),
    }
}

/// Extract just the token of a link of the expected type.
pub fn extract_token(link: &str, expected: EntityType) -> Option<String> {
    extract(link, Some(expected)).map(|l| l.token)
}

/// Like [`extract`], but reports failures as validation errors.
pub fn parse_share_link(link: &str, expected: Option<EntityType>) -> Result<ShareLink> {
    extract(link, expected).ok_or_else(|| {
        let message = match expected {
            Some(kind) => format!("Invalid {} link: {}", kind, link),
            None => format!("Invalid share link: {}", link),
        };
        SaavnError::validation(message).with_context("link", link)
    })
}
