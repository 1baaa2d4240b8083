//! Data models for normalized JioSaavn entities.
//!
//! Every value here is built fresh from a response and never mutated
//! afterwards. Optional fields that upstream did not provide are omitted when
//! serialized.

pub mod album;
pub mod artist;
pub mod common;
pub mod playlist;
pub mod search;
pub mod song;

// Re-exports for convenience
pub use album::{Album, AlbumPreview};
pub use artist::{Artist, BioSection, SocialLinks};
pub use common::{ArtistRef, ArtistsGroup, DownloadLink, ImageSource};
pub use playlist::{Playlist, PlaylistPreview};
pub use search::{SearchAll, SearchHit, SearchSection};
pub use song::{Song, SongAlbum, SongPreview};

/// A top-level catalog entity.
pub trait Entity {
    /// Human-readable entity name used in error messages.
    const LABEL: &'static str;

    /// Whether the identifying fields survived normalization.
    ///
    /// An entity failing this check must be reported as not found.
    fn is_valid(&self) -> bool;
}

fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

impl Entity for Song {
    const LABEL: &'static str = "Song";

    fn is_valid(&self) -> bool {
        non_empty(&self.id) && non_empty(&self.title)
    }
}

impl Entity for Album {
    const LABEL: &'static str = "Album";

    fn is_valid(&self) -> bool {
        non_empty(&self.id) && non_empty(&self.title)
    }
}

impl Entity for Playlist {
    const LABEL: &'static str = "Playlist";

    fn is_valid(&self) -> bool {
        non_empty(&self.id) && non_empty(&self.title)
    }
}

impl Entity for Artist {
    const LABEL: &'static str = "Artist";

    fn is_valid(&self) -> bool {
        non_empty(&self.id) && non_empty(&self.name)
    }
}

impl Entity for AlbumPreview {
    const LABEL: &'static str = "Album";

    fn is_valid(&self) -> bool {
        non_empty(&self.id) && non_empty(&self.title)
    }
}

impl Entity for PlaylistPreview {
    const LABEL: &'static str = "Playlist";

    fn is_valid(&self) -> bool {
        non_empty(&self.id) && non_empty(&self.title)
    }
}

impl Entity for ArtistRef {
    const LABEL: &'static str = "Artist";

    fn is_valid(&self) -> bool {
        non_empty(&self.id) && non_empty(&self.name)
    }
}
