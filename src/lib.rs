//! # rsaavn
//!
//! A Rust client for the JioSaavn music catalog.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rsaavn::SaavnApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SaavnApi::new()?;
//!
//!     // Every operation returns an ApiResult instead of an error
//!     let song = api.get_song_by_link("https://www.jiosaavn.com/song/believer/KD8zfAZpZFo").await;
//!     match song.data() {
//!         Some(song) => {
//!             println!("{} ({:?})", song.title, song.duration_formatted());
//!             for link in &song.download_links {
//!                 println!("  {}: {}", link.bitrate, link.url);
//!             }
//!         }
//!         None => println!("lookup failed: {:?}", song.code()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Search** songs, albums, artists and playlists, separately or all at once
//! - **Lookups** by id or by share link for every entity type
//! - **Artist listings** with pagination and sorting
//! - **Song suggestions** through upstream radio stations
//! - **Download links** at five bitrates, decrypted from the media URL
//!
//! ## Lower-level pieces
//!
//! - [`converters`] - raw payload to model normalization
//! - [`crypto`] - media URL decryption
//! - [`links`] - share link parsing
//! - [`retry`] - optional retry helper for network failures

pub mod api;
pub mod config;
pub mod converters;
pub mod crypto;
pub mod error;
pub mod links;
pub mod models;
pub mod pagination;
pub mod retry;

pub use api::{ArtistPageOptions, RawResponse, ReqwestTransport, SaavnApi, SortBy, SortOrder, Transport};
pub use config::ClientOptions;
pub use error::{ApiResult, ErrorKind, ErrorRecord, SaavnError};
pub use links::{EntityType, ShareLink};
pub use models::{Album, AlbumPreview, Artist, ArtistRef, Playlist, PlaylistPreview, SearchAll, Song, SongPreview};
pub use pagination::Paginated;
