//! Public JioSaavn client.
//!
//! Every operation follows the same pipeline: build the request URL, fetch it
//! through the configured [`Transport`], reject failure envelopes, normalize
//! the payload, and wrap the outcome in an [`ApiResult`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use super::endpoints;
use super::transport::{ReqwestTransport, Transport};
use crate::config::ClientOptions;
use crate::converters::{self, artist::collection, Raw, SongEnvelope};
use crate::error::{ApiResult, Context, ErrorKind, Result, SaavnError};
use crate::links::{self, EntityType};
use crate::models::{
    Album, AlbumPreview, Artist, ArtistRef, Entity, Playlist, PlaylistPreview, SearchAll, Song,
};
use crate::pagination::{paginate, Paginated};

/// Ordering of artist song and album listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Popularity,
    Latest,
    Alphabetical,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Popularity => "popularity",
            SortBy::Latest => "latest",
            SortBy::Alphabetical => "alphabetical",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// How much of an artist page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistPageOptions {
    /// Number of top songs.
    pub song_count: u32,
    /// Number of top albums.
    pub album_count: u32,
    /// 0-based.
    pub page: u32,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ArtistPageOptions {
    fn default() -> Self {
        Self {
            song_count: 10,
            album_count: 10,
            page: 0,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ArtistPageOptions {
    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("n_song", self.song_count.to_string()),
            ("n_album", self.album_count.to_string()),
            ("page", self.page.to_string()),
            ("sort_order", self.sort_order.as_str().to_string()),
            ("category", self.sort_by.as_str().to_string()),
        ]
    }
}

/// JioSaavn catalog client.
///
/// Holds no mutable state; clones share the underlying transport.
///
/// # Example
///
/// ```rust,no_run
/// use rsaavn::SaavnApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SaavnApi::new()?;
///     let result = api.search_songs("believer", 1, 10).await;
///     if let Some(page) = result.data() {
///         for song in &page.results {
///             println!("{} by {}", song.title, song.artists.primary_names(", "));
///         }
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SaavnApi {
    base_url: Url,
    timeout: Option<Duration>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for SaavnApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaavnApi")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SaavnApi {
    /// Create a client with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client from explicit options.
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        let base_url = Url::parse(&options.base_url).map_err(|e| {
            SaavnError::validation(format!("Invalid base URL: {}", e))
                .with_context("base_url", &options.base_url)
        })?;

        let transport: Arc<dyn Transport> = match options.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&options.user_agent)?),
        };

        Ok(Self {
            base_url,
            timeout: options.timeout,
            transport,
        })
    }

    /// A copy of this client whose requests use a different deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn request_url(&self, endpoint: &str, params: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("__call", endpoint);
            for (key, value) in endpoints::COMMON_PARAMS {
                query.append_pair(key, value);
            }
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        url
    }

    /// Fetch one endpoint and return its validated JSON payload.
    async fn call(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        self.fetch(endpoint, params)
            .await
            .map_err(|e| e.with_context("endpoint", endpoint))
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self.request_url(endpoint, params);
        debug!("Calling {} with params: {:?}", endpoint, params);

        let request = self.transport.get(&url);
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, request).await.map_err(|_| {
                SaavnError::network(format!("Request timed out after {}ms", limit.as_millis()))
            })??,
            None => request.await?,
        };

        if !response.is_success() {
            return Err(SaavnError::api(format!(
                "Upstream responded with status {}",
                response.status
            ))
            .with_status(response.status));
        }

        let data: Value = serde_json::from_str(&response.body)
            .map_err(|e| SaavnError::from(e).with_status(response.status))?;

        check_envelope(data)
    }

    /// Run an operation body and convert its outcome into an [`ApiResult`].
    async fn run<T, F>(&self, operation: &'static str, context: Context, work: F) -> ApiResult<T>
    where
        F: Future<Output = Result<T>>,
    {
        match work.await {
            Ok(data) => ApiResult::Success { data },
            Err(err) => {
                let kind = err.kind();
                let err = SaavnError::wrap(err, kind, context).with_context("operation", operation);
                error!(
                    operation,
                    record = %err.to_record().to_json(),
                    "JioSaavn operation failed: {}",
                    err
                );
                ApiResult::Failure {
                    message: err.message().to_string(),
                    code: err.kind(),
                }
            }
        }
    }

    /// Search every entity type at once, grouped into sections.
    pub async fn search_all(&self, query: &str) -> ApiResult<SearchAll> {
        self.run("search_all", query_context(query), async {
            let query = require_query(query)?;
            let data = self
                .call(endpoints::SEARCH_ALL, &[("query", query.to_string())])
                .await?;
            converters::parse_search_all(&data)
        })
        .await
    }

    /// Search songs. `page` is 1-based.
    pub async fn search_songs(&self, query: &str, page: u32, limit: u32) -> ApiResult<Paginated<Song>> {
        self.run("search_songs", query_context(query), async {
            let data = self.search(endpoints::SEARCH_SONGS, query, page, limit).await?;
            let songs = results(&data)
                .iter()
                .filter_map(|s| converters::parse_song(s).ok())
                .filter(|song| song.is_valid())
                .collect();
            Ok(paginate(songs, data.get("total"), page, limit))
        })
        .await
    }

    /// Search albums. `page` is 1-based.
    pub async fn search_albums(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> ApiResult<Paginated<AlbumPreview>> {
        self.run("search_albums", query_context(query), async {
            let data = self.search(endpoints::SEARCH_ALBUMS, query, page, limit).await?;
            let albums = results(&data)
                .iter()
                .filter_map(|a| converters::parse_album_preview(a).ok())
                .filter(|album| album.is_valid())
                .collect();
            Ok(paginate(albums, data.get("total"), page, limit))
        })
        .await
    }

    /// Search artists. `page` is 1-based.
    pub async fn search_artists(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> ApiResult<Paginated<ArtistRef>> {
        self.run("search_artists", query_context(query), async {
            let data = self.search(endpoints::SEARCH_ARTISTS, query, page, limit).await?;
            let artists = results(&data)
                .iter()
                .filter_map(converters::parse_artist_ref)
                .filter(|artist| artist.is_valid())
                .collect();
            Ok(paginate(artists, data.get("total"), page, limit))
        })
        .await
    }

    /// Search playlists. `page` is 1-based.
    pub async fn search_playlists(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> ApiResult<Paginated<PlaylistPreview>> {
        self.run("search_playlists", query_context(query), async {
            let data = self
                .search(endpoints::SEARCH_PLAYLISTS, query, page, limit)
                .await?;
            let playlists = results(&data)
                .iter()
                .filter_map(|p| converters::parse_playlist_preview(p).ok())
                .filter(|playlist| playlist.is_valid())
                .collect();
            Ok(paginate(playlists, data.get("total"), page, limit))
        })
        .await
    }

    async fn search(&self, endpoint: &str, query: &str, page: u32, limit: u32) -> Result<Value> {
        let query = require_query(query)?;
        self.call(
            endpoint,
            &[
                ("q", query.to_string()),
                ("p", page.to_string()),
                ("n", limit.to_string()),
            ],
        )
        .await
    }

    /// Get a song by id.
    pub async fn get_song_by_id(&self, id: &str) -> ApiResult<Song> {
        self.run("get_song_by_id", id_context(id), async {
            let songs = self.song_details(&[id]).await?;
            first_found(songs, id)
        })
        .await
    }

    /// Get several songs in one request, in the order the ids were given.
    ///
    /// Ids upstream does not know are skipped.
    pub async fn get_songs_by_ids(&self, ids: &[&str]) -> ApiResult<Vec<Song>> {
        self.run("get_songs_by_ids", id_context(&ids.join(",")), async {
            let songs = self.song_details(ids).await?;
            let songs: Vec<Song> = songs.into_iter().filter(|song| song.is_valid()).collect();
            if songs.is_empty() {
                return Err(SaavnError::not_found("Songs not found"));
            }
            Ok(songs)
        })
        .await
    }

    async fn song_details(&self, ids: &[&str]) -> Result<Vec<Song>> {
        let ids: Vec<&str> = ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()).collect();
        if ids.is_empty() {
            return Err(SaavnError::validation("At least one song id is required"));
        }

        let data = self
            .call(endpoints::SONG_DETAILS, &[("pids", ids.join(","))])
            .await?;

        let shape = if data.get("songs").is_some() {
            SongEnvelope::List
        } else {
            SongEnvelope::Keyed
        };
        let mut songs = converters::parse_song_envelope(&data, shape)?;
        songs.sort_by_key(|song| ids.iter().position(|id| *id == song.id).unwrap_or(usize::MAX));
        Ok(songs)
    }

    /// Get a song from its share link.
    pub async fn get_song_by_link(&self, link: &str) -> ApiResult<Song> {
        self.run("get_song_by_link", link_context(link), async {
            let token = links::parse_share_link(link, Some(EntityType::Song))?.token;
            let data = self.by_token(&token, EntityType::Song, Vec::new()).await?;
            let songs = converters::parse_song_envelope(&data, SongEnvelope::List)?;
            first_found(songs, &token)
        })
        .await
    }

    /// Recommended songs for a seed song.
    ///
    /// Creates a radio station seeded with the song, then fetches `limit`
    /// songs from it.
    pub async fn get_song_suggestions(&self, id: &str, limit: u32) -> ApiResult<Vec<Song>> {
        self.run("get_song_suggestions", id_context(id), async {
            let id = require_id(id)?;
            let station_id = self.create_station(id).await?;
            debug!("Created station {} for song {}", station_id, id);

            let data = self
                .call(
                    endpoints::STATION_SONGS,
                    &[
                        ("stationid", station_id.clone()),
                        ("k", limit.to_string()),
                        ("next", "1".to_string()),
                    ],
                )
                .await
                .map_err(|e| e.with_context("station_id", &station_id))?;

            let songs = converters::parse_song_envelope(&data, SongEnvelope::Station)?;
            Ok(songs.into_iter().filter(|song| song.is_valid()).collect())
        })
        .await
    }

    async fn create_station(&self, song_id: &str) -> Result<String> {
        let entity_id = serde_json::to_string(&[song_id])?;
        let data = self
            .call(
                endpoints::CREATE_STATION,
                &[
                    ("entity_id", entity_id),
                    ("entity_type", "queue".to_string()),
                ],
            )
            .await?;

        Raw::new(&data)
            .string(&["stationid"])
            .ok_or_else(|| SaavnError::api("Station response has no station id"))
    }

    /// Lyrics are no longer served by upstream.
    pub async fn get_song_lyrics(&self, id: &str) -> ApiResult<String> {
        self.run("get_song_lyrics", id_context(id), async {
            Err(SaavnError::deprecated("get_song_lyrics"))
        })
        .await
    }

    pub async fn get_album_by_id(&self, id: &str) -> ApiResult<Album> {
        self.run("get_album_by_id", id_context(id), async {
            let id = require_id(id)?;
            let data = self
                .call(endpoints::ALBUM_DETAILS, &[("albumid", id.to_string())])
                .await?;
            ensure_found(converters::parse_album(&data)?, id)
        })
        .await
    }

    pub async fn get_album_by_link(&self, link: &str) -> ApiResult<Album> {
        self.run("get_album_by_link", link_context(link), async {
            let token = links::parse_share_link(link, Some(EntityType::Album))?.token;
            let data = self.by_token(&token, EntityType::Album, Vec::new()).await?;
            ensure_found(converters::parse_album(&data)?, &token)
        })
        .await
    }

    /// Get a playlist by id. `page` is 0-based.
    pub async fn get_playlist_by_id(&self, id: &str, page: u32, limit: u32) -> ApiResult<Playlist> {
        self.run("get_playlist_by_id", id_context(id), async {
            let id = require_id(id)?;
            let data = self
                .call(
                    endpoints::PLAYLIST_DETAILS,
                    &[
                        ("listid", id.to_string()),
                        ("p", page.to_string()),
                        ("n", limit.to_string()),
                    ],
                )
                .await?;
            ensure_found(converters::parse_playlist(&data)?, id)
        })
        .await
    }

    /// Get a playlist from its share link. `page` is 0-based.
    pub async fn get_playlist_by_link(&self, link: &str, page: u32, limit: u32) -> ApiResult<Playlist> {
        self.run("get_playlist_by_link", link_context(link), async {
            let token = links::parse_share_link(link, Some(EntityType::Playlist))?.token;
            let params = vec![("p", page.to_string()), ("n", limit.to_string())];
            let data = self.by_token(&token, EntityType::Playlist, params).await?;
            ensure_found(converters::parse_playlist(&data)?, &token)
        })
        .await
    }

    pub async fn get_artist_by_id(&self, id: &str, options: ArtistPageOptions) -> ApiResult<Artist> {
        self.run("get_artist_by_id", id_context(id), async {
            let id = require_id(id)?;
            let mut params = vec![("artistId", id.to_string())];
            params.extend(options.params());
            let data = self.call(endpoints::ARTIST_DETAILS, &params).await?;
            ensure_found(converters::parse_artist(&data)?, id)
        })
        .await
    }

    pub async fn get_artist_by_link(&self, link: &str, options: ArtistPageOptions) -> ApiResult<Artist> {
        self.run("get_artist_by_link", link_context(link), async {
            let token = links::parse_share_link(link, Some(EntityType::Artist))?.token;
            let data = self
                .by_token(&token, EntityType::Artist, options.params())
                .await?;
            ensure_found(converters::parse_artist(&data)?, &token)
        })
        .await
    }

    /// Songs of an artist. `page` is 0-based.
    pub async fn get_artist_songs(
        &self,
        id: &str,
        page: u32,
        limit: u32,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> ApiResult<Paginated<Song>> {
        self.run("get_artist_songs", id_context(id), async {
            let data = self
                .artist_listing(endpoints::ARTIST_SONGS, id, page, limit, sort_by, sort_order)
                .await?;
            let raw = Raw::new(&data);
            let songs = collection(&raw, "topSongs", "songs")
                .iter()
                .filter_map(|s| converters::parse_song(s).ok())
                .filter(|song| song.is_valid())
                .collect();
            Ok(paginate(songs, nested_total(&data, "topSongs"), page, limit))
        })
        .await
    }

    /// Albums of an artist. `page` is 0-based.
    pub async fn get_artist_albums(
        &self,
        id: &str,
        page: u32,
        limit: u32,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> ApiResult<Paginated<AlbumPreview>> {
        self.run("get_artist_albums", id_context(id), async {
            let data = self
                .artist_listing(endpoints::ARTIST_ALBUMS, id, page, limit, sort_by, sort_order)
                .await?;
            let raw = Raw::new(&data);
            let albums = collection(&raw, "topAlbums", "albums")
                .iter()
                .filter_map(|a| converters::parse_album_preview(a).ok())
                .filter(|album| album.is_valid())
                .collect();
            Ok(paginate(albums, nested_total(&data, "topAlbums"), page, limit))
        })
        .await
    }

    async fn artist_listing(
        &self,
        endpoint: &str,
        id: &str,
        page: u32,
        limit: u32,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> Result<Value> {
        let id = require_id(id)?;
        self.call(
            endpoint,
            &[
                ("artistId", id.to_string()),
                ("page", page.to_string()),
                ("n_song", limit.to_string()),
                ("n_album", limit.to_string()),
                ("sort_order", sort_order.as_str().to_string()),
                ("category", sort_by.as_str().to_string()),
            ],
        )
        .await
    }

    /// Resolve a share-link token through `webapi.get`.
    async fn by_token(
        &self,
        token: &str,
        entity_type: EntityType,
        mut extra: Vec<(&'static str, String)>,
    ) -> Result<Value> {
        let mut params = vec![
            ("token", token.to_string()),
            ("type", entity_type.as_str().to_string()),
        ];
        params.append(&mut extra);
        self.call(endpoints::LINK_DETAILS, &params)
            .await
            .map_err(|e| e.with_context("token", token))
    }
}

/// Reject failure envelopes before anything is normalized.
fn check_envelope(data: Value) -> Result<Value> {
    match &data {
        Value::Null => return Err(SaavnError::api("Empty response from upstream")),
        Value::Array(items) if items.is_empty() => {
            return Err(SaavnError::not_found("No data found for the request"));
        }
        Value::Object(map) => {
            if let Some(err) = map.get("error").filter(|e| !is_blank(e)) {
                return Err(SaavnError::wrap(err.clone(), ErrorKind::Api, Context::new()));
            }
            if map.get("status").and_then(Value::as_str) == Some("failure") {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Upstream reported a failure");
                return Err(SaavnError::api(message));
            }
        }
        _ => {}
    }
    Ok(data)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn results(data: &Value) -> &[Value] {
    data.get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn nested_total<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).and_then(|wrapper| wrapper.get("total"))
}

fn ensure_found<T: Entity>(entity: T, id: &str) -> Result<T> {
    if entity.is_valid() {
        Ok(entity)
    } else {
        Err(SaavnError::not_found(format!("{} not found", T::LABEL)).with_context("id", id))
    }
}

fn first_found(songs: Vec<Song>, id: &str) -> Result<Song> {
    match songs.into_iter().next() {
        Some(song) => ensure_found(song, id),
        None => Err(SaavnError::not_found("Song not found").with_context("id", id)),
    }
}

fn require_query(query: &str) -> Result<&str> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SaavnError::validation("Search query must not be empty"));
    }
    Ok(query)
}

fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(SaavnError::validation("Id must not be empty"));
    }
    Ok(id)
}

fn query_context(query: &str) -> Context {
    Context::from([("query".to_string(), query.to_string())])
}

fn id_context(id: &str) -> Context {
    Context::from([("id".to_string(), id.to_string())])
}

fn link_context(link: &str) -> Context {
    Context::from([("link".to_string(), link.to_string())])
}
