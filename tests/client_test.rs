use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rsaavn::error::Result;
use rsaavn::{
    ApiResult, ArtistPageOptions, ClientOptions, ErrorKind, RawResponse, SaavnApi, SaavnError,
    SortBy, SortOrder, Transport,
};
use serde_json::{json, Value};
use url::Url;

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(u16, &'static str),
    Delayed(Duration, Value),
    Unreachable,
}

/// Transport that answers by `__call` name and records every request.
#[derive(Default)]
struct MockTransport {
    routes: Mutex<HashMap<&'static str, Reply>>,
    calls: Mutex<Vec<Url>>,
}

impl MockTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn on(self: &Arc<Self>, endpoint: &'static str, reply: Reply) -> Arc<Self> {
        self.routes.lock().unwrap().insert(endpoint, reply);
        Arc::clone(self)
    }

    fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }

    fn endpoints(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|url| param(url, "__call").unwrap_or_default())
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(url.clone());

        let endpoint = param(url, "__call").unwrap_or_default();
        let reply = self.routes.lock().unwrap().get(endpoint.as_str()).cloned();

        match reply {
            Some(Reply::Json(body)) => Ok(RawResponse::new(200, body.to_string())),
            Some(Reply::Status(status, body)) => Ok(RawResponse::new(status, body)),
            Some(Reply::Delayed(delay, body)) => {
                tokio::time::sleep(delay).await;
                Ok(RawResponse::new(200, body.to_string()))
            }
            Some(Reply::Unreachable) => Err(SaavnError::network("connection refused")),
            None => Ok(RawResponse::new(404, "no route")),
        }
    }
}

fn param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn client(transport: &Arc<MockTransport>) -> SaavnApi {
    let transport: Arc<dyn Transport> = transport.clone();
    SaavnApi::with_options(
        ClientOptions::default()
            .base_url("https://saavn.test/api.php")
            .transport(transport),
    )
    .unwrap()
}

fn failure_code<T>(result: &ApiResult<T>) -> ErrorKind {
    result.code().expect("operation should have failed")
}

#[tokio::test]
async fn test_search_songs_without_total() {
    let transport = MockTransport::new().on(
        "search.getResults",
        Reply::Json(json!({"results": [{"id": "s1", "title": "Believer"}]})),
    );
    let api = client(&transport);

    let result = api.search_songs("believer", 1, 10).await;
    let page = result.data().expect("search should succeed");
    assert_eq!(page.total, 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
    assert_eq!(page.results[0].id, "s1");

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["results"][0]["title"], "Believer");

    let call = &transport.calls()[0];
    assert_eq!(param(call, "q").as_deref(), Some("believer"));
    assert_eq!(param(call, "p").as_deref(), Some("1"));
    assert_eq!(param(call, "n").as_deref(), Some("10"));
    assert_eq!(param(call, "_format").as_deref(), Some("json"));
}

#[tokio::test]
async fn test_search_uses_upstream_total_and_skips_junk() {
    let transport = MockTransport::new().on(
        "search.getAlbumResults",
        Reply::Json(json!({
            "total": "120",
            "results": [
                {"id": "10510401", "title": "Evolve", "more_info": {"song_count": "12"}},
                "junk"
            ]
        })),
    );
    let api = client(&transport);

    let page = api.search_albums("evolve", 2, 1).await.into_data().unwrap();
    assert_eq!(page.total, 120);
    assert_eq!(page.page, 2);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].song_count, Some(12));
}

#[tokio::test]
async fn test_empty_query_is_rejected_locally() {
    let transport = MockTransport::new();
    let api = client(&transport);

    let result = api.search_artists("   ", 1, 10).await;
    assert_eq!(failure_code(&result), ErrorKind::Validation);
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_search_all_sections() {
    let transport = MockTransport::new().on(
        "autocomplete.get",
        Reply::Json(json!({
            "songs": {"position": 2, "data": [{"id": "s1", "title": "Believer", "type": "song"}]},
            "albums": {"position": 1, "data": []}
        })),
    );
    let api = client(&transport);

    let all = api.search_all("believer").await.into_data().unwrap();
    assert_eq!(all.songs.position, 2);
    assert_eq!(all.songs.results[0].id, "s1");
    assert!(all.playlists.results.is_empty());
    assert_eq!(
        param(&transport.calls()[0], "query").as_deref(),
        Some("believer")
    );
}

#[tokio::test]
async fn test_song_by_id_shapes() {
    let transport = MockTransport::new().on(
        "song.getDetails",
        Reply::Json(json!({"songs": [{"id": "s1", "title": "Believer"}]})),
    );
    let song = client(&transport).get_song_by_id("s1").await.into_data().unwrap();
    assert_eq!(song.title, "Believer");
    assert_eq!(param(&transport.calls()[0], "pids").as_deref(), Some("s1"));

    let transport = MockTransport::new().on(
        "song.getDetails",
        Reply::Json(json!({"s1": {"id": "s1", "song": "Believer"}})),
    );
    let song = client(&transport).get_song_by_id("s1").await.into_data().unwrap();
    assert_eq!(song.title, "Believer");
}

#[tokio::test]
async fn test_songs_by_ids_keep_request_order() {
    let transport = MockTransport::new().on(
        "song.getDetails",
        Reply::Json(json!({
            "a1": {"id": "a1", "title": "First"},
            "z9": {"id": "z9", "title": "Second"}
        })),
    );
    let songs = client(&transport)
        .get_songs_by_ids(&["z9", "a1"])
        .await
        .into_data()
        .unwrap();

    assert_eq!(songs[0].id, "z9");
    assert_eq!(songs[1].id, "a1");
    assert_eq!(param(&transport.calls()[0], "pids").as_deref(), Some("z9,a1"));
}

#[tokio::test]
async fn test_songs_list_shape_keeps_request_order() {
    let transport = MockTransport::new().on(
        "song.getDetails",
        Reply::Json(json!({
            "songs": [
                {"id": "a1", "title": "First"},
                {"id": "z9", "title": "Second"}
            ]
        })),
    );
    let songs = client(&transport)
        .get_songs_by_ids(&["z9", "a1"])
        .await
        .into_data()
        .unwrap();

    let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["z9", "a1"]);
}

#[tokio::test]
async fn test_stray_entries_in_song_list_are_skipped() {
    let transport = MockTransport::new().on(
        "song.getDetails",
        Reply::Json(json!({"songs": [{"id": "s1", "title": "Believer"}, null]})),
    );
    let song = client(&transport).get_song_by_id("s1").await.into_data().unwrap();
    assert_eq!(song.id, "s1");
}

#[tokio::test]
async fn test_search_drops_entries_without_identity() {
    let transport = MockTransport::new()
        .on(
            "search.getResults",
            Reply::Json(json!({
                "results": [
                    {"id": "s1", "title": "Believer"},
                    {"id": "", "title": "Nameless"},
                    {"id": "s3"}
                ]
            })),
        )
        .on(
            "search.getArtistResults",
            Reply::Json(json!({"results": [{"id": "456863", "name": "Imagine Dragons"}, {"name": "Ghost"}]})),
        );
    let api = client(&transport);

    let page = api.search_songs("believer", 1, 10).await.into_data().unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, "s1");
    assert_eq!(page.total, 1);

    let page = api.search_artists("imagine", 1, 10).await.into_data().unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name, "Imagine Dragons");
}

#[tokio::test]
async fn test_unknown_song_is_not_found() {
    let transport = MockTransport::new().on("song.getDetails", Reply::Json(json!([])));
    let result = client(&transport).get_song_by_id("nope").await;
    assert_eq!(failure_code(&result), ErrorKind::NotFound);

    let transport = MockTransport::new().on(
        "song.getDetails",
        Reply::Json(json!({"songs": [{"id": "s1", "title": ""}]})),
    );
    let result = client(&transport).get_song_by_id("s1").await;
    assert_eq!(failure_code(&result), ErrorKind::NotFound);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": false, "message": "Song not found", "code": "NOT_FOUND"})
    );
}

#[tokio::test]
async fn test_invalid_link_never_reaches_upstream() {
    let transport = MockTransport::new();
    let api = client(&transport);

    let result = api
        .get_album_by_link("https://www.jiosaavn.com/song/believer/KD8zfAZpZFo")
        .await;
    assert_eq!(failure_code(&result), ErrorKind::Validation);

    let result = api.get_song_by_link("https://www.jiosaavn.com/song").await;
    assert_eq!(failure_code(&result), ErrorKind::Validation);

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_link_lookups_send_token_and_type() {
    let transport = MockTransport::new().on(
        "webapi.get",
        Reply::Json(json!({
            "id": "1134543511",
            "title": "Trending Today",
            "type": "playlist",
            "list": [{"id": "s1", "title": "Believer"}]
        })),
    );
    let api = client(&transport);

    let playlist = api
        .get_playlist_by_link(
            "https://www.jiosaavn.com/featured/trending-today/I3kvhipIy73uCJW60TJk1Q__",
            0,
            20,
        )
        .await
        .into_data()
        .unwrap();
    assert_eq!(playlist.id, "1134543511");

    let call = &transport.calls()[0];
    assert_eq!(param(call, "token").as_deref(), Some("I3kvhipIy73uCJW60TJk1Q__"));
    assert_eq!(param(call, "type").as_deref(), Some("playlist"));
    assert_eq!(param(call, "p").as_deref(), Some("0"));
    assert_eq!(param(call, "n").as_deref(), Some("20"));
}

#[tokio::test]
async fn test_song_suggestions_use_a_station() {
    let transport = MockTransport::new()
        .on(
            "webradio.createEntityStation",
            Reply::Json(json!({"stationid": "st-42"})),
        )
        .on(
            "webradio.getSong",
            Reply::Json(json!({
                "1": {"song": {"id": "b", "title": "Second"}},
                "0": {"song": {"id": "a", "title": "First"}},
                "stationid": "st-42"
            })),
        );
    let api = client(&transport);

    let songs = api.get_song_suggestions("KD8zfAZp", 2).await.into_data().unwrap();
    let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);

    assert_eq!(
        transport.endpoints(),
        ["webradio.createEntityStation", "webradio.getSong"]
    );
    let calls = transport.calls();
    assert_eq!(param(&calls[0], "entity_id").as_deref(), Some(r#"["KD8zfAZp"]"#));
    assert_eq!(param(&calls[0], "entity_type").as_deref(), Some("queue"));
    assert_eq!(param(&calls[1], "stationid").as_deref(), Some("st-42"));
    assert_eq!(param(&calls[1], "k").as_deref(), Some("2"));
}

#[tokio::test]
async fn test_station_without_id_fails() {
    let transport = MockTransport::new().on(
        "webradio.createEntityStation",
        Reply::Json(json!({"status": "ok"})),
    );
    let result = client(&transport).get_song_suggestions("KD8zfAZp", 5).await;
    assert_eq!(failure_code(&result), ErrorKind::Api);
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_timeout_aborts_only_that_call() {
    let transport = MockTransport::new()
        .on(
            "content.getAlbumDetails",
            Reply::Delayed(Duration::from_millis(500), json!({"id": "1", "title": "Slow"})),
        )
        .on(
            "song.getDetails",
            Reply::Json(json!({"songs": [{"id": "s1", "title": "Fast"}]})),
        );
    let api = client(&transport);
    let impatient = api.with_timeout(Duration::from_millis(20));

    let result = impatient.get_album_by_id("1").await;
    assert_eq!(failure_code(&result), ErrorKind::Network);

    let result = impatient.get_song_by_id("s1").await;
    assert!(result.is_success());
}

#[tokio::test]
async fn test_upstream_failures_are_classified() {
    let transport = MockTransport::new()
        .on(
            "content.getAlbumDetails",
            Reply::Json(json!({"error": {"code": "INPUT_INVALID", "msg": "Invalid album id"}})),
        )
        .on("playlist.getDetails", Reply::Status(500, "Internal Server Error"))
        .on("artist.getArtistPageDetails", Reply::Unreachable)
        .on("song.getDetails", Reply::Status(200, "<html>not json</html>"));
    let api = client(&transport);

    let result = api.get_album_by_id("1").await;
    assert_eq!(failure_code(&result), ErrorKind::Api);
    assert_eq!(
        serde_json::to_value(&result).unwrap()["message"],
        "Invalid album id"
    );

    let result = api.get_playlist_by_id("1", 0, 10).await;
    assert_eq!(failure_code(&result), ErrorKind::Api);

    let result = api.get_artist_by_id("1", ArtistPageOptions::default()).await;
    assert_eq!(failure_code(&result), ErrorKind::Network);

    let result = api.get_song_by_id("1").await;
    assert_eq!(failure_code(&result), ErrorKind::Api);
}

#[tokio::test]
async fn test_artist_songs_are_paginated() {
    let transport = MockTransport::new().on(
        "artist.getArtistMoreSong",
        Reply::Json(json!({
            "topSongs": {
                "songs": [{"id": "s1", "title": "Believer"}, {"id": "s2", "title": "Thunder"}],
                "total": 311
            }
        })),
    );
    let api = client(&transport);

    let page = api
        .get_artist_songs("456863", 0, 2, SortBy::Latest, SortOrder::Asc)
        .await
        .into_data()
        .unwrap();
    assert_eq!(page.total, 311);
    assert_eq!(page.page, 0);
    assert_eq!(page.results.len(), 2);

    let call = &transport.calls()[0];
    assert_eq!(param(call, "artistId").as_deref(), Some("456863"));
    assert_eq!(param(call, "category").as_deref(), Some("latest"));
    assert_eq!(param(call, "sort_order").as_deref(), Some("asc"));
}

#[tokio::test]
async fn test_artist_albums_fall_back_to_result_count() {
    let transport = MockTransport::new().on(
        "artist.getArtistMoreAlbum",
        Reply::Json(json!({"topAlbums": {"albums": [{"id": "a1", "title": "Evolve"}]}})),
    );
    let page = client(&transport)
        .get_artist_albums("456863", 3, 10, SortBy::default(), SortOrder::default())
        .await
        .into_data()
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.page, 3);
}

#[tokio::test]
async fn test_artist_page() {
    let transport = MockTransport::new().on(
        "artist.getArtistPageDetails",
        Reply::Json(json!({
            "artistId": "456863",
            "name": "Imagine Dragons",
            "topSongs": [{"id": "s1", "title": "Believer"}],
            "bio": [{"text": "An American band.", "sequence": 0}]
        })),
    );
    let artist = client(&transport)
        .get_artist_by_id("456863", ArtistPageOptions::default())
        .await
        .into_data()
        .unwrap();
    assert_eq!(artist.name, "Imagine Dragons");
    assert_eq!(artist.top_songs.len(), 1);
    assert_eq!(artist.bio.len(), 1);
}

#[tokio::test]
async fn test_lyrics_are_deprecated() {
    let transport = MockTransport::new();
    let result = client(&transport).get_song_lyrics("s1").await;
    assert_eq!(failure_code(&result), ErrorKind::DeprecatedMethod);
    assert!(transport.calls().is_empty());
}
