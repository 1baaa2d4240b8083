//! Upstream `__call` names and the query parameters sent with every request.

pub const SEARCH_ALL: &str = "autocomplete.get";
pub const SEARCH_SONGS: &str = "search.getResults";
pub const SEARCH_ALBUMS: &str = "search.getAlbumResults";
pub const SEARCH_ARTISTS: &str = "search.getArtistResults";
pub const SEARCH_PLAYLISTS: &str = "search.getPlaylistResults";

pub const SONG_DETAILS: &str = "song.getDetails";
pub const ALBUM_DETAILS: &str = "content.getAlbumDetails";
pub const PLAYLIST_DETAILS: &str = "playlist.getDetails";
pub const ARTIST_DETAILS: &str = "artist.getArtistPageDetails";
pub const ARTIST_SONGS: &str = "artist.getArtistMoreSong";
pub const ARTIST_ALBUMS: &str = "artist.getArtistMoreAlbum";

/// Resolves a share-link token of any entity type.
pub const LINK_DETAILS: &str = "webapi.get";

pub const CREATE_STATION: &str = "webradio.createEntityStation";
pub const STATION_SONGS: &str = "webradio.getSong";

/// Parameters appended to every request.
pub const COMMON_PARAMS: [(&str, &str); 4] = [
    ("_format", "json"),
    ("_marker", "0"),
    ("api_version", "4"),
    ("ctx", "web6dot0"),
];
