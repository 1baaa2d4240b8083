use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use rsaavn::{links, ApiResult, ArtistPageOptions, ClientOptions, EntityType, SaavnApi};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rsaavn-cli")]
#[command(about = "Query the JioSaavn catalog", long_about = None)]
struct Cli {
    /// Override the API endpoint
    #[arg(long, env = "RSAAVN_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        query: String,

        #[arg(short, long, value_enum, default_value_t = SearchType::All)]
        r#type: SearchType,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Fetch a song, album, artist or playlist by id or share link
    Get {
        id_or_url: String,

        /// Entity type; detected from the link when omitted
        #[arg(short, long, value_enum)]
        r#type: Option<ContentType>,
    },
    /// Recommended songs for a seed song
    Suggest {
        song_id: String,

        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SearchType {
    All,
    Songs,
    Albums,
    Artists,
    Playlists,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ContentType {
    Song,
    Album,
    Artist,
    Playlist,
}

fn detected_type(entity_type: EntityType) -> Option<ContentType> {
    match entity_type {
        EntityType::Song => Some(ContentType::Song),
        EntityType::Album => Some(ContentType::Album),
        EntityType::Artist => Some(ContentType::Artist),
        EntityType::Playlist => Some(ContentType::Playlist),
        EntityType::Show => None,
    }
}

fn print<T: Serialize>(result: &ApiResult<T>) -> Result<bool, serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(result.is_success())
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = ClientOptions::default().timeout(Duration::from_secs(cli.timeout));
    if let Some(base_url) = cli.base_url {
        options = options.base_url(base_url);
    }
    let api = SaavnApi::with_options(options)?;

    let success = match cli.command {
        Commands::Search {
            query,
            r#type,
            page,
            limit,
        } => match r#type {
            SearchType::All => print(&api.search_all(&query).await)?,
            SearchType::Songs => print(&api.search_songs(&query, page, limit).await)?,
            SearchType::Albums => print(&api.search_albums(&query, page, limit).await)?,
            SearchType::Artists => print(&api.search_artists(&query, page, limit).await)?,
            SearchType::Playlists => print(&api.search_playlists(&query, page, limit).await)?,
        },
        Commands::Get { id_or_url, r#type } => {
            let link = links::parse(&id_or_url);
            let content_type = r#type
                .or_else(|| link.as_ref().and_then(|l| detected_type(l.entity_type)))
                .unwrap_or(ContentType::Song);
            let by_link = link.is_some();

            match (content_type, by_link) {
                (ContentType::Song, true) => print(&api.get_song_by_link(&id_or_url).await)?,
                (ContentType::Song, false) => print(&api.get_song_by_id(&id_or_url).await)?,
                (ContentType::Album, true) => print(&api.get_album_by_link(&id_or_url).await)?,
                (ContentType::Album, false) => print(&api.get_album_by_id(&id_or_url).await)?,
                (ContentType::Artist, true) => print(
                    &api.get_artist_by_link(&id_or_url, ArtistPageOptions::default())
                        .await,
                )?,
                (ContentType::Artist, false) => print(
                    &api.get_artist_by_id(&id_or_url, ArtistPageOptions::default())
                        .await,
                )?,
                (ContentType::Playlist, true) => {
                    print(&api.get_playlist_by_link(&id_or_url, 0, 50).await)?
                }
                (ContentType::Playlist, false) => {
                    print(&api.get_playlist_by_id(&id_or_url, 0, 50).await)?
                }
            }
        }
        Commands::Suggest { song_id, limit } => {
            print(&api.get_song_suggestions(&song_id, limit).await)?
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
