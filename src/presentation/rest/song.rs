use axum::Json;
use axum::extract::State;
use garde::Validate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::extract::{QueryOrJson, ValidJson, ValidQuery};
use super::state::{ArcAppState, SongService};
use crate::constant::{MAX_BATCH_LIMIT, MAX_BATCH_OFFSET};
use crate::domain::song::{
    Batch, Song, SongInfo, SongSearch, SongSummary, SongUpdate,
};
use crate::presentation::api_response::Message;
use crate::presentation::error::ApiError;
use crate::utils::MapInto;

const TAG: &str = "Song";

pub fn router() -> OpenApiRouter<ArcAppState> {
    OpenApiRouter::new()
        .routes(routes!(create_song))
        .routes(routes!(song_info))
        .routes(routes!(update_song))
        .routes(routes!(delete_song))
        .routes(routes!(song_lyrics))
        .routes(routes!(search_songs))
}

#[utoipa::path(
    post,
    tag = TAG,
    path = "/create",
    request_body = Song,
    responses(
        (status = 200, body = Message),
        ApiError
    ),
)]
async fn create_song(
    State(service): State<SongService>,
    ValidJson(song): ValidJson<Song>,
) -> Result<Message, ApiError> {
    service.create(&song).await?;

    Ok(Message::ok())
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/info",
    params(Song),
    responses(
        (status = 200, body = SongInfo),
        ApiError
    ),
)]
async fn song_info(
    State(service): State<SongService>,
    ValidQuery(song): ValidQuery<Song>,
) -> Result<Json<SongInfo>, ApiError> {
    service.info(&song).await.map_into()
}

#[utoipa::path(
    patch,
    tag = TAG,
    path = "/update",
    params(Song),
    request_body = SongUpdate,
    responses(
        (status = 200, body = Message),
        ApiError
    ),
)]
async fn update_song(
    State(service): State<SongService>,
    ValidQuery(song): ValidQuery<Song>,
    ValidJson(update): ValidJson<SongUpdate>,
) -> Result<Message, ApiError> {
    service.update(&song, &update).await?;

    Ok(Message::ok())
}

#[utoipa::path(
    delete,
    tag = TAG,
    path = "/delete",
    params(Song),
    responses(
        (status = 200, body = Message),
        ApiError
    ),
)]
async fn delete_song(
    State(service): State<SongService>,
    ValidQuery(song): ValidQuery<Song>,
) -> Result<Message, ApiError> {
    service.delete(&song).await?;

    Ok(Message::ok())
}

#[derive(Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
struct LyricsQuery {
    #[garde(length(min = 1))]
    group: String,
    #[serde(rename = "song")]
    #[garde(length(min = 1))]
    song_name: String,
    #[garde(range(max = MAX_BATCH_OFFSET))]
    offset: u64,
    #[garde(range(min = 1, max = MAX_BATCH_LIMIT))]
    limit: u64,
}

impl LyricsQuery {
    fn into_parts(self) -> (Song, Batch) {
        (
            Song {
                group: self.group,
                song_name: self.song_name,
            },
            Batch {
                offset: self.offset,
                limit: self.limit,
            },
        )
    }
}

#[derive(Serialize, ToSchema)]
struct LyricsResponse {
    lyrics: Vec<String>,
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/lyrics",
    params(LyricsQuery),
    responses(
        (status = 200, body = LyricsResponse),
        ApiError
    ),
)]
async fn song_lyrics(
    State(service): State<SongService>,
    ValidQuery(query): ValidQuery<LyricsQuery>,
) -> Result<Json<LyricsResponse>, ApiError> {
    let (song, batch) = query.into_parts();

    let lyrics = service.lyrics(&song, batch).await?;

    Ok(Json(LyricsResponse { lyrics }))
}

#[derive(Serialize, ToSchema)]
struct SearchResponse {
    songs: Vec<SongSummary>,
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/search",
    params(SongSearch),
    request_body(
        content = SongSearch,
        description = "Optional, replaces the query string when present"
    ),
    responses(
        (status = 200, body = SearchResponse),
        ApiError
    ),
)]
async fn search_songs(
    State(service): State<SongService>,
    QueryOrJson(search): QueryOrJson<SongSearch>,
) -> Result<Json<SearchResponse>, ApiError> {
    let songs = service.search(&search).await?;

    Ok(Json(SearchResponse { songs }))
}
