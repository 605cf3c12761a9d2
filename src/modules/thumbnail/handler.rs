use super::error::ThumbnailError;
use super::service::{ThumbnailService, ThumbnailUpload};
use crate::common::response::{ApiError, ErrorResponse};
use crate::common::upload::{read_field, MAX_UPLOAD_SIZE};
use crate::modules::video::model::Video;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;
use uuid::Uuid;

/// Upload Video Thumbnail
/// Caches the image, writes it under the assets directory and records its URL
#[utoipa::path(
    post,
    path = "/api/thumbnail_upload/{video_id}",
    params(("video_id" = Uuid, Path, description = "Video ID")),
    request_body(content = String, content_type = "multipart/form-data", description = "File part named `thumbnail`"),
    responses(
        (status = 200, description = "Thumbnail stored", body = Video),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "Payload too large", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Thumbnails",
    security(("bearer_auth" = []))
)]
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Video>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        ApiError::new("Failed to parse multipart form", e.status()).with_cause(e.body_text())
    })?;

    // Other parts are skipped; the first `thumbnail` part wins.
    let field = loop {
        match multipart.next_field().await.map_err(ThumbnailError::from)? {
            Some(field) if field.name() == Some("thumbnail") => break field,
            Some(_) => continue,
            None => return Err(ThumbnailError::MissingThumbnail.into()),
        }
    };

    let media_type = field
        .content_type()
        .ok_or(ThumbnailError::MissingContentType)?
        .to_string();
    let extension = ThumbnailService::extension_for(&media_type)?;

    let video = ThumbnailService::authorize_upload(&state, &video_id, &headers).await?;

    info!("Receiving thumbnail for video {} ({})", video.id, media_type);
    let data = read_field(field, MAX_UPLOAD_SIZE)
        .await
        .map_err(ThumbnailError::Read)?;

    let video = ThumbnailService::save(
        &state,
        &video,
        ThumbnailUpload {
            media_type,
            extension,
            data,
        },
    )
    .await?;

    Ok(Json(video))
}

/// Get Video Thumbnail
/// Serves the most recently uploaded thumbnail from memory
#[utoipa::path(
    get,
    path = "/api/thumbnails/{video_id}",
    params(("video_id" = Uuid, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Thumbnail image", body = Vec<u8>),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Thumbnail not found", body = ErrorResponse)
    ),
    tag = "Thumbnails"
)]
pub async fn get_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = Uuid::parse_str(&video_id)
        .map_err(|e| ApiError::new("Invalid video ID", StatusCode::BAD_REQUEST).with_cause(e))?;

    let thumbnail = state
        .thumbnails
        .get(id)
        .await
        .ok_or_else(|| ApiError::new("Thumbnail not found", StatusCode::NOT_FOUND))?;

    Ok(([(header::CONTENT_TYPE, thumbnail.media_type)], thumbnail.data).into_response())
}
