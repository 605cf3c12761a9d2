use crate::common::response::{ApiError, ErrorResponse};
use crate::modules::video::model::Video;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/videos/{video_id}",
    params(("video_id" = Uuid, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Video record", body = Video),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Videos"
)]
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    let id = Uuid::parse_str(&video_id)
        .map_err(|e| ApiError::new("Invalid video ID", StatusCode::BAD_REQUEST).with_cause(e))?;

    let video = state
        .videos
        .get_video(id)
        .await
        .map_err(|e| ApiError::new("Couldn't get video", StatusCode::INTERNAL_SERVER_ERROR).with_cause(e))?
        .ok_or_else(|| ApiError::new("Video not found", StatusCode::NOT_FOUND))?;

    Ok(Json(video))
}
