use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use crate::common::upload::{FORM_OVERHEAD, MAX_UPLOAD_SIZE};
use crate::state::AppState;

pub mod error;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/thumbnail_upload/{video_id}",
            post(handler::upload_thumbnail).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + FORM_OVERHEAD)),
        )
        .route("/thumbnails/{video_id}", get(handler::get_thumbnail))
}
