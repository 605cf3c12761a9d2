use crate::common::response::ApiError;
use crate::common::upload::UploadError;
use crate::infrastructure::storage::local::StorageError;
use crate::modules::auth::service::AuthError;
use axum::{extract::multipart::MultipartError, http::StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("malformed multipart form: {0}")]
    InvalidForm(#[from] MultipartError),

    #[error("form has no `thumbnail` file field")]
    MissingThumbnail,

    #[error("thumbnail part has no content type")]
    MissingContentType,

    #[error("unsupported content type `{0}`")]
    InvalidContentType(String),

    #[error("invalid video id: {0}")]
    InvalidVideoId(#[from] uuid::Error),

    #[error("video not found")]
    VideoNotFound,

    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    #[error("user is not the owner of the video")]
    NotOwner,

    #[error("failed to read thumbnail: {0}")]
    Read(#[from] UploadError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to build thumbnail url: {0}")]
    Url(#[from] url::ParseError),

    #[error("video store failed: {0}")]
    Store(#[source] anyhow::Error),
}

impl ThumbnailError {
    pub fn status(&self) -> StatusCode {
        match self {
            ThumbnailError::InvalidForm(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ThumbnailError::InvalidForm(_)
            | ThumbnailError::MissingThumbnail
            | ThumbnailError::MissingContentType
            | ThumbnailError::InvalidContentType(_)
            | ThumbnailError::InvalidVideoId(_) => StatusCode::BAD_REQUEST,
            ThumbnailError::VideoNotFound => StatusCode::NOT_FOUND,
            ThumbnailError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ThumbnailError::NotOwner => StatusCode::FORBIDDEN,
            ThumbnailError::Read(e) => e.status(),
            ThumbnailError::Storage(_) | ThumbnailError::Url(_) | ThumbnailError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ThumbnailError::InvalidForm(_) => "Failed to parse multipart form",
            ThumbnailError::MissingThumbnail => "Failed to retrieve thumbnail file",
            ThumbnailError::MissingContentType => "Missing Content-Type for thumbnail",
            ThumbnailError::InvalidContentType(_) => "Invalid content type format",
            ThumbnailError::InvalidVideoId(_) => "Invalid video ID",
            ThumbnailError::VideoNotFound => "Video not found",
            ThumbnailError::Unauthorized(AuthError::MissingHeader)
            | ThumbnailError::Unauthorized(AuthError::MalformedHeader) => "Missing JWT token",
            ThumbnailError::Unauthorized(_) => "Invalid JWT token",
            ThumbnailError::NotOwner => "User is not the owner of the video",
            ThumbnailError::Read(_) => "Failed to read thumbnail",
            ThumbnailError::Storage(_) => "Failed to save thumbnail",
            ThumbnailError::Url(_) => "Failed to build thumbnail URL",
            ThumbnailError::Store(_) => "Failed to update video",
        }
    }
}

impl From<ThumbnailError> for ApiError {
    fn from(err: ThumbnailError) -> Self {
        ApiError::new(err.message(), err.status()).with_cause(&err)
    }
}
