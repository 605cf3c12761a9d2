use axum::{
    body::Bytes,
    extract::multipart::{Field, MultipartError},
    http::StatusCode,
};
use futures_util::StreamExt;
use thiserror::Error;
use tracing::error;

/// Largest file part accepted by the upload route.
pub const MAX_UPLOAD_SIZE: usize = 10 << 20;

/// Room for boundaries, part headers and small text fields around the file.
pub const FORM_OVERHEAD: usize = 64 << 10;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("multipart stream failed: {0}")]
    Stream(#[from] MultipartError),

    #[error("payload exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::Stream(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            UploadError::Stream(_) => StatusCode::BAD_REQUEST,
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

/// Drains a multipart field into memory, refusing anything past `limit` bytes.
///
/// The field is consumed, so the underlying stream is released on every path.
pub async fn read_field(mut field: Field<'_>, limit: usize) -> Result<Bytes, UploadError> {
    let mut buffer = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                error!("Stream error: {}", e);
                return Err(UploadError::Stream(e));
            }
        };

        if buffer.len() + chunk.len() > limit {
            return Err(UploadError::TooLarge { limit });
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(Bytes::from(buffer))
}
