use super::error::ThumbnailError;
use crate::config::settings::AppConfig;
use crate::infrastructure::cache::thumbnails::Thumbnail;
use crate::modules::auth::service::AuthService;
use crate::modules::video::model::Video;
use crate::state::AppState;
use axum::{body::Bytes, http::HeaderMap};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Route prefix the assets directory is served under.
pub const ASSETS_ROUTE: &str = "/assets";

/// A thumbnail payload that has passed every check and is ready to store.
pub struct ThumbnailUpload {
    pub media_type: String,
    pub extension: String,
    pub data: Bytes,
}

pub struct ThumbnailService;

impl ThumbnailService {
    /// Derives the file extension from a `type/subtype` media type.
    pub fn extension_for(media_type: &str) -> Result<String, ThumbnailError> {
        let invalid = || ThumbnailError::InvalidContentType(media_type.to_string());

        let parts: Vec<&str> = media_type.split('/').collect();
        let [kind, subtype] = parts.as_slice() else {
            return Err(invalid());
        };

        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.');
        if kind.is_empty() || subtype.is_empty() || !subtype.chars().all(allowed) {
            return Err(invalid());
        }

        Ok(subtype.to_string())
    }

    pub fn file_name(video_id: Uuid, extension: &str) -> String {
        format!("{}.{}", video_id, extension)
    }

    /// Public URL of an asset file, e.g. `http://localhost:8091/assets/<file>`.
    ///
    /// Joined relative to the configured base, so a path prefix on it is kept.
    pub fn thumbnail_url(config: &AppConfig, file_name: &str) -> Result<String, ThumbnailError> {
        let relative = format!("{}/{}", ASSETS_ROUTE.trim_start_matches('/'), file_name);
        Ok(config.public_base_url.join(&relative)?.to_string())
    }

    /// Resolves the target video and checks the caller owns it.
    ///
    /// Nothing is written by this step.
    pub async fn authorize_upload(
        state: &AppState,
        raw_video_id: &str,
        headers: &HeaderMap,
    ) -> Result<Video, ThumbnailError> {
        let video_id = Uuid::parse_str(raw_video_id)?;

        let video = state
            .videos
            .get_video(video_id)
            .await
            .map_err(ThumbnailError::Store)?
            .ok_or(ThumbnailError::VideoNotFound)?;

        let user_id = AuthService::authenticate(headers, &state.config.jwt_secret)?;

        if user_id != video.user_id {
            warn!("User {} tried to upload a thumbnail for video {} owned by {}", user_id, video.id, video.user_id);
            return Err(ThumbnailError::NotOwner);
        }

        Ok(video)
    }

    /// Caches and persists the payload, then points the record at it.
    ///
    /// The URL is built before anything is written, so a failure there leaves
    /// no trace.
    pub async fn save(
        state: &AppState,
        video: &Video,
        upload: ThumbnailUpload,
    ) -> Result<Video, ThumbnailError> {
        let file_name = Self::file_name(video.id, &upload.extension);
        let thumbnail_url = Self::thumbnail_url(&state.config, &file_name)?;
        let size = upload.data.len();

        state
            .thumbnails
            .put(
                video.id,
                Thumbnail {
                    media_type: upload.media_type,
                    data: upload.data.clone(),
                },
            )
            .await;
        debug!("Thumbnail cache holds {} entries", state.thumbnails.len().await);

        let path = state.assets.write(&file_name, &upload.data).await?;

        let video = state
            .videos
            .set_thumbnail_url(video.id, &thumbnail_url)
            .await
            .map_err(ThumbnailError::Store)?;

        info!("Stored {} byte thumbnail for video {} at {}", size, video.id, path.display());
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::parse_base_url;
    use std::path::PathBuf;

    fn config(base: &str) -> AppConfig {
        AppConfig {
            server_port: 8091,
            database_url: String::new(),
            jwt_secret: "secret".to_string(),
            assets_root: PathBuf::from("./assets"),
            public_base_url: parse_base_url(base).unwrap(),
        }
    }

    #[test]
    fn extension_is_the_subtype() {
        assert_eq!(ThumbnailService::extension_for("image/jpeg").unwrap(), "jpeg");
        assert_eq!(ThumbnailService::extension_for("image/png").unwrap(), "png");
        assert_eq!(ThumbnailService::extension_for("image/svg+xml").unwrap(), "svg+xml");
    }

    #[test]
    fn malformed_media_types_are_rejected() {
        for media_type in ["", "jpeg", "image/", "/png", "image/png/x", "image/png; q=1", "image/p g"] {
            assert!(
                matches!(
                    ThumbnailService::extension_for(media_type),
                    Err(ThumbnailError::InvalidContentType(_))
                ),
                "{media_type:?}"
            );
        }
    }

    #[test]
    fn url_is_derived_from_id_and_config() {
        let id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
        let file_name = ThumbnailService::file_name(id, "jpg");

        let url = ThumbnailService::thumbnail_url(&config("http://localhost:8091"), &file_name).unwrap();
        assert_eq!(url, "http://localhost:8091/assets/11111111-1111-1111-1111-111111111111.jpg");

        let url = ThumbnailService::thumbnail_url(&config("https://cdn.example.com/"), &file_name).unwrap();
        assert_eq!(url, "https://cdn.example.com/assets/11111111-1111-1111-1111-111111111111.jpg");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let url = ThumbnailService::thumbnail_url(&config("https://example.com/tubely"), "x.png").unwrap();
        assert_eq!(url, "https://example.com/tubely/assets/x.png");

        let url = ThumbnailService::thumbnail_url(&config("https://example.com/tubely/"), "x.png").unwrap();
        assert_eq!(url, "https://example.com/tubely/assets/x.png");
    }
}
