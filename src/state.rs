use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::cache::thumbnails::ThumbnailCache;
use crate::infrastructure::storage::local::AssetStorage;
use crate::modules::video::repository::VideoStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub videos: Arc<dyn VideoStore>,
    pub thumbnails: ThumbnailCache,
    pub assets: AssetStorage,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        videos: Arc<dyn VideoStore>,
        thumbnails: ThumbnailCache,
        assets: AssetStorage,
    ) -> Self {
        Self {
            config,
            videos,
            thumbnails,
            assets,
        }
    }
}
