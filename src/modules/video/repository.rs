use super::model::Video;
use crate::infrastructure::db::pool::DbPool;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use uuid::Uuid;

/// Read/write access to video records.
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>>;

    /// Sets only `thumbnail_url`, leaving concurrent edits to other columns intact,
    /// and returns the stored row.
    async fn set_thumbnail_url(&self, id: Uuid, thumbnail_url: &str) -> Result<Video>;
}

pub struct VideoRepository {
    pool: DbPool,
}

impl VideoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for VideoRepository {
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, user_id, title, description, thumbnail_url, video_url, created_at, updated_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch video: {}", e))?;

        Ok(video)
    }

    async fn set_thumbnail_url(&self, id: Uuid, thumbnail_url: &str) -> Result<Video> {
        sqlx::query_as::<_, Video>(
            r#"
            UPDATE videos
            SET thumbnail_url = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, user_id, title, description, thumbnail_url, video_url, created_at, updated_at
            "#,
        )
        .bind(thumbnail_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update video: {}", e))?
        .ok_or_else(|| anyhow!("Video {} no longer exists", id))
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use time::OffsetDateTime;

    /// Map-backed store that counts calls, for handler tests.
    #[derive(Default)]
    pub struct InMemoryVideoStore {
        videos: Mutex<HashMap<Uuid, Video>>,
        gets: AtomicUsize,
        updates: AtomicUsize,
        fail_updates: bool,
    }

    impl InMemoryVideoStore {
        pub fn with_video(video: Video) -> Self {
            let store = Self::default();
            store.videos.lock().unwrap().insert(video.id, video);
            store
        }

        pub fn failing_updates(mut self) -> Self {
            self.fail_updates = true;
            self
        }

        pub fn snapshot(&self, id: Uuid) -> Option<Video> {
            self.videos.lock().unwrap().get(&id).cloned()
        }

        /// Changes a stored row directly, as another writer would.
        pub fn edit(&self, id: Uuid, change: impl FnOnce(&mut Video)) {
            if let Some(video) = self.videos.lock().unwrap().get_mut(&id) {
                change(video);
            }
        }

        pub fn gets(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }

        pub fn updates(&self) -> usize {
            self.updates.load(Ordering::SeqCst)
        }
    }

    pub fn video(id: Uuid, user_id: Uuid) -> Video {
        let now = OffsetDateTime::now_utc();
        Video {
            id,
            user_id,
            title: "Boots".to_string(),
            description: Some("A short about boots".to_string()),
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl VideoStore for InMemoryVideoStore {
        async fn get_video(&self, id: Uuid) -> Result<Option<Video>> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            Ok(self.snapshot(id))
        }

        async fn set_thumbnail_url(&self, id: Uuid, thumbnail_url: &str) -> Result<Video> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            if self.fail_updates {
                return Err(anyhow!("database is read-only"));
            }

            let mut videos = self.videos.lock().unwrap();
            let stored = videos
                .get_mut(&id)
                .ok_or_else(|| anyhow!("Video {} no longer exists", id))?;
            stored.thumbnail_url = Some(thumbnail_url.to_string());
            stored.updated_at = OffsetDateTime::now_utc();
            Ok(stored.clone())
        }
    }
}
