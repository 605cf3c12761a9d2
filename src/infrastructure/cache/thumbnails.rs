use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub media_type: String,
    pub data: Bytes,
}

/// Latest thumbnail per video, kept in process memory.
///
/// Entries are replaced on every upload and never evicted. Writers take the
/// lock exclusively; the lock is never held across other I/O.
#[derive(Clone, Default)]
pub struct ThumbnailCache {
    inner: Arc<RwLock<HashMap<Uuid, Thumbnail>>>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `thumbnail` for `video_id`, returning the entry it replaced.
    pub async fn put(&self, video_id: Uuid, thumbnail: Thumbnail) -> Option<Thumbnail> {
        self.inner.write().await.insert(video_id, thumbnail)
    }

    pub async fn get(&self, video_id: Uuid) -> Option<Thumbnail> {
        self.inner.read().await.get(&video_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(media_type: &str, data: &'static [u8]) -> Thumbnail {
        Thumbnail {
            media_type: media_type.to_string(),
            data: Bytes::from_static(data),
        }
    }

    #[tokio::test]
    async fn put_replaces_previous_entry() {
        let cache = ThumbnailCache::new();
        let id = Uuid::new_v4();

        assert!(cache.put(id, thumb("image/png", b"one")).await.is_none());
        let previous = cache.put(id, thumb("image/jpeg", b"two")).await;

        assert_eq!(previous, Some(thumb("image/png", b"one")));
        assert_eq!(cache.get(id).await, Some(thumb("image/jpeg", b"two")));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache = ThumbnailCache::new();
        let other = cache.clone();
        let id = Uuid::new_v4();

        other.put(id, thumb("image/gif", b"gif")).await;

        assert!(cache.get(id).await.is_some());
        assert!(cache.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn concurrent_writers_do_not_lose_entries() {
        let cache = ThumbnailCache::new();
        let ids: Vec<Uuid> = (0..32).map(|_| Uuid::new_v4()).collect();

        let tasks: Vec<_> = ids
            .iter()
            .map(|id| {
                let cache = cache.clone();
                let id = *id;
                tokio::spawn(async move { cache.put(id, thumb("image/png", b"x")).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(cache.len().await, ids.len());
    }
}
