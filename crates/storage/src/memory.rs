//! In-memory implementation of the store port.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use reelgraph_core::error::StorageResult;
use reelgraph_core::models::{Entity, EntityKind, NewVideo, Video};
use reelgraph_core::ports::VideoStore;

/// In-memory video store.
///
/// Holds the catalog in an `RwLock`'d Vec in insertion order. Reads hand
/// out owned snapshots, so pagination over `fetch_all` is unaffected by
/// concurrent writes.
pub struct MemoryVideoStore {
    videos: RwLock<Vec<Video>>,
    next_id: AtomicU64,
}

impl MemoryVideoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            videos: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a store preloaded with the tutorial catalog.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            videos: RwLock::new(vec![
                Video {
                    id: "a".into(),
                    title: "Create a GraphQL Schema".into(),
                    duration: 120,
                    watched: true,
                    released: true,
                    created_at: now,
                },
                Video {
                    id: "b".into(),
                    title: "Ember.js CLI".into(),
                    duration: 240,
                    watched: false,
                    released: true,
                    created_at: now,
                },
            ]),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryVideoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn fetch_by_id(
        &self,
        kind: EntityKind,
        local_id: &str,
    ) -> StorageResult<Option<Entity>> {
        let videos = self.videos.read().await;
        let entity = match kind {
            EntityKind::Video => videos
                .iter()
                .find(|v| v.id == local_id)
                .cloned()
                .map(Entity::Video),
        };
        Ok(entity)
    }

    async fn fetch_all(&self) -> StorageResult<Vec<Video>> {
        Ok(self.videos.read().await.clone())
    }

    async fn create(&self, new: NewVideo) -> StorageResult<Video> {
        let video = Video {
            id: self.next_id.fetch_add(1, Ordering::Relaxed).to_string(),
            title: new.title,
            duration: new.duration,
            watched: false,
            released: new.released,
            created_at: Utc::now(),
        };

        debug!(id = %video.id, title = %video.title, "video created");
        self.videos.write().await.push(video.clone());
        Ok(video)
    }
}
