//! Port trait for the entity store.
//!
//! This trait defines the storage interface used by the domain layer.
//! Implementations live in the infrastructure layer (e.g.
//! `reelgraph-storage`); the core is agnostic to their backing - memory
//! array, database, or remote call.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::models::{Entity, EntityKind, NewVideo, Video};

/// Store for node-resolvable entities.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Fetch a single entity by kind and local id.
    ///
    /// Absence is a valid outcome, returned as `Ok(None)`.
    async fn fetch_by_id(&self, kind: EntityKind, local_id: &str)
        -> StorageResult<Option<Entity>>;

    /// Fetch the full catalog as an owned snapshot, in insertion order.
    ///
    /// Callers paginate over the returned Vec; because it is an owned
    /// copy, later mutations of the store cannot shift cursors mid-call.
    async fn fetch_all(&self) -> StorageResult<Vec<Video>>;

    /// Create a video, assigning a fresh local id and creation timestamp.
    async fn create(&self, new: NewVideo) -> StorageResult<Video>;
}
