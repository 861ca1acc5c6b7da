//! Node resolution service.
//!
//! Translates opaque global identifiers into concrete entities by
//! decoding the id, dispatching on the entity kind, and delegating the
//! lookup to the store port.

use std::sync::Arc;

use tracing::debug;

use crate::error::DomainResult;
use crate::identity::GlobalId;
use crate::metrics::record_node_lookup;
use crate::models::Entity;
use crate::ports::VideoStore;

/// Resolves global ids to entities through the store port.
#[derive(Clone)]
pub struct NodeResolver {
    store: Arc<dyn VideoStore>,
}

impl NodeResolver {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    /// Resolve an opaque global id to the entity it names.
    ///
    /// Fails with `MalformedIdentifier` when the id cannot be decoded.
    /// Unknown type names and absent records are valid outcomes, returned
    /// as `Ok(None)`.
    pub async fn resolve(&self, raw: &str) -> DomainResult<Option<Entity>> {
        let global_id = GlobalId::decode(raw)?;

        let Some(kind) = global_id.kind() else {
            debug!(type_name = %global_id.type_name, "unknown entity type in global id");
            record_node_lookup(false);
            return Ok(None);
        };

        let entity = self.store.fetch_by_id(kind, &global_id.local_id).await?;
        record_node_lookup(entity.is_some());
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::Utc;

    use crate::error::{DomainError, StorageResult};
    use crate::models::{EntityKind, NewVideo, Video};

    struct SingleVideoStore(Video);

    #[async_trait]
    impl VideoStore for SingleVideoStore {
        async fn fetch_by_id(
            &self,
            kind: EntityKind,
            local_id: &str,
        ) -> StorageResult<Option<Entity>> {
            Ok((kind == EntityKind::Video && local_id == self.0.id)
                .then(|| Entity::Video(self.0.clone())))
        }

        async fn fetch_all(&self) -> StorageResult<Vec<Video>> {
            Ok(vec![self.0.clone()])
        }

        async fn create(&self, _new: NewVideo) -> StorageResult<Video> {
            unimplemented!("not needed for resolver tests")
        }
    }

    fn resolver() -> NodeResolver {
        NodeResolver::new(Arc::new(SingleVideoStore(Video {
            id: "a".into(),
            title: "Create a GraphQL Schema".into(),
            duration: 120,
            watched: true,
            released: true,
            created_at: Utc::now(),
        })))
    }

    #[tokio::test]
    async fn resolves_an_encoded_id() {
        let raw = GlobalId::new(EntityKind::Video, "a").encode();
        let entity = resolver().resolve(&raw).await.unwrap().unwrap();
        assert_eq!(entity.local_id(), "a");
    }

    #[tokio::test]
    async fn absent_record_is_none_not_an_error() {
        let raw = GlobalId::new(EntityKind::Video, "missing").encode();
        assert!(resolver().resolve(&raw).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_type_name_is_none_not_an_error() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        let raw = STANDARD.encode("Playlist:a");
        assert!(resolver().resolve(&raw).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_id_is_a_typed_failure() {
        let err = resolver().resolve("???").await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedIdentifier(_)));
    }
}
