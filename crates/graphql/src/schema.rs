//! GraphQL schema definition.
//!
//! This module provides the Relay-style schema for the video catalog:
//! the `node` interface, cursor-paginated `videos` connection, single
//! lookups, and the `createVideo` mutation.

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, InputObject, Interface, Object, Result, Schema, SimpleObject, ID,
};
use chrono::{DateTime, Utc};

use reelgraph_core::identity::GlobalId;
use reelgraph_core::metrics::record_video_created;
use reelgraph_core::models::{self, Entity, EntityKind, NewVideo};
use reelgraph_core::ports::{self, paginate, Cursor, Pagination, VideoStore};
use reelgraph_core::services::NodeResolver;

use crate::types::ReelSchema;

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth to prevent deeply nested queries (DoS protection).
/// Note: GraphQL introspection requires depth ~13, so we use 15 to allow it.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
/// Each field has a default complexity of 1, nested objects multiply.
pub const MAX_QUERY_COMPLEXITY: usize = 500;

// -----------------------------------------------------------------------------
// Schema Builder
// -----------------------------------------------------------------------------

/// Build the GraphQL schema over a store.
///
/// The store is injected once at startup and shared by every request;
/// includes query depth and complexity limits for DoS protection.
pub fn build_schema(store: Arc<dyn VideoStore>) -> ReelSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(NodeResolver::new(store.clone()))
        .data(store)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

// -----------------------------------------------------------------------------
// Query Root
// -----------------------------------------------------------------------------

/// Query root for the video catalog.
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch any entity by its opaque global id.
    ///
    /// Absent records and unknown entity types resolve to null; only an
    /// undecodable id is an error, and that error stays scoped to this
    /// field.
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let resolver = ctx.data::<NodeResolver>()?;
        let entity = resolver.resolve(&id).await?;
        Ok(entity.map(Node::from))
    }

    /// Fetch a single video by its local id.
    async fn video(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Video>> {
        let store = ctx.data::<Arc<dyn VideoStore>>()?;
        let entity = store.fetch_by_id(EntityKind::Video, &id).await?;
        Ok(entity.map(|e| match e {
            Entity::Video(v) => Video::from(v),
        }))
    }

    /// List videos with Relay cursor pagination.
    async fn videos(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<VideoConnection> {
        let store = ctx.data::<Arc<dyn VideoStore>>()?;

        let catalog = store.fetch_all().await?;
        let args = Pagination {
            first,
            after: after.map(Cursor::from),
            last,
            before: before.map(Cursor::from),
        };

        let connection = paginate(catalog, &args)?;
        Ok(VideoConnection::from(connection))
    }
}

// -----------------------------------------------------------------------------
// Mutation Root
// -----------------------------------------------------------------------------

/// Mutation root for the video catalog.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a video and return it with its assigned global id.
    async fn create_video(
        &self,
        ctx: &Context<'_>,
        input: CreateVideoInput,
    ) -> Result<CreateVideoPayload> {
        let store = ctx.data::<Arc<dyn VideoStore>>()?;

        let created = store
            .create(NewVideo {
                title: input.title,
                duration: input.duration,
                released: input.released,
            })
            .await?;
        record_video_created();

        Ok(CreateVideoPayload {
            video: Video::from(created),
            client_mutation_id: input.client_mutation_id,
        })
    }
}

/// Input for `createVideo`.
#[derive(InputObject)]
pub struct CreateVideoInput {
    pub title: String,
    /// Running time in seconds.
    pub duration: i32,
    pub released: bool,
    /// Opaque client token echoed back unchanged in the payload.
    pub client_mutation_id: Option<String>,
}

/// Payload for `createVideo`.
#[derive(SimpleObject)]
pub struct CreateVideoPayload {
    pub video: Video,
    pub client_mutation_id: Option<String>,
}

// -----------------------------------------------------------------------------
// GraphQL Types
// -----------------------------------------------------------------------------

/// A video in the catalog.
pub struct Video(models::Video);

#[Object]
impl Video {
    /// Opaque globally unique identifier.
    async fn id(&self) -> ID {
        ID(GlobalId::new(EntityKind::Video, self.0.id.clone()).encode())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    /// Running time in seconds.
    async fn duration(&self) -> i32 {
        self.0.duration
    }

    async fn watched(&self) -> bool {
        self.0.watched
    }

    async fn released(&self) -> bool {
        self.0.released
    }

    /// When the video was added to the catalog.
    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

impl From<models::Video> for Video {
    fn from(video: models::Video) -> Self {
        Self(video)
    }
}

/// Relay node interface: any entity resolvable by global id.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "Opaque globally unique identifier."))]
pub enum Node {
    Video(Video),
}

impl From<Entity> for Node {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Video(v) => Node::Video(Video::from(v)),
        }
    }
}

// -----------------------------------------------------------------------------
// Connection Types (Relay-style pagination)
// -----------------------------------------------------------------------------

#[derive(SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(SimpleObject)]
pub struct VideoEdge {
    pub node: Video,
    pub cursor: String,
}

#[derive(SimpleObject)]
pub struct VideoConnection {
    pub edges: Vec<VideoEdge>,
    pub page_info: PageInfo,
    /// Length of the full catalog, independent of slicing.
    pub total_count: i64,
}

impl From<ports::Connection<models::Video>> for VideoConnection {
    fn from(conn: ports::Connection<models::Video>) -> Self {
        Self {
            edges: conn
                .edges
                .into_iter()
                .map(|e| VideoEdge {
                    node: Video::from(e.node),
                    cursor: e.cursor.value,
                })
                .collect(),
            page_info: PageInfo {
                has_next_page: conn.page_info.has_next_page,
                has_previous_page: conn.page_info.has_previous_page,
                start_cursor: conn.page_info.start_cursor.map(|c| c.value),
                end_cursor: conn.page_info.end_cursor.map(|c| c.value),
            },
            total_count: conn.total_count,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
