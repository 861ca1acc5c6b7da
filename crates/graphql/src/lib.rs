//! GraphQL API for the ReelGraph video catalog.
//!
//! Provides a Relay-style GraphQL endpoint: global object identification
//! via the `node` interface, cursor-paginated connections, and the
//! `createVideo` mutation.
//!
//! # Building a schema
//!
//! ```ignore
//! use std::sync::Arc;
//! use reelgraph_graphql::build_schema;
//! use reelgraph_storage::MemoryVideoStore;
//!
//! let store = Arc::new(MemoryVideoStore::seeded());
//! let schema = build_schema(store);
//! ```

mod schema;
mod server;
mod types;

pub use schema::{
    build_schema, MutationRoot, QueryRoot, MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH,
};
pub use server::{serve, serve_with_shutdown, ServerConfig};
pub use types::ReelSchema;
