//! Storage layer for the ReelGraph video API.
//!
//! This crate provides the in-memory implementation of the store port
//! defined in `reelgraph-core`. The catalog lives for the lifetime of the
//! process and is injected into request handlers as an
//! `Arc<dyn VideoStore>` - never accessed as an ambient singleton.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use reelgraph_storage::MemoryVideoStore;
//!
//! let store = Arc::new(MemoryVideoStore::seeded());
//! let schema = reelgraph_graphql::build_schema(store);
//! ```

pub mod memory;

pub use memory::MemoryVideoStore;
