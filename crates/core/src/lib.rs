//! Core domain layer for the ReelGraph video API.
//!
//! This crate contains the domain models, port traits (interfaces), and
//! the two pieces of reusable design logic the API is built around. It
//! follows hexagonal architecture principles - this is the innermost
//! layer with no dependencies on infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                reelgraph (binary)               │
//! ├─────────────────────────────────────────────────┤
//! │   reelgraph-graphql    │    reelgraph-storage   │
//! │   (schema + HTTP)      │    (in-memory store)   │
//! ├────────────────────────┴────────────────────────┤
//! │            reelgraph-core  ← YOU ARE HERE       │
//! │        (models, identity, pagination, ports)    │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`models`] - Domain models (Video, Entity, EntityKind)
//! - [`identity`] - Global id encoding and decoding
//! - [`ports`] - Store port and the connection pager
//! - [`services`] - Node resolution over the store port
//! - [`error`] - Domain error types
//! - [`metrics`] - Metric definitions
//!
//! # Key Concepts
//!
//! ## Global identity
//!
//! Every entity is addressable by an opaque global id encoding its type
//! name and local id ([`identity::GlobalId`]). The
//! [`services::NodeResolver`] decodes a global id, dispatches on the
//! [`models::EntityKind`] discriminator, and fetches the entity through
//! the [`ports::VideoStore`] port. Absence and unknown type names resolve
//! to `None`; only undecodable ids are errors.
//!
//! ## Connection pagination
//!
//! [`ports::paginate`] applies Relay cursor semantics
//! (`first`/`last`/`after`/`before`) to an owned snapshot of the catalog
//! and yields a [`ports::Connection`] with offset-based cursors, page
//! metadata, and a total count that always reflects the unsliced
//! sequence.

pub mod error;
pub mod identity;
pub mod metrics;
pub mod models;
pub mod ports;
pub mod services;
