//! Domain models for the video catalog.
//!
//! These models are storage-agnostic and represent the canonical form of
//! catalog data within the domain layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Videos
// =============================================================================

/// A video in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Local identifier, unique within the `Video` type.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Running time in seconds.
    pub duration: i32,
    /// Whether the viewer has watched this video.
    pub watched: bool,
    /// Whether the video has been released.
    pub released: bool,
    /// When this video was added to the catalog.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new video.
///
/// The store assigns the local id and creation timestamp; new videos start
/// unwatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVideo {
    pub title: String,
    pub duration: i32,
    pub released: bool,
}

// =============================================================================
// Entity Discrimination
// =============================================================================

/// Discriminator for every node-resolvable entity type.
///
/// Entities carry this tag explicitly instead of being classified by
/// structural inspection, so dispatch stays unambiguous as variants are
/// added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Video,
}

impl EntityKind {
    /// Parse a kind from a type name, case-insensitively.
    ///
    /// Returns `None` for unknown names - the caller treats this as
    /// "cannot resolve polymorphic type", not a fatal error.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// Canonical type name as exposed in global identifiers.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Video => "Video",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Tagged union of all entities resolvable by global id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Video(Video),
}

impl Entity {
    /// The concrete kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Video(_) => EntityKind::Video,
        }
    }

    /// Local identifier of the wrapped entity.
    pub fn local_id(&self) -> &str {
        match self {
            Self::Video(v) => &v.id,
        }
    }
}

impl From<Video> for Entity {
    fn from(video: Video) -> Self {
        Self::Video(video)
    }
}

// =============================================================================
// Tests
// =============================================================================
