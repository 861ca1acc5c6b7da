//! Global identifiers for node-resolvable entities.
//!
//! A global id encodes a `(type_name, local_id)` pair as base64 of
//! `"TypeName:local_id"`. Encoding is deterministic and injective (type
//! names never contain the separator); decoding is a pure function that
//! fails with a typed [`DomainError::MalformedIdentifier`] on any input
//! not produced by the encoder.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{DomainError, DomainResult};
use crate::models::EntityKind;

/// Separator between type name and local id in the encoded payload.
const SEPARATOR: char = ':';

/// A decoded global identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalId {
    /// Entity type name (e.g. `"Video"`).
    pub type_name: String,
    /// Identifier unique within the type.
    pub local_id: String,
}

impl GlobalId {
    /// Build a global id from an explicit kind and local id.
    pub fn new(kind: EntityKind, local_id: impl Into<String>) -> Self {
        Self {
            type_name: kind.type_name().to_string(),
            local_id: local_id.into(),
        }
    }

    /// Encode to the opaque wire form.
    pub fn encode(&self) -> String {
        BASE64.encode(format!("{}{SEPARATOR}{}", self.type_name, self.local_id))
    }

    /// Decode an opaque global id.
    ///
    /// Never panics on attacker-supplied input: bad base64, non-UTF-8
    /// payloads and missing separators all come back as
    /// [`DomainError::MalformedIdentifier`].
    pub fn decode(raw: &str) -> DomainResult<Self> {
        let bytes = BASE64
            .decode(raw)
            .map_err(|_| DomainError::MalformedIdentifier(raw.to_string()))?;
        let payload = String::from_utf8(bytes)
            .map_err(|_| DomainError::MalformedIdentifier(raw.to_string()))?;
        let (type_name, local_id) = payload
            .split_once(SEPARATOR)
            .ok_or_else(|| DomainError::MalformedIdentifier(raw.to_string()))?;
        if type_name.is_empty() {
            return Err(DomainError::MalformedIdentifier(raw.to_string()));
        }
        Ok(Self {
            type_name: type_name.to_string(),
            local_id: local_id.to_string(),
        })
    }

    /// The entity kind this id refers to, if the type name is known.
    ///
    /// Type names are normalized case-insensitively; unknown names yield
    /// `None` rather than an error.
    pub fn kind(&self) -> Option<EntityKind> {
        EntityKind::parse(&self.type_name)
    }
}

impl std::fmt::Display for GlobalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.type_name, self.local_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let id = GlobalId::new(EntityKind::Video, "a");
        let decoded = GlobalId::decode(&id.encode()).unwrap();
        assert_eq!(decoded.type_name, "Video");
        assert_eq!(decoded.local_id, "a");
    }

    #[test]
    fn distinct_pairs_encode_distinctly() {
        let a = GlobalId::new(EntityKind::Video, "a").encode();
        let b = GlobalId::new(EntityKind::Video, "b").encode();
        assert_ne!(a, b);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let err = GlobalId::decode("%%% not base64 %%%").unwrap_err();
        assert!(matches!(err, DomainError::MalformedIdentifier(_)));
    }

    #[test]
    fn decode_rejects_missing_separator() {
        let raw = BASE64.encode("VideoWithoutSeparator");
        let err = GlobalId::decode(&raw).unwrap_err();
        assert!(matches!(err, DomainError::MalformedIdentifier(_)));
    }

    #[test]
    fn decode_rejects_non_utf8_payload() {
        let raw = BASE64.encode([0xff, 0xfe, 0xfd]);
        let err = GlobalId::decode(&raw).unwrap_err();
        assert!(matches!(err, DomainError::MalformedIdentifier(_)));
    }

    #[test]
    fn decode_rejects_empty_type_name() {
        let raw = BASE64.encode(":42");
        let err = GlobalId::decode(&raw).unwrap_err();
        assert!(matches!(err, DomainError::MalformedIdentifier(_)));
    }

    #[test]
    fn local_id_may_contain_the_separator() {
        // Only the first separator splits; the rest belongs to the local id.
        let raw = BASE64.encode("Video:2024:07");
        let decoded = GlobalId::decode(&raw).unwrap();
        assert_eq!(decoded.local_id, "2024:07");
    }

    #[test]
    fn kind_normalizes_type_name_case() {
        let raw = BASE64.encode("vIdEo:a");
        let decoded = GlobalId::decode(&raw).unwrap();
        assert_eq!(decoded.kind(), Some(EntityKind::Video));
    }

    #[test]
    fn kind_is_none_for_unknown_type() {
        let raw = BASE64.encode("Playlist:1");
        let decoded = GlobalId::decode(&raw).unwrap();
        assert_eq!(decoded.kind(), None);
    }
}
