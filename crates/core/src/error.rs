//! Error types for the ReelGraph domain layer.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`DomainError`] - Business logic errors (bad identifiers, bad arguments)
//! - [`StorageError`] - Store/repository errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Absence is never an error in this domain: lookups that find nothing
//! return `Ok(None)` and surface to API callers as a null field.

use thiserror::Error;

// =============================================================================
// Domain Errors
// =============================================================================

/// Business logic and domain rule violations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A global identifier could not be decoded.
    ///
    /// Raised for inputs that were not produced by the encoder: bad base64,
    /// non-UTF-8 payloads, or a missing type separator.
    #[error("Malformed global identifier: {0}")]
    MalformedIdentifier(String),

    /// A pagination bound was invalid (negative `first` or `last`).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Store and repository errors.
///
/// The in-memory backend is infallible, but the port traits keep the error
/// channel so other backends (database, remote service) can report failures
/// without changing the interface.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Requested record was not found where one was required.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backing store failed.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
