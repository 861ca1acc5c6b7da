//! Relay-style cursor pagination for list queries.
//!
//! [`paginate`] windows an ordered, finite snapshot of entities according
//! to `first`/`last`/`after`/`before` arguments and produces a
//! [`Connection`]: edges pairing each node with an opaque cursor, page
//! metadata, and the total count of the unsliced sequence.
//!
//! Cursors encode the item's zero-based offset within the full sequence
//! (base64), so they are stable for a given snapshot. Cursors that do not
//! match any current edge - stale or malformed - are silently ignored
//! rather than rejected, so clients holding old cursors degrade gracefully.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{DomainError, DomainResult};

// =============================================================================
// Connection Types
// =============================================================================

/// Opaque cursor for pagination.
///
/// The cursor value is implementation-specific and should be treated
/// as an opaque token by clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub value: String,
}

impl Cursor {
    /// Cursor for the item at `offset` within the full sequence.
    ///
    /// Deriving a cursor for the same offset always yields the same string.
    pub fn from_offset(offset: usize) -> Self {
        Self {
            value: BASE64.encode(offset.to_string()),
        }
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self { value }
    }
}

/// Pagination parameters for list queries.
///
/// Supports forward pagination (`first`/`after`) and backward
/// pagination (`last`/`before`); the arguments are freely combinable.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    /// Number of items to keep from the front.
    pub first: Option<i32>,
    /// Cursor to start after (exclusive).
    pub after: Option<Cursor>,
    /// Number of items to keep from the back.
    pub last: Option<i32>,
    /// Cursor to end before (exclusive).
    pub before: Option<Cursor>,
}

/// Paginated result set with edges and page info.
///
/// This is the Relay connection pattern for cursor-based pagination.
#[derive(Debug, Clone)]
pub struct Connection<T> {
    /// List of edges (node + cursor pairs).
    pub edges: Vec<Edge<T>>,
    /// Information about the current page.
    pub page_info: PageInfo,
    /// Length of the full sequence, independent of slicing.
    pub total_count: i64,
}

/// A single item in a paginated result.
#[derive(Debug, Clone)]
pub struct Edge<T> {
    /// The actual item.
    pub node: T,
    /// Cursor for this item (used for pagination).
    pub cursor: Cursor,
}

/// Information about the current page in a paginated result.
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// Whether there were edges after the retained window.
    pub has_next_page: bool,
    /// Whether there were edges before the retained window.
    pub has_previous_page: bool,
    /// Cursor of the first item in this page.
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last item in this page.
    pub end_cursor: Option<Cursor>,
}

// =============================================================================
// Pager
// =============================================================================

/// Apply cursor pagination to an owned snapshot of an ordered sequence.
///
/// The caller materializes the sequence first (awaiting the store if
/// delivery is asynchronous); taking the Vec by value pins pagination to a
/// stable per-call snapshot. Pure function of its inputs.
///
/// `total_count` is always the length of the full sequence, never of the
/// sliced window. Negative `first` or `last` fail with
/// [`DomainError::InvalidArgument`]; unmatched `after`/`before` cursors
/// are a silent no-op.
pub fn paginate<T>(items: Vec<T>, args: &Pagination) -> DomainResult<Connection<T>> {
    if let Some(first) = args.first {
        if first < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "first must be non-negative, got {first}"
            )));
        }
    }
    if let Some(last) = args.last {
        if last < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "last must be non-negative, got {last}"
            )));
        }
    }

    let total_count = items.len() as i64;
    let mut edges: Vec<Edge<T>> = items
        .into_iter()
        .enumerate()
        .map(|(offset, node)| Edge {
            node,
            cursor: Cursor::from_offset(offset),
        })
        .collect();

    // Drop everything up to and including the `after` cursor.
    let mut dropped_prefix = 0;
    if let Some(after) = &args.after {
        if let Some(pos) = edges.iter().position(|e| e.cursor == *after) {
            edges.drain(..=pos);
            dropped_prefix = pos + 1;
        }
    }

    // Drop the `before` cursor's edge and everything after it.
    let mut dropped_suffix = 0;
    if let Some(before) = &args.before {
        if let Some(pos) = edges.iter().position(|e| e.cursor == *before) {
            dropped_suffix = edges.len() - pos;
            edges.truncate(pos);
        }
    }

    let mut truncated_back = false;
    if let Some(first) = args.first {
        let first = first as usize;
        if edges.len() > first {
            edges.truncate(first);
            truncated_back = true;
        }
    }

    let mut truncated_front = false;
    if let Some(last) = args.last {
        let last = last as usize;
        if edges.len() > last {
            edges.drain(..edges.len() - last);
            truncated_front = true;
        }
    }

    let page_info = PageInfo {
        has_next_page: truncated_back || dropped_suffix > 0,
        has_previous_page: truncated_front || dropped_prefix > 0,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Ok(Connection {
        edges,
        page_info,
        total_count,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    fn nodes<T: Copy>(conn: &Connection<T>) -> Vec<T> {
        conn.edges.iter().map(|e| e.node).collect()
    }

    #[test]
    fn no_args_returns_everything() {
        let conn = paginate(seq(4), &Pagination::default()).unwrap();
        assert_eq!(nodes(&conn), vec![0, 1, 2, 3]);
        assert_eq!(conn.total_count, 4);
        assert!(!conn.page_info.has_next_page);
        assert!(!conn.page_info.has_previous_page);
    }

    #[test]
    fn first_keeps_leading_window() {
        let conn = paginate(seq(5), &Pagination { first: Some(2), ..Default::default() }).unwrap();
        assert_eq!(nodes(&conn), vec![0, 1]);
        assert!(conn.page_info.has_next_page);
        assert!(!conn.page_info.has_previous_page);
    }

    #[test]
    fn first_larger_than_sequence_is_a_noop() {
        let conn = paginate(seq(3), &Pagination { first: Some(10), ..Default::default() }).unwrap();
        assert_eq!(nodes(&conn), vec![0, 1, 2]);
        assert!(!conn.page_info.has_next_page);
    }

    #[test]
    fn last_keeps_trailing_window_in_order() {
        let conn = paginate(seq(5), &Pagination { last: Some(2), ..Default::default() }).unwrap();
        assert_eq!(nodes(&conn), vec![3, 4]);
        assert!(conn.page_info.has_previous_page);
        assert!(!conn.page_info.has_next_page);
    }

    #[test]
    fn total_count_ignores_slicing() {
        let conn = paginate(seq(7), &Pagination { first: Some(1), ..Default::default() }).unwrap();
        assert_eq!(conn.total_count, 7);
        assert_eq!(conn.edges.len(), 1);
    }

    #[test]
    fn negative_first_is_an_invalid_argument() {
        let err = paginate(seq(3), &Pagination { first: Some(-1), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn negative_last_is_an_invalid_argument() {
        let err =
            paginate(seq(3), &Pagination { last: Some(-1), ..Default::default() }).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn first_zero_yields_empty_page() {
        let conn = paginate(seq(3), &Pagination { first: Some(0), ..Default::default() }).unwrap();
        assert!(conn.edges.is_empty());
        assert!(conn.page_info.has_next_page);
        assert!(conn.page_info.start_cursor.is_none());
        assert!(conn.page_info.end_cursor.is_none());
    }

    #[test]
    fn after_yields_the_strict_suffix() {
        let full = paginate(seq(5), &Pagination::default()).unwrap();
        let cursor = full.edges[1].cursor.clone();

        let conn = paginate(seq(5), &Pagination { after: Some(cursor), ..Default::default() })
            .unwrap();
        assert_eq!(nodes(&conn), vec![2, 3, 4]);
        assert!(conn.page_info.has_previous_page);
        assert!(!conn.page_info.has_next_page);
    }

    #[test]
    fn before_yields_the_strict_prefix() {
        let full = paginate(seq(5), &Pagination::default()).unwrap();
        let cursor = full.edges[3].cursor.clone();

        let conn = paginate(seq(5), &Pagination { before: Some(cursor), ..Default::default() })
            .unwrap();
        assert_eq!(nodes(&conn), vec![0, 1, 2]);
        assert!(conn.page_info.has_next_page);
        assert!(!conn.page_info.has_previous_page);
    }

    #[test]
    fn after_and_first_combine() {
        let full = paginate(seq(6), &Pagination::default()).unwrap();
        let cursor = full.edges[0].cursor.clone();

        let conn = paginate(
            seq(6),
            &Pagination { first: Some(2), after: Some(cursor), ..Default::default() },
        )
        .unwrap();
        assert_eq!(nodes(&conn), vec![1, 2]);
        assert!(conn.page_info.has_previous_page);
        assert!(conn.page_info.has_next_page);
    }

    #[test]
    fn first_then_last_windows_the_remainder() {
        // first=3 keeps [0,1,2]; last=2 then keeps [1,2].
        let conn = paginate(
            seq(5),
            &Pagination { first: Some(3), last: Some(2), ..Default::default() },
        )
        .unwrap();
        assert_eq!(nodes(&conn), vec![1, 2]);
        assert!(conn.page_info.has_previous_page);
        assert!(conn.page_info.has_next_page);
    }

    #[test]
    fn stale_cursor_is_silently_ignored() {
        let stale = Cursor::from("bm90LWEtcmVhbC1jdXJzb3I=".to_string());
        let conn = paginate(seq(3), &Pagination { after: Some(stale), ..Default::default() })
            .unwrap();
        assert_eq!(nodes(&conn), vec![0, 1, 2]);
        assert!(!conn.page_info.has_previous_page);
    }

    #[test]
    fn malformed_cursor_is_not_an_error() {
        let garbage = Cursor::from("!!! definitely not base64 !!!".to_string());
        let conn = paginate(seq(3), &Pagination { before: Some(garbage), ..Default::default() })
            .unwrap();
        assert_eq!(conn.edges.len(), 3);
        assert!(!conn.page_info.has_next_page);
    }

    #[test]
    fn after_the_final_edge_leaves_an_empty_page() {
        let full = paginate(seq(2), &Pagination::default()).unwrap();
        let cursor = full.edges[1].cursor.clone();

        let conn = paginate(seq(2), &Pagination { after: Some(cursor), ..Default::default() })
            .unwrap();
        assert!(conn.edges.is_empty());
        assert!(conn.page_info.has_previous_page);
        assert_eq!(conn.total_count, 2);
    }

    #[test]
    fn cursors_are_stable_per_offset() {
        assert_eq!(Cursor::from_offset(3), Cursor::from_offset(3));
        assert_ne!(Cursor::from_offset(3), Cursor::from_offset(4));
    }

    #[test]
    fn empty_sequence_paginated() {
        let conn = paginate(
            Vec::<usize>::new(),
            &Pagination { first: Some(5), ..Default::default() },
        )
        .unwrap();
        assert!(conn.edges.is_empty());
        assert_eq!(conn.total_count, 0);
        assert!(!conn.page_info.has_next_page);
        assert!(!conn.page_info.has_previous_page);
    }
}
