//! Page request/result model
//!
//! Offset/limit page requests, the typed result wrapper around whatever the
//! backing API returns, and the termination rule that decides when a page is
//! the last one.

use crate::error::{Error, Result};

/// A single page request, immutable per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Starting index into the collection
    pub offset: u64,
    /// Number of records requested
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request, rejecting a zero limit
    pub fn new(offset: u64, limit: u64) -> Result<Self> {
        if limit == 0 {
            return Err(Error::invalid_request("limit must be greater than zero"));
        }
        Ok(Self { offset, limit })
    }
}

/// Pagination metadata reported by the backing API for a returned page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Total number of records in the collection
    pub total_count: u64,
    /// Number of records returned in this page
    pub returned_count: u64,
}

/// One page of results
///
/// `meta` is `None` when the response carried no usable pagination metadata;
/// such a page is treated as terminal so the caller stops paging instead of
/// looping against a response it cannot interpret.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    /// Records in arrival order
    pub items: Vec<T>,
    /// Offset this page was returned for
    pub offset: u64,
    /// Pagination metadata, absent on malformed responses
    pub meta: Option<PageMeta>,
}

impl<T> PageResult<T> {
    /// Create a page result with metadata
    pub fn new(items: Vec<T>, offset: u64, total_count: u64, returned_count: u64) -> Self {
        Self {
            items,
            offset,
            meta: Some(PageMeta {
                total_count,
                returned_count,
            }),
        }
    }

    /// Create a page result without pagination metadata (treated as terminal)
    pub fn without_meta(items: Vec<T>, offset: u64) -> Self {
        Self {
            items,
            offset,
            meta: None,
        }
    }

    /// Whether this is the last page of the collection
    ///
    /// A page is terminal when `total_count <= returned_count + offset` from
    /// its own metadata, or when the metadata is absent entirely.
    pub fn is_terminal(&self) -> bool {
        match self.meta {
            Some(meta) => meta.total_count <= meta.returned_count + self.offset,
            None => true,
        }
    }
}
