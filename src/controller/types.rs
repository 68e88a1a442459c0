//! Controller types and traits
//!
//! Defines the footer state machine, the pagination cursor, and the two seams
//! the controller talks through: the fetcher it issues page requests to and
//! the observer it reports transitions to.

use crate::error::Result;
use crate::page::{PageRequest, PageResult};
use async_trait::async_trait;
use std::ops::Range;

/// Footer/UI affordance state, not network status
///
/// Exactly one value at a time. Transitions are limited to
/// `Idle -> FetchingMore` when a load-more starts, `FetchingMore -> NoMore`
/// when the terminal page is reached, and `FetchingMore -> Idle` on a
/// non-terminal page or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    /// More pages may exist; a load-more is allowed
    #[default]
    Idle,
    /// A load-more fetch is outstanding
    FetchingMore,
    /// The terminal page was reached; further load-more calls are no-ops
    NoMore,
}

impl std::fmt::Display for FetchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FetchState::Idle => "idle",
            FetchState::FetchingMore => "fetching-more",
            FetchState::NoMore => "no-more",
        };
        write!(f, "{label}")
    }
}

/// Pagination cursor
///
/// `next_offset` is mutated only on a successfully completed fetch that was
/// not the terminal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Offset of the next page to request
    pub next_offset: u64,
    /// Records per page
    pub page_size: u64,
}

impl Cursor {
    /// Create a cursor at offset zero
    pub fn new(page_size: u64) -> Self {
        Self {
            next_offset: 0,
            page_size,
        }
    }

    /// Advance to the next page
    pub fn advance(&mut self) {
        self.next_offset += self.page_size;
    }

    /// Reset to the start of the collection
    pub fn reset(&mut self) {
        self.next_offset = 0;
    }
}

/// Asynchronous page fetcher the controller issues requests through
///
/// Transport concerns (timeouts, retries, decoding) belong to implementations
/// of this trait; the controller only reacts to the returned result.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch one page of results
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<T>>;
}

/// Presentation-layer observer for controller transitions
///
/// Injected at construction with named methods instead of mutable callback
/// properties, so the dependency direction stays explicit. All methods have
/// empty default bodies; implementors override what they render.
pub trait FetchObserver: Send + Sync {
    /// The footer state changed
    fn on_state_changed(&self, state: FetchState) {
        let _ = state;
    }

    /// New items were appended at the given index range
    fn on_items_appended(&self, range: Range<usize>) {
        let _ = range;
    }

    /// The item list was replaced wholesale with `count` items
    fn on_items_replaced(&self, count: usize) {
        let _ = count;
    }
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {}
