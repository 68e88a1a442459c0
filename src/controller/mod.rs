//! Paginated fetch controller
//!
//! Owns pagination cursor state and in-flight bookkeeping for a page-based
//! list-fetching workflow.
//!
//! # Overview
//!
//! The controller module provides:
//! - `PaginatedFetchController` - load-initial / load-more / refresh operations
//! - `FetchState` - the tri-state footer affordance (idle / fetching / no-more)
//! - `PageFetcher` / `FetchObserver` - the transport and presentation seams
//!
//! One controller instance owns one list. All state mutation is serialized
//! behind a single async lock; operations record state, release the lock for
//! the duration of the network round-trip, then re-acquire it to apply the
//! outcome. A refresh logically supersedes any in-flight load-more: the
//! superseded response is discarded on arrival instead of clobbering state
//! written after the refresh completed.

mod types;

pub use types::{Cursor, FetchObserver, FetchState, NoopObserver, PageFetcher};

use crate::error::{Error, Result};
use crate::page::{PageRequest, PageResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Mutable controller state, guarded by one lock
#[derive(Debug)]
struct Inner<T> {
    items: Vec<T>,
    cursor: Cursor,
    state: FetchState,
    in_flight: bool,
    /// Bumped by every refresh; a completion whose generation no longer
    /// matches is stale and must not touch any state.
    generation: u64,
}

/// Pagination fetch controller
///
/// Tracks the accumulated item list, the offset cursor, and the footer state
/// for one paginated feed. Results are fetched through the injected
/// [`PageFetcher`] and transitions reported to the injected [`FetchObserver`].
pub struct PaginatedFetchController<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    observer: Arc<dyn FetchObserver>,
    inner: Mutex<Inner<T>>,
}

impl<T: Send + 'static> PaginatedFetchController<T> {
    /// Create a controller with the given page size
    pub fn new(
        fetcher: Arc<dyn PageFetcher<T>>,
        observer: Arc<dyn FetchObserver>,
        page_size: u64,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid_request("page size must be greater than zero"));
        }
        Ok(Self {
            fetcher,
            observer,
            inner: Mutex::new(Inner {
                items: Vec::new(),
                cursor: Cursor::new(page_size),
                state: FetchState::Idle,
                in_flight: false,
                generation: 0,
            }),
        })
    }

    /// Create a controller that discards all notifications
    pub fn with_noop_observer(fetcher: Arc<dyn PageFetcher<T>>, page_size: u64) -> Result<Self> {
        Self::new(fetcher, Arc::new(NoopObserver), page_size)
    }

    /// Fetch the first page, replacing any accumulated items on success
    ///
    /// Callable at any cursor state; the cursor is reset to offset zero. On
    /// failure the item list is left untouched, the state becomes `Idle`, and
    /// the error is returned to the caller.
    pub async fn load_initial(&self) -> Result<()> {
        self.fetch_first_page().await
    }

    /// Re-fetch the first page, superseding any in-flight load-more
    ///
    /// Same contract as [`load_initial`](Self::load_initial). Intended for a
    /// pull-to-refresh trigger, so it does not require the in-flight guard to
    /// be clear; a late-arriving load-more response is discarded instead.
    pub async fn refresh(&self) -> Result<()> {
        self.fetch_first_page().await
    }

    /// Fetch the next page and append it
    ///
    /// A no-op while a load-more is already outstanding or once the terminal
    /// page has been reached. The `FetchingMore` state is observable before
    /// the network round-trip completes so callers can render a fetching
    /// affordance immediately. The in-flight guard clears on every completion
    /// path. On failure items and cursor are left untouched and the state
    /// returns to `Idle` so the caller may retry.
    pub async fn load_more(&self) -> Result<()> {
        let (request, generation) = {
            let mut inner = self.inner.lock().await;
            if inner.in_flight || inner.state == FetchState::NoMore {
                debug!(
                    in_flight = inner.in_flight,
                    state = %inner.state,
                    "load_more ignored"
                );
                return Ok(());
            }
            let request = PageRequest::new(inner.cursor.next_offset, inner.cursor.page_size)?;
            inner.in_flight = true;
            inner.state = FetchState::FetchingMore;
            (request, inner.generation)
        };
        self.observer.on_state_changed(FetchState::FetchingMore);
        debug!(offset = request.offset, limit = request.limit, "load_more dispatched");

        let outcome = self.fetcher.fetch_page(request).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            // Superseded by a refresh. The refresh already cleared the
            // in-flight guard and rewrote cursor/state; this response must
            // not touch anything.
            debug!(offset = request.offset, "stale load_more response discarded");
            return Ok(());
        }
        inner.in_flight = false;

        match outcome {
            Ok(page) => {
                // The response offset must match the cursor at arrival time,
                // not just the originating request: a refresh that started
                // before this dispatch and completed during the fetch rewrote
                // the cursor under the same generation.
                if page.offset != inner.cursor.next_offset {
                    warn!(
                        expected = inner.cursor.next_offset,
                        got = page.offset,
                        "response offset does not match cursor, dropping page"
                    );
                    self.settle_dropped(inner);
                    return Ok(());
                }
                let appended = self.apply_page(&mut inner, page, false);
                let state = inner.state;
                drop(inner);
                self.observer.on_items_appended(appended);
                self.observer.on_state_changed(state);
                Ok(())
            }
            Err(e) => {
                self.settle_dropped(inner);
                Err(e)
            }
        }
    }

    /// Settle a load-more whose outcome will not be applied
    ///
    /// Only rewinds `FetchingMore` to `Idle`. Any other state was written by
    /// a completed refresh and must stand.
    fn settle_dropped(&self, mut inner: tokio::sync::MutexGuard<'_, Inner<T>>) {
        if inner.state == FetchState::FetchingMore {
            inner.state = FetchState::Idle;
            drop(inner);
            self.observer.on_state_changed(FetchState::Idle);
        }
    }

    /// Shared body of `load_initial` and `refresh`
    async fn fetch_first_page(&self) -> Result<()> {
        let (request, generation) = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            // Any outstanding load-more now belongs to a dead generation.
            inner.in_flight = false;
            let request = PageRequest::new(0, inner.cursor.page_size)?;
            (request, inner.generation)
        };
        debug!(limit = request.limit, "initial fetch dispatched");

        let outcome = self.fetcher.fetch_page(request).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            // A newer refresh owns the state now.
            debug!("stale refresh response discarded");
            return Ok(());
        }

        match outcome {
            Ok(page) => {
                inner.items.clear();
                inner.cursor.reset();
                self.apply_page(&mut inner, page, true);
                let (count, state) = (inner.items.len(), inner.state);
                drop(inner);
                self.observer.on_items_replaced(count);
                self.observer.on_state_changed(state);
                Ok(())
            }
            Err(e) => {
                inner.state = FetchState::Idle;
                drop(inner);
                self.observer.on_state_changed(FetchState::Idle);
                Err(e)
            }
        }
    }

    /// Append a successful page and advance cursor/state
    ///
    /// The cursor only advances on a non-terminal page; a terminal page pins
    /// the state to `NoMore`, which blocks all future load-more calls.
    fn apply_page(
        &self,
        inner: &mut Inner<T>,
        page: PageResult<T>,
        replacing: bool,
    ) -> std::ops::Range<usize> {
        let terminal = page.is_terminal();
        let start = inner.items.len();
        inner.items.extend(page.items);
        let end = inner.items.len();

        if terminal {
            inner.state = FetchState::NoMore;
            if replacing {
                // The first page also establishes the next offset, even when
                // no further fetch will occur.
                inner.cursor.advance();
            }
        } else {
            inner.cursor.advance();
            inner.state = FetchState::Idle;
        }
        debug!(
            appended = end - start,
            total = end,
            next_offset = inner.cursor.next_offset,
            state = %inner.state,
            "page applied"
        );
        start..end
    }

    /// Snapshot of the accumulated items
    pub async fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().await.items.clone()
    }

    /// Number of accumulated items
    pub async fn len(&self) -> usize {
        self.inner.lock().await.items.len()
    }

    /// Whether no items have been accumulated
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.items.is_empty()
    }

    /// Current footer state
    pub async fn fetch_state(&self) -> FetchState {
        self.inner.lock().await.state
    }

    /// Offset the next load-more would request
    pub async fn next_offset(&self) -> u64 {
        self.inner.lock().await.cursor.next_offset
    }

    /// Whether a load-more fetch is outstanding
    pub async fn in_flight(&self) -> bool {
        self.inner.lock().await.in_flight
    }
}

impl<T> std::fmt::Debug for PaginatedFetchController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedFetchController")
            .finish_non_exhaustive()
    }
}
