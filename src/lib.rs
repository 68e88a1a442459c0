// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

//! # pagefeed
//!
//! A small toolkit for offset/limit pagination of REST list endpoints.
//!
//! ## Features
//!
//! - **Pagination fetch controller**: cursor tracking, in-flight guard,
//!   terminal-page detection, footer state transitions
//! - **Refresh supersedes load-more**: stale in-flight responses are discarded
//!   instead of clobbering refreshed state
//! - **HTTP transport**: retries with backoff, default query parameters for
//!   API keys, typed JSON decoding
//! - **YAML feed definitions**: endpoint, page size, and credentials in one
//!   file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagefeed::config::load_feed;
//! use pagefeed::controller::{FetchState, PaginatedFetchController};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pagefeed::Result<()> {
//!     let config = load_feed("feeds/trending.yaml")?;
//!     let fetcher = Arc::new(config.build_fetcher()?);
//!     let controller =
//!         PaginatedFetchController::with_noop_observer(fetcher, config.page_size)?;
//!
//!     controller.load_initial().await?;
//!     while controller.fetch_state().await == FetchState::Idle {
//!         controller.load_more().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │               PaginatedFetchController                  │
//! │  load_initial()    load_more()    refresh()             │
//! │  Idle → FetchingMore → Idle | NoMore                    │
//! └───────────────┬───────────────────────────┬─────────────┘
//!                 │ PageFetcher               │ FetchObserver
//! ┌───────────────┴───────────┐   ┌───────────┴─────────────┐
//! │     HTTP / GIF source     │   │   Presentation layer    │
//! │  retry · backoff · decode │   │  footer · list updates  │
//! └───────────────────────────┘   └─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Page request/result model and the termination rule
pub mod page;

/// Pagination fetch controller
pub mod controller;

/// HTTP client with retry and backoff
pub mod http;

/// Giphy-style GIF API source
pub mod giphy;

/// Feed definitions loaded from YAML
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use controller::{
    Cursor, FetchObserver, FetchState, NoopObserver, PageFetcher, PaginatedFetchController,
};
pub use error::{Error, Result};
pub use page::{PageMeta, PageRequest, PageResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
