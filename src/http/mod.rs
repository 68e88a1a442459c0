//! HTTP client with retry and backoff
//!
//! Transport collaborator for page fetchers. Timeouts, retries, and error
//! classification live here; the fetch controller only reacts to the
//! success/failure outcome.

mod client;

pub use client::{BackoffType, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
