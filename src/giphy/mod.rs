//! Giphy-style GIF API source
//!
//! A concrete [`PageFetcher`] over the public GIF API the feed pages through.
//! Converts the wire response into the crate's page model: body-level error
//! metadata becomes a client error, absent pagination metadata makes the page
//! terminal.

mod types;

pub use types::{Gif, GifItem, GiphyResponse, Images, Meta, Pagination, Rendition};

use crate::controller::PageFetcher;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::page::{PageRequest, PageResult};
use async_trait::async_trait;
use tracing::debug;

/// Fetcher for one GIF API endpoint
///
/// The API key and any static query parameters (rating, language) are carried
/// by the [`HttpClient`]'s default query configuration.
#[derive(Debug)]
pub struct GiphyFetcher {
    client: HttpClient,
    path: String,
}

impl GiphyFetcher {
    /// Create a fetcher for the given endpoint path
    pub fn new(client: HttpClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Endpoint path this fetcher requests
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl PageFetcher<GifItem> for GiphyFetcher {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<GifItem>> {
        let config = RequestConfig::new()
            .query("offset", request.offset.to_string())
            .query("limit", request.limit.to_string());

        let response: GiphyResponse = self
            .client
            .get_json_with_config(&self.path, config)
            .await?;

        debug!(
            offset = request.offset,
            limit = request.limit,
            path = %self.path,
            "page fetched"
        );

        into_page_result(response, request)
    }
}

/// Convert a wire response into a page result
///
/// Body-level `meta.status >= 400` is an error carrying the server's message.
/// Records lacking a rendition URL are dropped. The page offset falls back to
/// the request offset when the server omits it.
pub fn into_page_result(
    response: GiphyResponse,
    request: PageRequest,
) -> Result<PageResult<GifItem>> {
    if let Some(meta) = &response.meta {
        if let Some(status) = meta.status {
            if status >= 400 {
                let message = meta.msg.clone().unwrap_or_else(|| "request rejected".into());
                return Err(Error::client(status, message));
            }
        }
    }

    let items: Vec<GifItem> = response
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(Gif::into_item)
        .collect();

    let (offset, meta) = match response.pagination {
        Some(pagination) => (
            pagination.offset.unwrap_or(request.offset),
            pagination.page_meta(),
        ),
        None => (request.offset, None),
    };

    Ok(PageResult {
        items,
        offset,
        meta,
    })
}
