//! Response model for the Giphy-style GIF API
//!
//! Every field is optional; the API omits fields freely and a usable page must
//! never be rejected over missing metadata. Missing pagination metadata
//! instead makes the page terminal.

use crate::page::PageMeta;
use serde::Deserialize;
use url::Url;

/// Top-level API response
#[derive(Debug, Clone, Deserialize)]
pub struct GiphyResponse {
    /// Returned records
    #[serde(default)]
    pub data: Option<Vec<Gif>>,
    /// Request status metadata
    #[serde(default)]
    pub meta: Option<Meta>,
    /// Pagination metadata
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One GIF record
#[derive(Debug, Clone, Deserialize)]
pub struct Gif {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
}

/// Available renditions
#[derive(Debug, Clone, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub downsized: Option<Rendition>,
}

/// A single rendition; dimensions are strings in the wire format
#[derive(Debug, Clone, Deserialize)]
pub struct Rendition {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

/// Request status carried in the body
///
/// The API reports auth/quota rejections here even on an HTTP 200 transport
/// status, with the human-readable reason in `msg`.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub response_id: Option<String>,
}

/// Pagination metadata for the returned page
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

impl Pagination {
    /// Convert to page metadata; `None` when any field is absent
    pub fn page_meta(&self) -> Option<PageMeta> {
        Some(PageMeta {
            total_count: self.total_count?,
            returned_count: self.count?,
        })
    }
}

/// A decoded feed item: the id and downsized rendition URL of one GIF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifItem {
    /// API-assigned record id
    pub id: String,
    /// Downsized rendition URL
    pub url: String,
}

impl GifItem {
    /// Parse the rendition URL
    pub fn download_url(&self) -> Option<Url> {
        Url::parse(&self.url).ok()
    }
}

impl Gif {
    /// Convert to a feed item; records without a rendition URL are dropped
    pub fn into_item(self) -> Option<GifItem> {
        let url = self.images?.downsized?.url?;
        if url.is_empty() {
            return None;
        }
        Some(GifItem {
            id: self.id.unwrap_or_default(),
            url,
        })
    }
}
