//! Server response types.
//!
//! MediaCloud answers uploads with a `mediaUrls` array, listings with a
//! page-based pagination envelope, and errors with an optional `message`.

use serde::{Deserialize, Serialize};

/// URL of a stored media asset.
pub type MediaItem = String;

/// Body of a successful `POST /media/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// URLs of the stored files, in upload order.
    #[serde(rename = "mediaUrls", default)]
    pub media_urls: Option<Vec<String>>,
}

impl UploadResponse {
    /// All returned URLs. Absent means none.
    pub fn into_urls(self) -> Vec<String> {
        self.media_urls.unwrap_or_default()
    }

    /// The first returned URL, if any.
    pub fn first_url(self) -> Option<String> {
        self.into_urls().into_iter().next()
    }
}

/// One page of uploaded media.
///
/// ```json
/// { "current_page": 1, "data": ["https://..."], "last_page": 3, "per_page": 15, ... }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedMediaResponse {
    /// 1-based index of this page.
    pub current_page: u32,
    /// Media on this page.
    pub data: Vec<MediaItem>,
    pub first_page_url: String,
    /// 1-based position of the first item on this page. `None` on an empty page.
    pub from: Option<u64>,
    pub last_page: u32,
    pub last_page_url: String,
    /// Navigation links as rendered by the server.
    pub links: Vec<PageLink>,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    /// Position of the last item on this page. `None` on an empty page.
    pub to: Option<u64>,
    /// Total number of media across all pages.
    pub total: u64,
}

/// A pagination navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

impl PaginatedMediaResponse {
    /// Whether a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.next_page_url.is_some() && self.current_page < self.last_page
    }

    /// Whether an earlier page exists.
    pub fn has_prev_page(&self) -> bool {
        self.prev_page_url.is_some() && self.current_page > 1
    }

    /// Whether this page holds no media.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Error body on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract `message` from a raw error body. Non-JSON bodies yield `None`.
    pub(crate) fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
    }
}
