//! MediaCloud API - HTTP client for the MediaCloud media-hosting REST API.
//!
//! This crate provides a typed client for uploading media files, listing
//! uploads page by page, and deleting or trashing media. It handles bearer
//! authentication, multipart encoding, and translation of error responses
//! into [`mc_core::McError`].

pub mod client;
pub mod endpoints;
pub mod response;

// Re-export key types
pub use client::ApiClient;
pub use endpoints::media::{normalize_media_id, MultipleUploadOptions, UploadOptions};
pub use response::{MediaItem, PageLink, PaginatedMediaResponse, UploadResponse};
