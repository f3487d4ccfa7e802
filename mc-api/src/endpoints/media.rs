//! Media endpoints: upload, listing, delete, and soft delete.

use std::io;
use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use tokio_util::io::ReaderStream;

use mc_core::constants::{self, messages};
use mc_core::error::{McError, McResult};

use crate::client::ApiClient;
use crate::response::{PaginatedMediaResponse, UploadResponse};

/// Parameters for uploading a single file.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub file_path: PathBuf,
    /// Ask the server to optimize the upload. Only sent when true.
    pub optimize: bool,
}

impl UploadOptions {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            optimize: false,
        }
    }

    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }
}

/// Parameters for uploading several files in one request.
#[derive(Debug, Clone, Default)]
pub struct MultipleUploadOptions {
    /// Files to upload, sent in this order.
    pub file_paths: Vec<PathBuf>,
    /// Ask the server to optimize the uploads. Always sent.
    pub optimize: bool,
}

impl MultipleUploadOptions {
    pub fn new<I, P>(file_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            file_paths: file_paths.into_iter().map(Into::into).collect(),
            optimize: false,
        }
    }

    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }
}

/// Strip everything from the first `.` onward: `"abc123.jpg"` becomes `"abc123"`.
///
/// Ids without a `.` are returned unchanged, so normalizing twice is a no-op.
pub fn normalize_media_id(media_id: &str) -> &str {
    match media_id.find('.') {
        Some(idx) => &media_id[..idx],
        None => media_id,
    }
}

/// Open `path` as a streamed multipart part named after the file.
///
/// Anything other than a regular file is rejected here, before a request is
/// sent, so the failure stays an [`McError::Io`].
async fn file_part(path: &Path) -> McResult<Part> {
    let file = tokio::fs::File::open(path).await?;
    let meta = file.metadata().await?;
    if !meta.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a regular file: {}", path.display()),
        )
        .into());
    }
    let body = reqwest::Body::wrap_stream(ReaderStream::new(file));

    let mut part = Part::stream_with_length(body, meta.len());
    if let Some(name) = path.file_name() {
        part = part.file_name(name.to_string_lossy().into_owned());
    }
    Ok(part)
}

impl ApiClient {
    /// Upload one file and return its hosted URL.
    ///
    /// A success body without any URL is a [`McError::MalformedResponse`].
    pub async fn upload_file(&self, options: &UploadOptions) -> McResult<String> {
        let file = file_part(&options.file_path).await?;
        let mut form = Form::new().part(constants::MEDIA_FIELD, file);
        if options.optimize {
            form = form.text(constants::OPTIMIZE_FIELD, true.to_string());
        }

        let resp = self
            .post_multipart("/media/upload", form, messages::UPLOAD_FAILED)
            .await?;
        let body: UploadResponse = ApiClient::parse_response(resp).await?;
        body.first_url()
            .ok_or_else(|| McError::MalformedResponse("no mediaUrls in upload response".into()))
    }

    /// Upload several files in one request and return their URLs.
    ///
    /// Every file is opened before anything is sent. A success body without
    /// `mediaUrls` yields an empty list.
    pub async fn upload_multiple_files(
        &self,
        options: &MultipleUploadOptions,
    ) -> McResult<Vec<String>> {
        let mut form = Form::new();
        for path in &options.file_paths {
            form = form.part(constants::MEDIA_FIELD, file_part(path).await?);
        }
        form = form.text(constants::OPTIMIZE_FIELD, options.optimize.to_string());

        let resp = self
            .post_multipart("/media/upload", form, messages::MULTIPLE_UPLOAD_FAILED)
            .await?;
        let body: UploadResponse = ApiClient::parse_response(resp).await?;
        Ok(body.into_urls())
    }

    /// Fetch one page (1-based) of uploaded media.
    pub async fn get_medias(&self, page: u32) -> McResult<PaginatedMediaResponse> {
        self.get_json(&format!("/media?page={page}"), messages::FETCH_MEDIA_FAILED)
            .await
    }

    /// Fetch the first page of uploaded media.
    pub async fn get_medias_default(&self) -> McResult<PaginatedMediaResponse> {
        self.get_medias(constants::FIRST_PAGE).await
    }

    /// Permanently delete a media asset. Any extension on the id is ignored.
    ///
    /// The id is percent-encoded as one path segment, so `#`, `?` and `/`
    /// cannot change which resource is addressed.
    pub async fn delete_media(&self, media_id: &str) -> McResult<()> {
        let id = normalize_media_id(media_id);
        self.delete_segment("/media", id, messages::DELETE_FAILED)
            .await?;
        Ok(())
    }

    /// Move a media asset to the trash. Any extension on the id is ignored.
    ///
    /// The id is encoded the same way as in [`ApiClient::delete_media`].
    pub async fn soft_delete_media(&self, media_id: &str) -> McResult<()> {
        let id = normalize_media_id(media_id);
        self.delete_segment("/media/trash", id, messages::SOFT_DELETE_FAILED)
            .await?;
        Ok(())
    }
}
