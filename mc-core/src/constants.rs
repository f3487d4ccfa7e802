//! Application-wide constants.

/// Application name, used for data and config directories.
pub const APP_NAME: &str = "MediaCloud";

/// Library version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL of the hosted MediaCloud API.
pub const DEFAULT_BASE_URL: &str = "https://mediacloud.ng/api";

/// First page of a paginated listing (pages are 1-based).
pub const FIRST_PAGE: u32 = 1;

/// Multipart field name for uploaded files.
pub const MEDIA_FIELD: &str = "media[]";

/// Multipart field name for the optimize flag.
pub const OPTIMIZE_FIELD: &str = "optimize";

/// Default failure messages used when the server does not explain an error.
pub mod messages {
    pub const UPLOAD_FAILED: &str = "Upload failed";
    pub const MULTIPLE_UPLOAD_FAILED: &str = "Multiple file upload failed";
    pub const FETCH_MEDIA_FAILED: &str = "Failed to fetch uploaded media";
    pub const DELETE_FAILED: &str = "Failed to delete media";
    pub const SOFT_DELETE_FAILED: &str = "Failed to soft delete media";
}

/// Default `User-Agent` sent with every request.
pub fn default_user_agent() -> String {
    format!("mediacloud-rust/{APP_VERSION} ({})", crate::Platform::current())
}
