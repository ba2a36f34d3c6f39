//! Centralized default constants for jotter.
//!
//! **This module is the single source of truth** for all shared default
//! values. The db and api crates reference these constants instead of
//! defining their own magic numbers.

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Maximum title length in characters; longer titles are truncated on save.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum content length in characters.
pub const CONTENT_MAX_CHARS: usize = 1_000_000;

/// Maximum length of the comma-separated tags field in characters.
pub const TAGS_MAX_CHARS: usize = 500;

/// Placeholder stored when the submitted title is empty after trimming.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Content preview length in the listing view, in characters.
pub const PREVIEW_CHARS: usize = 200;

// =============================================================================
// UPLOADS
// =============================================================================

/// Maximum accepted request/file size for image uploads.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Lowercased file extensions accepted by the image upload endpoint.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// URL prefix under which the upload directory is served.
pub const UPLOAD_URL_PREFIX: &str = "/static/uploads";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Base directory for the database file and upload tree.
pub const ENV_BASE_DIR: &str = "JOTTER_BASE_DIR";

/// SQLite database URL override (takes precedence over the base dir).
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Upload directory override.
pub const ENV_UPLOAD_DIR: &str = "UPLOAD_DIR";

/// Listen host override.
pub const ENV_HOST: &str = "HOST";

/// Listen port override.
pub const ENV_PORT: &str = "PORT";

/// Base directory used when no override is configured.
pub const DEFAULT_BASE_DIR: &str = "data";

/// Database filename created under the base directory.
pub const DEFAULT_DATABASE_FILE: &str = "notes.db";

/// Upload directory created under the base directory.
pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";

/// Default listen host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;
